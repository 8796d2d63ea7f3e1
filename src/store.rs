//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::route::Route;
use crate::session::SessionState;

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Operator session
    pub session: SessionState,
    /// Active page
    pub route: Route,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the session state
pub fn store_set_session(store: &AppStore, state: SessionState) {
    *store.session().write() = state;
}

/// Replace the active route
pub fn store_set_route(store: &AppStore, route: Route) {
    *store.route().write() = route;
}
