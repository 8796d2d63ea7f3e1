//! Yello Admin Frontend App
//!
//! Root component: global store, URL-backed routing, page layout.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{Menu, QuestionPage, TopBar, UserBrowser};
use crate::route::{self, Route};
use crate::store::{store_set_route, AppState, AppStateStoreFields, AppStore};

/// Re-resolve the route when the operator navigates browser history
fn bind_popstate(store: AppStore) {
    let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        store_set_route(&store, route::current_route());
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState {
        route: route::current_route(),
        ..Default::default()
    });
    provide_context(store);
    bind_popstate(store);

    view! {
        <TopBar />
        <div class="app-layout">
            <Menu />
            <main class="main-content">
                {move || match store.route().get() {
                    Route::Users => view! { <UserBrowser /> }.into_any(),
                    Route::Question(id) => view! { <QuestionPage question_id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
