//! Client-side Routes
//!
//! URL-backed view switching: the route enum is parsed from the browser
//! location, navigation pushes history entries, and popstate (app.rs)
//! re-resolves it.

use wasm_bindgen::JsValue;

use crate::store::{store_set_route, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// User browser (home)
    #[default]
    Users,
    /// Question detail and vote composer
    Question(i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Users => "/".to_string(),
            Route::Question(id) => format!("/question/{}", id),
        }
    }

    /// Parse a location pathname. Unknown paths fall back to the user
    /// browser.
    pub fn parse(pathname: &str) -> Route {
        let mut segments = pathname.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next()) {
            (Some("question"), Some(id)) => {
                id.parse().map(Route::Question).unwrap_or_default()
            }
            _ => Route::Users,
        }
    }
}

/// Current route from the browser location
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or_default()
}

/// Query parameter from the current location, if present
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// Push a new history entry and switch the active view
pub fn navigate(store: AppStore, route: Route) {
    if let Some(win) = web_sys::window() {
        let _ = win
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&route.path())));
    }
    store_set_route(&store, route);
}

/// history.back(); the popstate listener re-resolves the route
pub fn back() {
    if let Some(win) = web_sys::window() {
        if let Ok(history) = win.history() {
            let _ = history.back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_question_route() {
        assert_eq!(Route::parse("/question/42"), Route::Question(42));
        assert_eq!(Route::parse("/question/42/"), Route::Question(42));
    }

    #[test]
    fn test_parse_falls_back_to_users() {
        assert_eq!(Route::parse("/"), Route::Users);
        assert_eq!(Route::parse(""), Route::Users);
        assert_eq!(Route::parse("/question"), Route::Users);
        assert_eq!(Route::parse("/question/abc"), Route::Users);
        assert_eq!(Route::parse("/unknown/1"), Route::Users);
    }

    #[test]
    fn test_path_parse_roundtrip() {
        for route in [Route::Users, Route::Question(7)] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
