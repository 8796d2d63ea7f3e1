//! Top Bar Component
//!
//! App chrome plus the session manager: the login/logout button and the
//! OAuth completion sequence when the provider redirects back with an
//! authorization code.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify;
use crate::route::{self, Route};
use crate::session::{self, SessionState};
use crate::storage;
use crate::store::{store_set_session, use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let store = use_app_store();

    // Resolve the initial state from the persisted token, then finish
    // the OAuth exchange if the provider redirected back with a code.
    Effect::new(move |_| {
        store_set_session(&store, SessionState::resolve(storage::access_token().is_some()));

        if let Some(code) = route::query_param("code") {
            store_set_session(&store, SessionState::Authenticating);
            spawn_local(async move {
                match session::complete_login(&code).await {
                    Ok(()) => {
                        notify::alert("로그인에 성공하였습니다!");
                        store_set_session(&store, SessionState::LoggedIn);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[TopBar] login failed: {}", err).into(),
                        );
                        notify::alert(&err.user_message());
                        store_set_session(&store, SessionState::LoggedOut);
                    }
                }
            });
        }
    });

    let on_login = move |_| match store.session().get() {
        SessionState::LoggedIn => {
            session::logout();
            store_set_session(&store, SessionState::LoggedOut);
        }
        SessionState::LoggedOut => session::initiate_login(),
        SessionState::Authenticating => {}
    };

    let login_label = move || match store.session().get() {
        SessionState::LoggedIn => "로그아웃",
        SessionState::Authenticating => "로그인 중...",
        SessionState::LoggedOut => "로그인",
    };

    view! {
        <header class="top-bar">
            <a class="top-bar-title" on:click=move |_| route::navigate(store, Route::Users)>
                <img class="top-bar-logo" src="public/app_icon.svg" alt="logo" />
                <span>"Yello 어드민"</span>
            </a>
            <a
                class="top-bar-link"
                href="https://play.google.com/store/apps/details?id=com.el.yello&hl=ko&gl=KR"
                target="_blank"
            >
                "Play Store"
            </a>
            <a class="top-bar-link" href="https://apps.apple.com/app/id6451451050" target="_blank">
                "App Store"
            </a>
            <button
                class="top-bar-login"
                disabled=move || store.session().get() == SessionState::Authenticating
                on:click=on_login
            >
                {login_label}
            </button>
        </header>
    }
}
