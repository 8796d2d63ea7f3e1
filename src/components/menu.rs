//! Side Menu Component

use leptos::prelude::*;

use crate::route::{self, Route};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Menu() -> impl IntoView {
    let store = use_app_store();
    let (question_id, set_question_id) = signal(String::new());

    let is_users = move || matches!(store.route().get(), Route::Users);

    let on_jump = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Ok(id) = question_id.get().trim().parse::<i64>() {
            route::navigate(store, Route::Question(id));
            set_question_id.set(String::new());
        }
    };

    view! {
        <nav class="menu">
            <button
                class=move || if is_users() { "menu-item active" } else { "menu-item" }
                on:click=move |_| route::navigate(store, Route::Users)
            >
                "유저"
            </button>
            <form class="menu-jump" on:submit=on_jump>
                <input
                    type="text"
                    placeholder="질문 ID"
                    prop:value=move || question_id.get()
                    on:input=move |ev| set_question_id.set(event_target_value(&ev))
                />
                <button type="submit">"이동"</button>
            </form>
        </nav>
    }
}
