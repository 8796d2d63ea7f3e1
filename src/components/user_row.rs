//! User Row Component
//!
//! The id / avatar / handle / name cell shared by the roster panels,
//! the draft summary and the pending vote list.

use leptos::prelude::*;

use crate::models::User;

#[component]
pub fn UserRow(user: User, #[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <div class=if compact { "user-row compact" } else { "user-row" }>
            <span class="user-id">{user.id}</span>
            <img class="user-avatar" src=user.image_url alt="avatar" />
            <div class="user-ident">
                <span class="user-handle">{format!("@{}", user.yello_id)}</span>
                <span class="user-name">{user.name}</span>
            </div>
        </div>
    }
}
