//! Roster Panel Component
//!
//! One infinite-scrolling picker over the shared user roster. The panel
//! watches its own last rendered row; when that row becomes visible its
//! page counter advances by one. Rows are never removed on selection.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_visibility::watch_visibility;

use crate::components::UserRow;
use crate::models::User;

#[component]
pub fn RosterPanel(
    #[prop(into)] title: String,
    #[prop(into)] roster: Signal<Vec<User>>,
    #[prop(into)] on_pick: Callback<User>,
    set_page: WriteSignal<u32>,
) -> impl IntoView {
    // Every row binds this ref during a render pass; the last mount
    // wins, so the ref always tracks the final row.
    let last_row: NodeRef<Div> = NodeRef::new();

    watch_visibility(last_row, 0.5, move || set_page.update(|page| *page += 1));

    view! {
        <div class="roster-panel">
            <h3 class="roster-title">{title}</h3>
            <p class="roster-hint">"클릭해서 선택하세요"</p>
            <div class="roster-scroll">
                {move || {
                    roster
                        .get()
                        .into_iter()
                        .map(|user| {
                            let picked = user.clone();
                            view! {
                                <div
                                    class="roster-row"
                                    node_ref=last_row
                                    on:click=move |_| on_pick.run(picked.clone())
                                >
                                    <UserRow user=user />
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
