//! Vote Form Component
//!
//! Builds the current draft: sender/receiver summary, keyword input
//! with chips from the question's keyword list, color radios, and the
//! add button. Every edit replaces the draft wholesale.

use leptos::prelude::*;

use crate::components::UserRow;
use crate::vote::{VoteDraft, VOTE_COLORS};

#[component]
pub fn VoteForm(
    #[prop(into)] draft: Signal<VoteDraft>,
    set_draft: WriteSignal<VoteDraft>,
    #[prop(into)] keywords: Signal<Vec<String>>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let set_keyword = move |value: String| {
        let current = draft.get_untracked();
        set_draft.set(VoteDraft {
            keyword: Some(value),
            ..current
        });
    };

    view! {
        <div class="vote-form">
            <h2>"보낼 투표 만들기"</h2>
            <div class="vote-form-parties">
                <div class="vote-form-party">
                    <h4>"보내는이"</h4>
                    {move || draft.get().sender.map(|user| view! { <UserRow user=user /> })}
                </div>
                <div class="vote-form-party">
                    <h4>"받는이"</h4>
                    {move || draft.get().receiver.map(|user| view! { <UserRow user=user /> })}
                </div>
            </div>

            <div class="vote-form-keyword">
                <h4>"키워드"</h4>
                <input
                    type="text"
                    placeholder="투표 키워드를 입력해주세요"
                    prop:value=move || draft.get().keyword.unwrap_or_default()
                    on:input=move |ev| set_keyword(event_target_value(&ev))
                />
                <div class="keyword-chips">
                    <For
                        each=move || keywords.get()
                        key=|keyword| keyword.clone()
                        children=move |keyword| {
                            let fill = keyword.clone();
                            view! {
                                <button
                                    type="button"
                                    class="keyword-chip"
                                    on:click=move |_| set_keyword(fill.clone())
                                >
                                    {keyword.clone()}
                                </button>
                            }
                        }
                    />
                </div>
            </div>

            <h4>"투표 색깔"</h4>
            <div class="color-radios">
                {VOTE_COLORS
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(index, color)| {
                        let checked = move || draft.get().color_index == index;
                        view! {
                            <label class="color-radio" style=format!("background-color: {}", color)>
                                <input
                                    type="radio"
                                    name="vote-color"
                                    prop:checked=checked
                                    on:change=move |_| {
                                        let current = draft.get_untracked();
                                        set_draft.set(VoteDraft { color_index: index, ..current });
                                    }
                                />
                                {format!("{}번 : {}", index, color)}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <button class="add-btn" on:click=move |_| on_add.run(())>"추가"</button>
        </div>
    }
}
