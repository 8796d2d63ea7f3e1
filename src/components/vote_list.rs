//! Pending Vote List Component
//!
//! The assembled votes awaiting submission, each with its rendered
//! sentence preview, plus the send button.

use leptos::prelude::*;

use crate::components::UserRow;
use crate::models::QuestionDetail;
use crate::vote::{self, VoteDraft, VOTE_COLORS};

#[component]
pub fn VoteListPanel(
    #[prop(into)] question: Signal<Option<QuestionDetail>>,
    #[prop(into)] votes: Signal<Vec<VoteDraft>>,
    #[prop(into)] on_send: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="vote-list">
            <h2>"보낼 투표 리스트"</h2>
            {move || {
                votes
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let color = VOTE_COLORS
                            .get(entry.color_index)
                            .copied()
                            .unwrap_or(VOTE_COLORS[1]);
                        let preview = question.get().map(|q| {
                            (
                                vote::name_line(q.name_head.as_deref(), &q.name_foot),
                                vote::keyword_line(
                                    q.keyword_head.as_deref(),
                                    entry.keyword.as_deref().unwrap_or(""),
                                    &q.keyword_foot,
                                ),
                            )
                        });
                        view! {
                            <div class="vote-entry" style=format!("background-color: {}", color)>
                                <span class="vote-entry-index">{index + 1}</span>
                                {entry.sender.map(|user| view! { <UserRow user=user compact=true /> })}
                                <span class="vote-entry-arrow">"→"</span>
                                {entry.receiver.map(|user| view! { <UserRow user=user compact=true /> })}
                                {preview.map(|(name, keyword)| view! {
                                    <div class="vote-entry-preview">
                                        <p class="preview-name">{name}</p>
                                        <p class="preview-keyword">{keyword}</p>
                                    </div>
                                })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button class="send-btn" on:click=move |_| on_send.run(())>"전송"</button>
        </div>
    }
}
