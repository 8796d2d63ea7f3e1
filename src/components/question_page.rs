//! Question Page Component
//!
//! Question detail plus the dual-roster vote composer: two
//! independently-paged pickers over one shared roster, local vote
//! assembly, batch submission, and question deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{RosterPanel, VoteForm, VoteListPanel};
use crate::models::{QuestionDetail, User, VoteSendRequest};
use crate::notify;
use crate::route;
use crate::vote::{self, VoteDraft};

#[component]
pub fn QuestionPage(question_id: i64) -> impl IntoView {
    let (question, set_question) = signal(None::<QuestionDetail>);
    let (question_error, set_question_error) = signal(None::<String>);
    let (roster, set_roster) = signal(Vec::<User>::new());
    let (roster_loading, set_roster_loading) = signal(true);
    let (roster_error, set_roster_error) = signal(None::<String>);
    let (sender_page, set_sender_page) = signal(0u32);
    let (receiver_page, set_receiver_page) = signal(0u32);
    let (draft, set_draft) = signal(VoteDraft::default());
    let (votes, set_votes) = signal(Vec::<VoteDraft>::new());

    // Question detail, fetched once per page view
    Effect::new(move |_| {
        spawn_local(async move {
            match api::question::get_question(question_id).await {
                Ok(detail) => set_question.set(Some(detail)),
                Err(err) => set_question_error.set(Some(err.user_message())),
            }
        });
    });

    // Shared roster fetch keyed by whichever picker is further ahead.
    // A counter advance that does not raise the max issues no request;
    // fetched pages only ever append.
    let shared_page = Memo::new(move |_| vote::shared_page(sender_page.get(), receiver_page.get()));
    let last_fetched = StoredValue::new(None::<u32>);
    Effect::new(move |_| {
        let page = shared_page.get();
        if !vote::needs_fetch(last_fetched.get_value(), page) {
            return;
        }
        last_fetched.set_value(Some(page));
        set_roster_loading.set(true);
        spawn_local(async move {
            match api::user::list_users(page, "yelloId", "").await {
                Ok(result) => {
                    web_sys::console::log_1(
                        &format!(
                            "[QuestionPage] page {} loaded {} users",
                            page,
                            result.user_list.len()
                        )
                        .into(),
                    );
                    // An empty page past the end leaves the roster (and
                    // the last-row element) untouched
                    if !result.user_list.is_empty() {
                        set_roster.update(|list| list.extend(result.user_list));
                    }
                }
                Err(err) => set_roster_error.set(Some(err.user_message())),
            }
            set_roster_loading.set(false);
        });
    });

    // Roster row picks replace the draft's party; rows stay listed
    let pick_sender = Callback::new(move |user: User| {
        let current = draft.get_untracked();
        set_draft.set(VoteDraft {
            sender: Some(user),
            ..current
        });
    });
    let pick_receiver = Callback::new(move |user: User| {
        let current = draft.get_untracked();
        set_draft.set(VoteDraft {
            receiver: Some(user),
            ..current
        });
    });

    let on_add = Callback::new(move |_: ()| {
        let mut current = draft.get_untracked();
        let mut appended = false;
        set_votes.update(|list| appended = vote::append_draft(list, &mut current));
        if appended {
            // append_draft left the reset draft behind
            set_draft.set(current);
        } else {
            notify::alert("투표를 완성해주세요");
        }
    });

    let on_send = Callback::new(move |_: ()| {
        let pending = votes.get_untracked();
        let prompt = format!(
            "{}개의 투표를 전송하시겠습니까?\n남발하는 투표는 자제합시다",
            pending.len()
        );
        if !notify::confirm(&prompt) {
            return;
        }
        let batch = VoteSendRequest {
            vote_content_list: pending.iter().filter_map(VoteDraft::to_content).collect(),
        };
        spawn_local(async move {
            match api::question::send_votes(question_id, &batch).await {
                Ok(message) => {
                    notify::alert(&message);
                    set_votes.set(Vec::new());
                }
                // The pending list is left untouched on failure
                Err(err) => notify::alert(&err.user_message()),
            }
        });
    });

    let on_delete = move |_| {
        if !notify::confirm(&format!("{}를 삭제하시겠습니까?", question_id)) {
            return;
        }
        spawn_local(async move {
            match api::question::delete_question(question_id).await {
                Ok(message) => {
                    notify::alert(&message);
                    route::back();
                }
                Err(err) => notify::alert(&err.user_message()),
            }
        });
    };

    let keywords = Signal::derive(move || {
        question
            .get()
            .map(|q| q.keyword_list.clone())
            .unwrap_or_default()
    });

    let error_message = move || question_error.get().or_else(|| roster_error.get());
    // Latched once the question and the first roster page are in, so
    // later page advances never remount the composer
    let ready = Memo::new(move |prev: Option<&bool>| {
        *prev.unwrap_or(&false) || (question.get().is_some() && !roster_loading.get())
    });

    view! {
        {move || {
            if let Some(message) = error_message() {
                view! {
                    <div class="error-panel">
                        <h2>"에러"</h2>
                        <p class="error-message">{message}</p>
                    </div>
                }
                    .into_any()
            } else if !ready.get() {
                view! { <div class="spinner">"로딩 중..."</div> }.into_any()
            } else {
                view! {
                    <div class="question-page">
                        <button class="back-btn" on:click=move |_| route::back()>"이전"</button>

                        <DetailPanel question=question />

                        <button class="delete-btn" on:click=on_delete>"삭제"</button>

                        <hr class="section-divider" />

                        <h2>"해당 투표 보내기"</h2>
                        <p class="vote-notes">
                            "유의사항\n - 쿨타임X\n - 푸쉬알람O\n - 악용X\n - 키워드 커스텀 가능"
                        </p>

                        <VoteListPanel question=question votes=votes on_send=on_send />

                        <VoteForm
                            draft=draft
                            set_draft=set_draft
                            keywords=keywords
                            on_add=on_add
                        />

                        <div class="roster-panels">
                            <RosterPanel
                                title="보내는 사람"
                                roster=roster
                                on_pick=pick_sender
                                set_page=set_sender_page
                            />
                            <RosterPanel
                                title="받는 사람"
                                roster=roster
                                on_pick=pick_receiver
                                set_page=set_receiver_page
                            />
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// The question's template fragments and keyword list
#[component]
fn DetailPanel(#[prop(into)] question: Signal<Option<QuestionDetail>>) -> impl IntoView {
    view! {
        <div class="detail-panel">
            {move || {
                question
                    .get()
                    .map(|q| {
                        view! {
                            <div class="detail-columns">
                                <div class="detail-basic">
                                    <h2>"기본 정보"</h2>
                                    <div class="detail-row">
                                        <span class="detail-label">"ID"</span>
                                        <span>{q.id}</span>
                                    </div>
                                    <div class="detail-row">
                                        <span class="detail-label">"섹션1"</span>
                                        <span>{q.name_head.clone().unwrap_or_default()}</span>
                                    </div>
                                    <div class="detail-row">
                                        <span class="detail-label">"섹션2"</span>
                                        <span>{q.name_foot.clone()}</span>
                                    </div>
                                    <div class="detail-row">
                                        <span class="detail-label">"섹션3"</span>
                                        <span>{q.keyword_head.clone().unwrap_or_default()}</span>
                                    </div>
                                    <div class="detail-row">
                                        <span class="detail-label">"섹션4"</span>
                                        <span>{q.keyword_foot.clone()}</span>
                                    </div>
                                </div>
                                <div class="detail-keywords">
                                    <h2>"키워드"</h2>
                                    {q.keyword_list
                                        .iter()
                                        .enumerate()
                                        .map(|(index, keyword)| {
                                            view! {
                                                <div class="detail-row">
                                                    <span class="detail-label">
                                                        {format!("키워드{}", index + 1)}
                                                    </span>
                                                    <span>{keyword.clone()}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
