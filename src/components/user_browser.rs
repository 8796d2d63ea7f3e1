//! User Browser Component
//!
//! Home page: the paged user endpoint rendered as one infinite-scrolling
//! list with a field/value search form. Submitting a new search resets
//! the page counter and the accumulated list.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_visibility::watch_visibility;

use crate::api;
use crate::components::UserRow;
use crate::models::User;

const SEARCH_FIELDS: &[(&str, &str)] = &[
    ("yelloId", "옐로 ID"),
    ("name", "이름"),
    ("group", "그룹"),
];

type FetchKey = (String, String, u32);

/// One request per distinct (field, value, page). A cleared guard
/// always fetches, so the same key can be forced to refetch.
fn should_fetch(last: Option<&FetchKey>, key: &FetchKey) -> bool {
    last != Some(key)
}

#[component]
pub fn UserBrowser() -> impl IntoView {
    let (users, set_users) = signal(Vec::<User>::new());
    let (page, set_page) = signal(0u32);
    let (total, set_total) = signal(0u64);
    let (error, set_error) = signal(None::<String>);
    let (field, set_field) = signal(String::from("yelloId"));
    let (value, set_value) = signal(String::new());
    // The filter actually applied; editing the form does not refetch
    // until the search is submitted
    let (applied, set_applied) = signal((String::from("yelloId"), String::new()));

    let last_fetched = StoredValue::new(None::<(String, String, u32)>);

    Effect::new(move |_| {
        let page = page.get();
        let (field, value) = applied.get();
        let key = (field.clone(), value.clone(), page);
        if last_fetched.with_value(|last| !should_fetch(last.as_ref(), &key)) {
            return;
        }
        last_fetched.set_value(Some(key));
        spawn_local(async move {
            match api::user::list_users(page, &field, &value).await {
                Ok(result) => {
                    set_total.set(result.total_count);
                    if page == 0 {
                        set_users.set(result.user_list);
                    } else if !result.user_list.is_empty() {
                        // An empty page past the end leaves the list
                        // (and the last-row element) untouched
                        set_users.update(|list| list.extend(result.user_list));
                    }
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        });
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_users.set(Vec::new());
        // The list was just cleared, so even a byte-identical resubmit
        // must go back to the server
        last_fetched.set_value(None);
        set_page.set(0);
        set_applied.set((field.get(), value.get()));
    };

    let last_row: NodeRef<Div> = NodeRef::new();
    watch_visibility(last_row, 0.5, move || set_page.update(|p| *p += 1));

    view! {
        <div class="user-browser">
            <h1>"유저"</h1>
            <form class="user-search" on:submit=on_search>
                <select on:change=move |ev| set_field.set(event_target_value(&ev))>
                    {SEARCH_FIELDS
                        .iter()
                        .map(|(val, label)| {
                            view! {
                                <option value=*val selected=move || field.get() == *val>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="검색어"
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
                <button type="submit">"검색"</button>
            </form>

            <p class="user-total">{move || format!("총 {}명", total.get())}</p>

            {move || error.get().map(|message| view! {
                <div class="error-panel">
                    <h2>"에러"</h2>
                    <p class="error-message">{message}</p>
                </div>
            })}

            <div class="user-list">
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            view! {
                                <div class="user-list-row" node_ref=last_row>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_key_guard() {
        let key = ("yelloId".to_string(), "yello".to_string(), 0);
        assert!(should_fetch(None, &key));
        assert!(!should_fetch(Some(&key), &key));

        let next_page = ("yelloId".to_string(), "yello".to_string(), 1);
        assert!(should_fetch(Some(&key), &next_page));

        let new_filter = ("name".to_string(), "yello".to_string(), 0);
        assert!(should_fetch(Some(&key), &new_filter));
    }

    #[test]
    fn test_resubmitted_search_refetches_after_guard_reset() {
        let key = ("name".to_string(), "김".to_string(), 0);

        // First submit primes the guard
        let mut last = Some(key.clone());
        assert!(!should_fetch(last.as_ref(), &key));

        // Resubmitting the identical search clears the guard along with
        // the list, so the same key fetches again and repopulates it
        last = None;
        assert!(should_fetch(last.as_ref(), &key));
    }
}
