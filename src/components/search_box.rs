//! Top bar search box with suggestions.
//!
//! DESIGN
//! ======
//! Every keystroke takes a fresh sequence number; the debounced fetch only
//! fires, and only publishes, while its number is still the newest. A slow
//! older response therefore never overwrites a newer suggestion list, and
//! deleting the query below the minimum length invalidates anything still
//! in flight.

#[cfg(test)]
#[path = "search_box_test.rs"]
mod search_box_test;

use leptos::prelude::*;

use crate::net::types::Suggestion;
use crate::util::{links, page};

/// Minimum trimmed query length before suggestions are requested.
const MIN_QUERY_LEN: usize = 2;
/// Pause after the last keystroke before the suggestion request fires.
#[cfg(feature = "csr")]
const DEBOUNCE_MS: u64 = 300;

/// Search input with an attached suggestion dropdown.
///
/// Submitting, by Enter or by picking a suggestion, navigates to the search
/// results page for the query.
#[component]
pub fn SearchBox() -> impl IntoView {
    let term = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<Suggestion>::new());
    let open = RwSignal::new(false);
    let request_seq = RwSignal::new(0u64);

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        term.set(value.clone());
        let request = request_seq.get_untracked() + 1;
        request_seq.set(request);
        let query = value.trim().to_owned();
        if !should_query(&query) {
            suggestions.set(Vec::new());
            open.set(false);
            return;
        }
        request_suggestions(request_seq, suggestions, open, request, query);
    };

    let submit = move || {
        let query = term.get_untracked().trim().to_owned();
        if query.is_empty() {
            return;
        }
        open.set(false);
        page::navigate(&links::find_url(&page::base_url(), &query));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        } else if ev.key() == "Escape" {
            open.set(false);
        }
    };

    view! {
        <div class="search-box" role="search">
            <input
                class="search-box__input"
                type="search"
                placeholder="gene, protein, ontology term..."
                prop:value=move || term.get()
                on:input=on_input
                on:keydown=on_keydown
                on:blur=move |_| open.set(false)
            />
            <Show when=move || open.get()>
                <ul class="search-box__suggestions">
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|suggestion| {
                                let value = suggestion.value().to_owned();
                                let label = suggestion.label().to_owned();
                                view! {
                                    <li class="search-box__suggestion">
                                        // mousedown so the pick wins the race against the
                                        // input blur that closes the dropdown
                                        <button
                                            type="button"
                                            on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                                ev.prevent_default();
                                                term.set(value.clone());
                                                open.set(false);
                                                page::navigate(
                                                    &links::find_url(&page::base_url(), &value),
                                                );
                                            }
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(feature = "csr")]
fn request_suggestions(
    request_seq: RwSignal<u64>,
    suggestions: RwSignal<Vec<Suggestion>>,
    open: RwSignal<bool>,
    request: u64,
    query: String,
) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(DEBOUNCE_MS)).await;
        if !is_latest(request, request_seq.get_untracked()) {
            return;
        }
        match crate::net::api::fetch_suggestions(&query).await {
            Ok(items) => {
                if is_latest(request, request_seq.get_untracked()) {
                    open.set(!items.is_empty());
                    suggestions.set(items);
                }
            }
            Err(err) => {
                log::warn!("suggestion fetch for {query:?} failed: {err}");
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn request_suggestions(
    request_seq: RwSignal<u64>,
    suggestions: RwSignal<Vec<Suggestion>>,
    open: RwSignal<bool>,
    request: u64,
    query: String,
) {
    let _ = (request_seq, suggestions, open, request, query);
}

/// Whether an already-trimmed query is long enough to ask for suggestions.
fn should_query(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Whether a request still owns the dropdown.
fn is_latest(request: u64, newest: u64) -> bool {
    request == newest
}
