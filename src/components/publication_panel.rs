//! Publication panel.
//!
//! Renders every associated publication as a compact citation line. Curation
//! quality varies, so each citation part is optional and absent parts drop
//! out together with their punctuation.

#[cfg(test)]
#[path = "publication_panel_test.rs"]
mod publication_panel_test;

use leptos::prelude::*;

use super::MISSING_FEATURE_MESSAGE;
use super::annotation_card::AnnotationCard;
use crate::net::error::FetchError;
use crate::net::types::Publication;
use crate::state::panel::{PanelState, PanelStatus};
use crate::util::links;

/// Lazy card listing publications associated with the feature.
#[component]
pub fn PublicationPanel(feature_id: Memo<Option<i64>>) -> impl IntoView {
    let state = RwSignal::new(PanelState::<Vec<Publication>>::default());

    Effect::new(move || {
        let _ = feature_id.get();
        state.update(|s| s.reset());
    });

    let on_expand = Callback::new(move |_| {
        let mut start = false;
        state.update(|s| start = s.begin_load());
        if !start {
            return;
        }
        match feature_id.get_untracked() {
            Some(feature) => fetch_into(state, feature),
            None => state.update(|s| s.fail(MISSING_FEATURE_MESSAGE)),
        }
    });

    view! {
        <AnnotationCard title="Publications" on_expand=on_expand>
            {move || {
                let snapshot = state.get();
                match (snapshot.status, snapshot.content) {
                    (PanelStatus::Loading, _) => {
                        view! { <small class="annotation-card__loading">"LOADING..."</small> }
                            .into_any()
                    }
                    (PanelStatus::Failed, _) => {
                        let message = snapshot.error.unwrap_or_default();
                        view! { <p class="annotation-card__message">{message}</p> }.into_any()
                    }
                    (PanelStatus::Loaded, Some(publications)) => {
                        view! {
                            <ul class="publication-panel__list">
                                {publications.into_iter().map(publication_item).collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                    _ => view! { <div class="annotation-card__slot"></div> }.into_any(),
                }
            }}
        </AnnotationCard>
    }
}

fn publication_item(publication: Publication) -> impl IntoView {
    let tail = citation_tail(&publication);
    let authors = present(publication.authors);
    let title = present(publication.title);
    let series = present(publication.series_name);
    let doi = present(publication.doi);
    view! {
        <li class="publication-panel__entry">
            <small>
                {authors.map(|a| format!("{a} "))}
                {title.map(|t| view! { <span><b>{t}</b>" "</span> })}
                {series.map(|s| view! { <span><i>{s}</i>". "</span> })}
                {tail}
                {doi.map(|doi| {
                    let href = links::doi_url(&doi);
                    view! {
                        <span class="publication-panel__doi">
                            " DOI:"
                            <a href=href target="_blank" rel="noopener">{doi}</a>
                        </span>
                    }
                })}
            </small>
        </li>
    }
}

#[cfg(feature = "csr")]
fn fetch_into(state: RwSignal<PanelState<Vec<Publication>>>, feature_id: i64) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_publications(feature_id).await {
            Ok(publications) => state.update(|s| s.complete(publications)),
            Err(err) => {
                log::warn!("publication fetch for feature {feature_id} failed: {err}");
                state.update(|s| s.fail(failure_message(&err)));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn fetch_into(state: RwSignal<PanelState<Vec<Publication>>>, feature_id: i64) {
    let _ = feature_id;
    state.update(|s| s.fail(failure_message(&FetchError::unavailable())));
}

/// Year, volume, and pages in citation order: `2008; 36 D1009-14`.
///
/// The semicolon belongs to the year and disappears with it.
fn citation_tail(publication: &Publication) -> String {
    let year = publication.pyear.as_deref().unwrap_or_default();
    let issue = [publication.volume.as_deref(), publication.pages.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    match (year.is_empty(), issue.is_empty()) {
        (false, false) => format!("{year}; {issue}"),
        (false, true) => year.to_owned(),
        (true, false) => issue,
        (true, true) => String::new(),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn failure_message(err: &FetchError) -> String {
    if err.is_empty() {
        "No publications recorded for this feature.".to_owned()
    } else {
        "Unable to load publications.".to_owned()
    }
}
