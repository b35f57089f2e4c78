//! Protein domain and family match panel.

#[cfg(test)]
#[path = "protein_match_panel_test.rs"]
mod protein_match_panel_test;

use leptos::prelude::*;

use super::MISSING_FEATURE_MESSAGE;
use super::annotation_card::AnnotationCard;
use crate::net::error::FetchError;
use crate::net::types::ProteinMatch;
use crate::state::panel::{PanelState, PanelStatus};

/// Lazy card listing protein domain and family matches for the feature.
#[component]
pub fn ProteinMatchPanel(feature_id: Memo<Option<i64>>) -> impl IntoView {
    let state = RwSignal::new(PanelState::<Vec<ProteinMatch>>::default());

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
        <AnnotationCard title="Protein matches" on_expand=on_expand>
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
                    (PanelStatus::Loaded, Some(matches)) => {
                        view! {
                            <table class="annotation-card__table">
                                <thead>
                                    <tr>
                                        <th scope="col">"Protein database"</th>
                                        <th scope="col">"Protein domain"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {matches
                                        .into_iter()
                                        .map(|hit| {
                                            let domain = domain_text(&hit);
                                            view! {
                                                <tr>
                                                    <td>{hit.db}</td>
                                                    <td>{domain}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                    _ => view! { <div class="annotation-card__slot"></div> }.into_any(),
                }
            }}
        </AnnotationCard>
    }
}

#[cfg(feature = "csr")]
fn fetch_into(state: RwSignal<PanelState<Vec<ProteinMatch>>>, feature_id: i64) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_protein_matches(feature_id).await {
            Ok(matches) => state.update(|s| s.complete(matches)),
            Err(err) => {
                log::warn!("protein match fetch for feature {feature_id} failed: {err}");
                state.update(|s| s.fail(failure_message(&err)));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn fetch_into(state: RwSignal<PanelState<Vec<ProteinMatch>>>, feature_id: i64) {
    let _ = feature_id;
    state.update(|s| s.fail(failure_message(&FetchError::unavailable())));
}

/// Accession plus description, with absent descriptions left out entirely.
fn domain_text(hit: &ProteinMatch) -> String {
    match hit.subject_desc.as_deref() {
        Some(desc) if !desc.is_empty() => format!("{} {desc}", hit.subject_id),
        _ => hit.subject_id.clone(),
    }
}

fn failure_message(err: &FetchError) -> String {
    if err.is_empty() {
        "No protein matches recorded for this feature.".to_owned()
    } else {
        "Unable to load protein matches.".to_owned()
    }
}
