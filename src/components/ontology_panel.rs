//! Ontology term annotation panel.

#[cfg(test)]
#[path = "ontology_panel_test.rs"]
mod ontology_panel_test;

use leptos::prelude::*;

use super::MISSING_FEATURE_MESSAGE;
use super::annotation_card::AnnotationCard;
use crate::net::error::FetchError;
use crate::net::types::OntologyTerm;
use crate::state::panel::{PanelState, PanelStatus};

/// Lazy card listing the ontology terms assigned to the feature.
#[component]
pub fn OntologyPanel(feature_id: Memo<Option<i64>>) -> impl IntoView {
    let state = RwSignal::new(PanelState::<Vec<OntologyTerm>>::default());

    // A different feature means the cached terms no longer apply.
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
        <AnnotationCard title="Ontology" on_expand=on_expand>
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
                    (PanelStatus::Loaded, Some(terms)) => {
                        view! {
                            <table class="annotation-card__table">
                                <thead>
                                    <tr>
                                        <th scope="col">"Ontology"</th>
                                        <th scope="col">"ID"</th>
                                        <th scope="col">"Term"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {terms
                                        .into_iter()
                                        .map(|term| {
                                            let id = term_id(&term);
                                            view! {
                                                <tr>
                                                    <td>{term.cv}</td>
                                                    <td>{id}</td>
                                                    <td>{term.cvterm}</td>
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
fn fetch_into(state: RwSignal<PanelState<Vec<OntologyTerm>>>, feature_id: i64) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_ontology_terms(feature_id).await {
            Ok(terms) => state.update(|s| s.complete(terms)),
            Err(err) => {
                log::warn!("ontology fetch for feature {feature_id} failed: {err}");
                state.update(|s| s.fail(failure_message(&err)));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn fetch_into(state: RwSignal<PanelState<Vec<OntologyTerm>>>, feature_id: i64) {
    let _ = feature_id;
    state.update(|s| s.fail(failure_message(&FetchError::unavailable())));
}

/// Term accession in `db:accession` form (e.g. `GO:0003677`).
fn term_id(term: &OntologyTerm) -> String {
    format!("{}:{}", term.db, term.dbxref)
}

fn failure_message(err: &FetchError) -> String {
    if err.is_empty() {
        "No ontology terms recorded for this feature.".to_owned()
    } else {
        "Unable to load ontology terms.".to_owned()
    }
}
