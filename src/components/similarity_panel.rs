//! Similarity hit panel.
//!
//! DESIGN
//! ======
//! Hit records are sparse: subjects may lack names, coordinates, or scores
//! depending on the analysis that produced them. Cell helpers render absent
//! values as empty strings so the table never shows placeholder words.

#[cfg(test)]
#[path = "similarity_panel_test.rs"]
mod similarity_panel_test;

use leptos::prelude::*;

use super::MISSING_FEATURE_MESSAGE;
use super::annotation_card::AnnotationCard;
use crate::net::error::FetchError;
use crate::net::types::SimilarityHit;
use crate::state::panel::{PanelState, PanelStatus};
use crate::util::links;

/// Lazy card listing similarity hits for the feature.
#[component]
pub fn SimilarityPanel(feature_id: Memo<Option<i64>>) -> impl IntoView {
    let state = RwSignal::new(PanelState::<Vec<SimilarityHit>>::default());

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
        <AnnotationCard title="Similarity" on_expand=on_expand>
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
                    (PanelStatus::Loaded, Some(hits)) => {
                        view! {
                            <table class="annotation-card__table">
                                <thead>
                                    <tr>
                                        <th scope="col">"Program"</th>
                                        <th scope="col">"Hit"</th>
                                        <th scope="col">"Query start"</th>
                                        <th scope="col">"Query end"</th>
                                        <th scope="col">"Score"</th>
                                        <th scope="col">"Evalue"</th>
                                    </tr>
                                </thead>
                                <tbody>{hits.into_iter().map(hit_row).collect_view()}</tbody>
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

fn hit_row(hit: SimilarityHit) -> impl IntoView {
    let hit_cell = match hit_link(&hit) {
        Some(url) => {
            let label = hit.name.clone().unwrap_or_default();
            let prefix = hit_prefix(&hit);
            let lead = if prefix.is_empty() {
                String::new()
            } else {
                format!("{prefix} ")
            };
            view! {
                <span>
                    {lead}
                    <a href=url target="_blank" rel="noopener">{label}</a>
                </span>
            }
                .into_any()
        }
        None => view! { <span>{hit_text(&hit)}</span> }.into_any(),
    };
    view! {
        <tr>
            <td>{program_label(&hit)}</td>
            <td>{hit_cell}</td>
            <td>{coordinate_text(hit.query_start)}</td>
            <td>{coordinate_text(hit.query_end)}</td>
            <td>{score_text(hit.score)}</td>
            <td>{evalue_text(hit.evalue)}</td>
        </tr>
    }
}

#[cfg(feature = "csr")]
fn fetch_into(state: RwSignal<PanelState<Vec<SimilarityHit>>>, feature_id: i64) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_similarity_hits(feature_id).await {
            Ok(hits) => state.update(|s| s.complete(hits)),
            Err(err) => {
                log::warn!("similarity fetch for feature {feature_id} failed: {err}");
                state.update(|s| s.fail(failure_message(&err)));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn fetch_into(state: RwSignal<PanelState<Vec<SimilarityHit>>>, feature_id: i64) {
    let _ = feature_id;
    state.update(|s| s.fail(failure_message(&FetchError::unavailable())));
}

/// Program name plus version, e.g. `blastp 2.2.31+`.
fn program_label(hit: &SimilarityHit) -> String {
    format!("{} {}", hit.program, hit.programversion)
}

/// NCBI protein link for the subject, for protein hits sourced from BLAST
/// with a subject name to link.
fn hit_link(hit: &SimilarityHit) -> Option<String> {
    let name = hit.name.as_deref().unwrap_or_default();
    let linkable = hit.db_name.as_deref() == Some("BLAST_SOURCE")
        && hit.sotype.as_deref() == Some("polypeptide")
        && !name.is_empty();
    linkable.then(|| links::ncbi_protein_url(name))
}

/// Source database plus subject unique name, skipping absent parts.
fn hit_prefix(hit: &SimilarityHit) -> String {
    join_present(&[hit.db_name.as_deref(), hit.uniquename.as_deref()])
}

/// Full unlinked hit description, skipping absent parts.
fn hit_text(hit: &SimilarityHit) -> String {
    join_present(&[hit.db_name.as_deref(), hit.uniquename.as_deref(), hit.name.as_deref()])
}

fn coordinate_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn score_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Expectation values span hundreds of orders of magnitude; small ones are
/// shown in scientific notation.
fn evalue_text(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v != 0.0 && v.abs() < 1e-3 => format!("{v:e}"),
        Some(v) => v.to_string(),
    }
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts.iter().filter_map(|p| *p).filter(|p| !p.is_empty()).collect::<Vec<_>>().join(" ")
}

fn failure_message(err: &FetchError) -> String {
    if err.is_empty() {
        "No similarity hits recorded for this feature.".to_owned()
    } else {
        "Unable to load similarity hits.".to_owned()
    }
}
