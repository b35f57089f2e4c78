//! Residue sequence panel.

use leptos::prelude::*;

use super::MISSING_FEATURE_MESSAGE;
use super::annotation_card::AnnotationCard;
use crate::net::error::FetchError;
use crate::state::panel::{PanelState, PanelStatus};

/// Lazy card showing the feature's residue string.
///
/// Residues are inserted as a text node, never as markup.
#[component]
pub fn SequencePanel(feature_id: Memo<Option<i64>>) -> impl IntoView {
    let state = RwSignal::new(PanelState::<String>::default());

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
        <AnnotationCard title="Sequence" on_expand=on_expand>
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
                    (PanelStatus::Loaded, Some(residues)) => {
                        view! { <pre class="sequence-panel__residues">{residues}</pre> }.into_any()
                    }
                    _ => view! { <div class="annotation-card__slot"></div> }.into_any(),
                }
            }}
        </AnnotationCard>
    }
}

#[cfg(feature = "csr")]
fn fetch_into(state: RwSignal<PanelState<String>>, feature_id: i64) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_sequence(feature_id).await {
            Ok(residues) => state.update(|s| s.complete(residues)),
            Err(err) => {
                log::warn!("sequence fetch for feature {feature_id} failed: {err}");
                state.update(|s| s.fail(failure_message(&err)));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn fetch_into(state: RwSignal<PanelState<String>>, feature_id: i64) {
    let _ = feature_id;
    state.update(|s| s.fail(failure_message(&FetchError::unavailable())));
}

fn failure_message(err: &FetchError) -> String {
    if err.is_empty() {
        "No sequence stored for this feature.".to_owned()
    } else {
        "Unable to load the sequence.".to_owned()
    }
}
