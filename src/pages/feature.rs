//! Feature page stacking the annotation cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the main route. It resolves which feature is on display and hands
//! the id to the annotation cards; each card owns its own fetch and only
//! talks to the API once it is opened.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::group_panel::{CoexpressionPanel, OrthologPanel};
use crate::components::ontology_panel::OntologyPanel;
use crate::components::protein_match_panel::ProteinMatchPanel;
use crate::components::publication_panel::PublicationPanel;
use crate::components::sequence_panel::SequencePanel;
use crate::components::similarity_panel::SimilarityPanel;
use crate::components::top_bar::TopBar;
use crate::util::page;

/// Feature page: top bar plus the collapsible annotation cards.
///
/// The feature id comes from the `feature_id` query parameter, falling back
/// to the host page's hidden `#feature_id` field. It is memoized so the
/// cards only reset when the id actually changes, not on every query-map
/// update.
#[component]
pub fn FeaturePage() -> impl IntoView {
    let query = use_query_map();
    let feature_id = Memo::new(move |_| {
        query.with(|params| effective_feature_id(params.get("feature_id").as_deref()))
    });

    view! {
        <div class="feature-page">
            <TopBar/>
            <main class="feature-page__annotations">
                <Show
                    when=move || feature_id.get().is_some()
                    fallback=|| {
                        view! {
                            <p class="feature-page__hint">
                                "No feature selected. Search for a gene or protein to get started."
                            </p>
                        }
                    }
                >
                    <OntologyPanel feature_id=feature_id/>
                    <ProteinMatchPanel feature_id=feature_id/>
                    <SimilarityPanel feature_id=feature_id/>
                    <OrthologPanel feature_id=feature_id/>
                    <CoexpressionPanel feature_id=feature_id/>
                    <PublicationPanel feature_id=feature_id/>
                    <SequencePanel feature_id=feature_id/>
                </Show>
            </main>
        </div>
    }
}

/// Resolves the feature on display: the `feature_id` query parameter wins,
/// the host page's hidden `#feature_id` field is the fallback.
fn effective_feature_id(param: Option<&str>) -> Option<i64> {
    param
        .and_then(page::parse_feature_id)
        .or_else(page::hidden_feature_id)
}

#[cfg(test)]
#[path = "feature_test.rs"]
mod feature_test;
