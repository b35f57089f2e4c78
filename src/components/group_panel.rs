//! Ortholog and co-expression group panels.
//!
//! DESIGN
//! ======
//! Both group endpoints normalize to the same shape, a named group plus its
//! member features, so one card implementation renders either kind. The two
//! public components pin the wording and the search facet.

#[cfg(test)]
#[path = "group_panel_test.rs"]
mod group_panel_test;

use leptos::prelude::*;

use super::MISSING_FEATURE_MESSAGE;
use super::annotation_card::AnnotationCard;
use crate::net::error::FetchError;
use crate::net::types::{FeatureGroup, GroupMember};
use crate::state::panel::{PanelState, PanelStatus};
use crate::util::{links, page};

/// Which group endpoint a card talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GroupKind {
    Ortholog,
    Coexpression,
}

impl GroupKind {
    fn title(self) -> &'static str {
        match self {
            Self::Ortholog => "Orthologs",
            Self::Coexpression => "Co-expression",
        }
    }

    /// Label in front of the group name, which links to a faceted search.
    fn group_label(self) -> &'static str {
        match self {
            Self::Ortholog => "Orthologous group",
            Self::Coexpression => "Co-expression group",
        }
    }

    fn facet(self) -> &'static str {
        match self {
            Self::Ortholog => "orthologous_group",
            Self::Coexpression => "coexpression_group",
        }
    }

    fn failure_message(self, err: &FetchError) -> String {
        let message = match (self, err.is_empty()) {
            (Self::Ortholog, true) => "This feature is not part of an orthologous group.",
            (Self::Ortholog, false) => "Unable to load orthologs.",
            (Self::Coexpression, true) => "This feature is not part of a co-expression group.",
            (Self::Coexpression, false) => "Unable to load the co-expression group.",
        };
        message.to_owned()
    }
}

/// Lazy card showing the feature's orthologous group.
#[component]
pub fn OrthologPanel(feature_id: Memo<Option<i64>>) -> impl IntoView {
    group_card(GroupKind::Ortholog, feature_id)
}

/// Lazy card showing the feature's co-expression group.
#[component]
pub fn CoexpressionPanel(feature_id: Memo<Option<i64>>) -> impl IntoView {
    group_card(GroupKind::Coexpression, feature_id)
}

fn group_card(kind: GroupKind, feature_id: Memo<Option<i64>>) -> impl IntoView {
    let state = RwSignal::new(PanelState::<FeatureGroup>::default());

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
            Some(feature) => fetch_into(kind, state, feature),
            None => state.update(|s| s.fail(MISSING_FEATURE_MESSAGE)),
        }
    });

    view! {
        <AnnotationCard title=kind.title() on_expand=on_expand>
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
                    (PanelStatus::Loaded, Some(group)) => {
                        let base = page::base_url();
                        let facet_href = links::facet_search_url(&base, kind.facet(), &group.name);
                        view! {
                            <ul class="group-panel__list">
                                <li class="group-panel__group">
                                    {kind.group_label()}
                                    ": "
                                    <a href=facet_href>{group.name}</a>
                                </li>
                                {group
                                    .members
                                    .into_iter()
                                    .map(|member| member_item(&base, member))
                                    .collect_view()}
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

fn member_item(base: &str, member: GroupMember) -> impl IntoView {
    let href = links::feature_url(base, member.feature_id);
    let display = display_text(&member);
    view! {
        <li class="group-panel__member">
            <a href=href>{member.uniquename}</a>
            {display.map(|d| format!(" {d}"))}
            " "
            <i>{member.organism}</i>
        </li>
    }
}

#[cfg(feature = "csr")]
fn fetch_into(kind: GroupKind, state: RwSignal<PanelState<FeatureGroup>>, feature_id: i64) {
    leptos::task::spawn_local(async move {
        let outcome = match kind {
            GroupKind::Ortholog => crate::net::api::fetch_ortholog_group(feature_id).await,
            GroupKind::Coexpression => crate::net::api::fetch_coexpression_group(feature_id).await,
        };
        match outcome {
            Ok(group) => state.update(|s| s.complete(group)),
            Err(err) => {
                log::warn!("{kind:?} group fetch for feature {feature_id} failed: {err}");
                state.update(|s| s.fail(kind.failure_message(&err)));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn fetch_into(kind: GroupKind, state: RwSignal<PanelState<FeatureGroup>>, feature_id: i64) {
    let _ = feature_id;
    state.update(|s| s.fail(kind.failure_message(&FetchError::unavailable())));
}

/// Display name worth showing next to the unique name, if any.
fn display_text(member: &GroupMember) -> Option<String> {
    member.display.clone().filter(|d| !d.is_empty())
}
