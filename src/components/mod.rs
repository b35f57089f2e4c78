//! Annotation page UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each annotation panel owns its trigger, fetch, and rendering around the
//! shared `AnnotationCard` shell. `search_box` drives navigation from the
//! top bar.

pub mod annotation_card;
pub mod group_panel;
pub mod ontology_panel;
pub mod protein_match_panel;
pub mod publication_panel;
pub mod search_box;
pub mod sequence_panel;
pub mod similarity_panel;
pub mod top_bar;

/// Slot message used when the host page exposes no usable feature id.
pub(crate) const MISSING_FEATURE_MESSAGE: &str = "No feature is selected.";
