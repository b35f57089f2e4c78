use super::*;

fn member(display: Option<&str>) -> GroupMember {
    GroupMember {
        feature_id: 42,
        uniquename: "AT1G01010.1".to_owned(),
        display: display.map(str::to_owned),
        organism: "Arabidopsis thaliana".to_owned(),
    }
}

// =============================================================
// Kind wording
// =============================================================

#[test]
fn kinds_use_their_own_titles_and_facets() {
    assert_eq!(GroupKind::Ortholog.title(), "Orthologs");
    assert_eq!(GroupKind::Ortholog.group_label(), "Orthologous group");
    assert_eq!(GroupKind::Ortholog.facet(), "orthologous_group");

    assert_eq!(GroupKind::Coexpression.title(), "Co-expression");
    assert_eq!(GroupKind::Coexpression.group_label(), "Co-expression group");
    assert_eq!(GroupKind::Coexpression.facet(), "coexpression_group");
}

#[test]
fn failure_messages_distinguish_empty_from_transport() {
    assert_eq!(
        GroupKind::Ortholog.failure_message(&FetchError::EmptyResult),
        "This feature is not part of an orthologous group."
    );
    assert_eq!(
        GroupKind::Ortholog.failure_message(&FetchError::Status(500)),
        "Unable to load orthologs."
    );
    assert_eq!(
        GroupKind::Coexpression.failure_message(&FetchError::EmptyResult),
        "This feature is not part of a co-expression group."
    );
    assert_eq!(
        GroupKind::Coexpression.failure_message(&FetchError::Network("offline".to_owned())),
        "Unable to load the co-expression group."
    );
}

// =============================================================
// Member display
// =============================================================

#[test]
fn display_text_passes_real_names_through() {
    assert_eq!(display_text(&member(Some("NAC001"))).as_deref(), Some("NAC001"));
}

#[test]
fn display_text_suppresses_absent_and_blank_names() {
    assert_eq!(display_text(&member(None)), None);
    assert_eq!(display_text(&member(Some(""))), None);
}
