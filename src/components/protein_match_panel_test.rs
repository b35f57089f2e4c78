use super::*;

#[test]
fn domain_text_joins_accession_and_description() {
    let hit = ProteinMatch {
        db: "PFAM".to_owned(),
        subject_id: "PF00847".to_owned(),
        subject_desc: Some("AP2 domain".to_owned()),
    };
    assert_eq!(domain_text(&hit), "PF00847 AP2 domain");
}

#[test]
fn domain_text_omits_absent_description() {
    let missing = ProteinMatch {
        db: "GENE3D".to_owned(),
        subject_id: "G3DSA:3.30.730.10".to_owned(),
        subject_desc: None,
    };
    assert_eq!(domain_text(&missing), "G3DSA:3.30.730.10");

    let blank = ProteinMatch {
        db: "PANTHER".to_owned(),
        subject_id: "PTHR31945".to_owned(),
        subject_desc: Some(String::new()),
    };
    assert_eq!(domain_text(&blank), "PTHR31945");
}

#[test]
fn failure_message_distinguishes_empty_from_transport() {
    assert_eq!(
        failure_message(&FetchError::EmptyResult),
        "No protein matches recorded for this feature."
    );
    assert_eq!(failure_message(&FetchError::Status(404)), "Unable to load protein matches.");
}
