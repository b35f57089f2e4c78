use super::*;

// =============================================================
// Helpers
// =============================================================

fn blast_hit() -> SimilarityHit {
    SimilarityHit {
        program: "blastp".to_owned(),
        programversion: "2.2.31+".to_owned(),
        db_name: Some("BLAST_SOURCE".to_owned()),
        uniquename: Some("XP_015622601.1".to_owned()),
        name: Some("OsJ_12345".to_owned()),
        sotype: Some("polypeptide".to_owned()),
        query_start: Some(1),
        query_end: Some(420),
        score: Some(250.0),
        evalue: Some(1e-30),
    }
}

fn sparse_hit() -> SimilarityHit {
    SimilarityHit {
        program: "tblastn".to_owned(),
        programversion: "2.2.31+".to_owned(),
        db_name: Some("SWISSPROT".to_owned()),
        uniquename: None,
        name: None,
        sotype: None,
        query_start: None,
        query_end: None,
        score: None,
        evalue: None,
    }
}

// =============================================================
// Linking
// =============================================================

#[test]
fn blast_polypeptide_hit_links_to_ncbi() {
    assert_eq!(
        hit_link(&blast_hit()).as_deref(),
        Some("https://www.ncbi.nlm.nih.gov/protein/OsJ_12345")
    );
}

#[test]
fn non_blast_or_non_polypeptide_hits_do_not_link() {
    let mut other_db = blast_hit();
    other_db.db_name = Some("SWISSPROT".to_owned());
    assert_eq!(hit_link(&other_db), None);

    let mut transcript = blast_hit();
    transcript.sotype = Some("mRNA".to_owned());
    assert_eq!(hit_link(&transcript), None);
}

#[test]
fn nameless_hit_does_not_link() {
    let mut nameless = blast_hit();
    nameless.name = None;
    assert_eq!(hit_link(&nameless), None);
}

// =============================================================
// Cell text
// =============================================================

#[test]
fn program_label_joins_name_and_version() {
    assert_eq!(program_label(&blast_hit()), "blastp 2.2.31+");
}

#[test]
fn hit_text_skips_absent_parts() {
    assert_eq!(hit_text(&blast_hit()), "BLAST_SOURCE XP_015622601.1 OsJ_12345");
    assert_eq!(hit_text(&sparse_hit()), "SWISSPROT");

    let mut bare = sparse_hit();
    bare.db_name = None;
    assert_eq!(hit_text(&bare), "");
}

#[test]
fn hit_prefix_excludes_the_subject_name() {
    assert_eq!(hit_prefix(&blast_hit()), "BLAST_SOURCE XP_015622601.1");
}

#[test]
fn absent_coordinates_and_scores_render_empty() {
    assert_eq!(coordinate_text(None), "");
    assert_eq!(coordinate_text(Some(420)), "420");
    assert_eq!(score_text(None), "");
    assert_eq!(score_text(Some(250.0)), "250");
}

#[test]
fn small_evalues_use_scientific_notation() {
    assert_eq!(evalue_text(Some(1e-30)), "1e-30");
    assert_eq!(evalue_text(Some(2.5e-7)), "2.5e-7");
    assert_eq!(evalue_text(Some(0.001)), "0.001");
    assert_eq!(evalue_text(Some(0.0)), "0");
    assert_eq!(evalue_text(None), "");
}

#[test]
fn failure_message_distinguishes_empty_from_transport() {
    assert_eq!(
        failure_message(&FetchError::EmptyResult),
        "No similarity hits recorded for this feature."
    );
    assert_eq!(failure_message(&FetchError::Status(502)), "Unable to load similarity hits.");
}
