use super::*;

fn tair_publication() -> Publication {
    Publication {
        authors: Some("Swarbreck D, Wilks C, Lamesch P".to_owned()),
        title: Some("The Arabidopsis Information Resource (TAIR)".to_owned()),
        series_name: Some("Nucleic Acids Res".to_owned()),
        pyear: Some("2008".to_owned()),
        volume: Some("36".to_owned()),
        pages: Some("D1009-14".to_owned()),
        doi: Some("10.1093/nar/gkm965".to_owned()),
    }
}

// =============================================================
// citation_tail
// =============================================================

#[test]
fn tail_joins_year_volume_and_pages() {
    assert_eq!(citation_tail(&tair_publication()), "2008; 36 D1009-14");
}

#[test]
fn tail_semicolon_disappears_with_the_year() {
    let mut publication = tair_publication();
    publication.pyear = None;
    assert_eq!(citation_tail(&publication), "36 D1009-14");
}

#[test]
fn tail_with_only_a_year_has_no_punctuation() {
    let mut publication = tair_publication();
    publication.volume = None;
    publication.pages = None;
    assert_eq!(citation_tail(&publication), "2008");
}

#[test]
fn tail_skips_absent_volume() {
    let mut publication = tair_publication();
    publication.volume = Some(String::new());
    assert_eq!(citation_tail(&publication), "2008; D1009-14");
}

#[test]
fn tail_of_an_empty_record_is_empty() {
    assert_eq!(citation_tail(&Publication::default()), "");
}

// =============================================================
// Field presence
// =============================================================

#[test]
fn present_drops_empty_and_missing_values() {
    assert_eq!(present(Some("text".to_owned())).as_deref(), Some("text"));
    assert_eq!(present(Some(String::new())), None);
    assert_eq!(present(None), None);
}

#[test]
fn failure_message_distinguishes_empty_from_transport() {
    assert_eq!(
        failure_message(&FetchError::EmptyResult),
        "No publications recorded for this feature."
    );
    assert_eq!(failure_message(&FetchError::Status(500)), "Unable to load publications.");
}
