use super::*;

// =============================================================
// parse_feature_id
// =============================================================

#[test]
fn parse_accepts_positive_integers() {
    assert_eq!(parse_feature_id("42"), Some(42));
    assert_eq!(parse_feature_id("  1234  "), Some(1234));
}

#[test]
fn parse_rejects_non_positive_and_non_numeric() {
    assert_eq!(parse_feature_id("0"), None);
    assert_eq!(parse_feature_id("-5"), None);
    assert_eq!(parse_feature_id("AT1G01010"), None);
    assert_eq!(parse_feature_id(""), None);
    assert_eq!(parse_feature_id("12.5"), None);
}

// =============================================================
// ensure_trailing_slash
// =============================================================

#[test]
fn trailing_slash_is_appended_once() {
    let rooted = "https://genome.example.org/";
    assert_eq!(ensure_trailing_slash("https://genome.example.org"), rooted);
    assert_eq!(ensure_trailing_slash(rooted), rooted);
}

#[test]
fn empty_base_falls_back_to_root() {
    assert_eq!(ensure_trailing_slash(""), "/");
}

// =============================================================
// Non-browser fallbacks
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn base_url_defaults_to_root_outside_the_browser() {
    assert_eq!(base_url(), "/");
}

#[cfg(not(feature = "csr"))]
#[test]
fn hidden_feature_id_is_absent_outside_the_browser() {
    assert_eq!(hidden_feature_id(), None);
}
