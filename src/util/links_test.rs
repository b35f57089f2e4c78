use super::*;

const BASE: &str = "https://genome.example.org/";

// =============================================================
// encode_component
// =============================================================

#[test]
fn encode_passes_unreserved_characters_through() {
    assert_eq!(encode_component("AT1G01010.1"), "AT1G01010.1");
    assert_eq!(encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_escapes_reserved_and_whitespace() {
    assert_eq!(encode_component("dna binding"), "dna%20binding");
    assert_eq!(encode_component("a+b&c=d"), "a%2Bb%26c%3Dd");
    assert_eq!(encode_component("group:17"), "group%3A17");
}

#[test]
fn encode_escapes_multibyte_utf8() {
    assert_eq!(encode_component("α-amylase"), "%CE%B1-amylase");
}

#[test]
fn encode_of_empty_string_is_empty() {
    assert_eq!(encode_component(""), "");
}

// =============================================================
// URL builders
// =============================================================

#[test]
fn find_url_encodes_the_query() {
    assert_eq!(find_url(BASE, "kinase"), "https://genome.example.org/find/?q=kinase");
    assert_eq!(
        find_url(BASE, "dna binding"),
        "https://genome.example.org/find/?q=dna%20binding"
    );
}

#[test]
fn facet_search_url_keeps_facet_literal_and_encodes_value() {
    assert_eq!(
        facet_search_url(BASE, "orthologous_group", "OG0001234"),
        "https://genome.example.org/find/?selected_facets=orthologous_group:OG0001234"
    );
    assert_eq!(
        facet_search_url(BASE, "coexpression_group", "group 17"),
        "https://genome.example.org/find/?selected_facets=coexpression_group:group%2017"
    );
}

#[test]
fn feature_url_carries_the_numeric_id() {
    assert_eq!(feature_url(BASE, 4242), "https://genome.example.org/feature/?feature_id=4242");
}

#[test]
fn ncbi_protein_url_points_at_the_accession() {
    assert_eq!(
        ncbi_protein_url("XP_015622601.1"),
        "https://www.ncbi.nlm.nih.gov/protein/XP_015622601.1"
    );
}

#[test]
fn doi_url_keeps_path_separators() {
    assert_eq!(doi_url("10.1093/nar/gkm965"), "http://dx.doi.org/10.1093/nar/gkm965");
}
