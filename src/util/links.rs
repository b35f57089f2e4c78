//! URL builders for search and cross-reference navigation.
//!
//! All builders take the application base URL as produced by
//! [`crate::util::page::base_url`], which always ends in a slash.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a string for use as a query parameter value.
///
/// Unreserved characters pass through; everything else is encoded as the
/// UTF-8 byte sequence.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[usize::from(byte >> 4)] as char);
                out.push(HEX[usize::from(byte & 0x0f)] as char);
            }
        }
    }
    out
}

/// Full-text search page for a query string.
#[must_use]
pub fn find_url(base: &str, query: &str) -> String {
    format!("{base}find/?q={}", encode_component(query))
}

/// Faceted search page pre-filtered to one facet value.
#[must_use]
pub fn facet_search_url(base: &str, facet: &str, value: &str) -> String {
    format!("{base}find/?selected_facets={facet}:{}", encode_component(value))
}

/// Feature page for a numeric feature identifier.
#[must_use]
pub fn feature_url(base: &str, feature_id: i64) -> String {
    format!("{base}feature/?feature_id={feature_id}")
}

/// NCBI protein record for an accession.
#[must_use]
pub fn ncbi_protein_url(accession: &str) -> String {
    format!("https://www.ncbi.nlm.nih.gov/protein/{}", encode_component(accession))
}

/// DOI resolver link. The DOI is kept verbatim because its path separators
/// must stay literal.
#[must_use]
pub fn doi_url(doi: &str) -> String {
    format!("http://dx.doi.org/{doi}")
}
