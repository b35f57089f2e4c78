//! REST calls against the feature annotation API.
//!
//! Browser builds issue real HTTP via `gloo-net`; non-browser builds return
//! a network error because the endpoints only exist alongside the host page.
//!
//! ERROR HANDLING
//! ==============
//! Every fetch resolves to `Result<_, FetchError>`. Emptiness is normalized
//! here: an endpoint that answered successfully but carried nothing
//! renderable yields `FetchError::EmptyResult`, so panels consume exactly
//! one failure channel.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FetchError;
#[cfg(feature = "csr")]
use super::types::{CoexpressionGroup, OrthologGroup, SequencePayload};
use super::types::{
    FeatureGroup, OntologyTerm, ProteinMatch, Publication, SimilarityHit, Suggestion,
};
#[cfg(feature = "csr")]
use crate::util::page;

#[cfg(any(test, feature = "csr"))]
fn feature_endpoint(base: &str, resource: &str, feature_id: i64) -> String {
    format!("{base}api/feature/{resource}/{feature_id}")
}

#[cfg(any(test, feature = "csr"))]
fn autocomplete_endpoint(base: &str) -> String {
    format!("{base}api/autocomplete")
}

#[cfg(any(test, feature = "csr"))]
fn non_empty<T>(records: Vec<T>) -> Result<Vec<T>, FetchError> {
    if records.is_empty() {
        Err(FetchError::EmptyResult)
    } else {
        Ok(records)
    }
}

/// Issue a GET and decode the JSON body.
#[cfg(feature = "csr")]
async fn get_json<T>(request: gloo_net::http::RequestBuilder) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = request.send().await.map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| FetchError::MalformedPayload(e.to_string()))
}

/// Ontology terms assigned to a feature.
///
/// # Errors
///
/// Returns `FetchError::EmptyResult` when the feature has no terms, or a
/// transport/decoding error.
pub async fn fetch_ontology_terms(feature_id: i64) -> Result<Vec<OntologyTerm>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = feature_endpoint(&page::base_url(), "ontology", feature_id);
        let terms = get_json::<Vec<OntologyTerm>>(gloo_net::http::Request::get(&url)).await?;
        non_empty(terms)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = feature_id;
        Err(FetchError::unavailable())
    }
}

/// Protein domain and family matches for a feature.
///
/// # Errors
///
/// Returns `FetchError::EmptyResult` when no matches are recorded, or a
/// transport/decoding error.
pub async fn fetch_protein_matches(feature_id: i64) -> Result<Vec<ProteinMatch>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = feature_endpoint(&page::base_url(), "proteinmatches", feature_id);
        let matches = get_json::<Vec<ProteinMatch>>(gloo_net::http::Request::get(&url)).await?;
        non_empty(matches)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = feature_id;
        Err(FetchError::unavailable())
    }
}

/// Similarity hits for a feature.
///
/// # Errors
///
/// Returns `FetchError::EmptyResult` when no hits are recorded, or a
/// transport/decoding error.
pub async fn fetch_similarity_hits(feature_id: i64) -> Result<Vec<SimilarityHit>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = feature_endpoint(&page::base_url(), "similarity", feature_id);
        let hits = get_json::<Vec<SimilarityHit>>(gloo_net::http::Request::get(&url)).await?;
        non_empty(hits)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = feature_id;
        Err(FetchError::unavailable())
    }
}

/// Ortholog group for a feature, normalized.
///
/// # Errors
///
/// Returns `FetchError::EmptyResult` when the feature belongs to no group,
/// or a transport/decoding error.
pub async fn fetch_ortholog_group(feature_id: i64) -> Result<FeatureGroup, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = feature_endpoint(&page::base_url(), "ortholog", feature_id);
        let payload = get_json::<OrthologGroup>(gloo_net::http::Request::get(&url)).await?;
        payload.into_group().ok_or(FetchError::EmptyResult)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = feature_id;
        Err(FetchError::unavailable())
    }
}

/// Coexpression group for a feature, normalized.
///
/// # Errors
///
/// Returns `FetchError::EmptyResult` when the feature belongs to no group,
/// or a transport/decoding error.
pub async fn fetch_coexpression_group(feature_id: i64) -> Result<FeatureGroup, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = feature_endpoint(&page::base_url(), "coexpression", feature_id);
        let payload = get_json::<CoexpressionGroup>(gloo_net::http::Request::get(&url)).await?;
        payload.into_group().ok_or(FetchError::EmptyResult)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = feature_id;
        Err(FetchError::unavailable())
    }
}

/// Publications associated with a feature.
///
/// # Errors
///
/// Returns `FetchError::EmptyResult` when none are recorded, or a
/// transport/decoding error.
pub async fn fetch_publications(feature_id: i64) -> Result<Vec<Publication>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = feature_endpoint(&page::base_url(), "publication", feature_id);
        let publications = get_json::<Vec<Publication>>(gloo_net::http::Request::get(&url)).await?;
        non_empty(publications)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = feature_id;
        Err(FetchError::unavailable())
    }
}

/// Residue string for a feature.
///
/// # Errors
///
/// Returns `FetchError::EmptyResult` when the feature stores no residues,
/// or a transport/decoding error.
pub async fn fetch_sequence(feature_id: i64) -> Result<String, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = feature_endpoint(&page::base_url(), "sequence", feature_id);
        let payload = get_json::<SequencePayload>(gloo_net::http::Request::get(&url)).await?;
        payload.into_text().ok_or(FetchError::EmptyResult)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = feature_id;
        Err(FetchError::unavailable())
    }
}

/// Search suggestions for a partial query.
///
/// An empty list is a valid answer here, not an error; the dropdown simply
/// stays closed.
///
/// # Errors
///
/// Returns a transport/decoding error.
pub async fn fetch_suggestions(term: &str) -> Result<Vec<Suggestion>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = autocomplete_endpoint(&page::base_url());
        let request = gloo_net::http::Request::get(&url).query([("q", term)]);
        get_json::<Vec<Suggestion>>(request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = term;
        Err(FetchError::unavailable())
    }
}
