//! Wire DTOs for the feature annotation REST endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the JSON emitted by the annotation service so panel
//! code can stay schema-driven. Fields the service may omit or null out are
//! `Option` with a serde default; rendering decides how absence is shown.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// One ontology term assigned to a feature.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OntologyTerm {
    /// Controlled vocabulary the term belongs to (e.g. `"molecular_function"`).
    pub cv: String,
    /// Source database of the term (e.g. `"GO"`).
    pub db: String,
    /// Cross-reference accession within that database.
    pub dbxref: String,
    /// Human-readable term name.
    pub cvterm: String,
}

/// One protein domain or family match from an analysis run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProteinMatch {
    /// Database the match came from (e.g. `"PFAM"`).
    pub db: String,
    /// Accession of the matched entry.
    pub subject_id: String,
    /// Description of the matched entry, if the source provides one.
    #[serde(default)]
    pub subject_desc: Option<String>,
}

/// One similarity hit for a feature, as produced by an alignment program.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SimilarityHit {
    /// Alignment program that produced the hit (e.g. `"blastp"`).
    pub program: String,
    /// Version string of that program.
    pub programversion: String,
    /// Database the hit subject was drawn from.
    #[serde(default)]
    pub db_name: Option<String>,
    /// Subject unique name; sparse records omit it.
    #[serde(default)]
    pub uniquename: Option<String>,
    /// Subject display name; sparse records omit it.
    #[serde(default)]
    pub name: Option<String>,
    /// Sequence ontology type of the subject (e.g. `"polypeptide"`).
    #[serde(default)]
    pub sotype: Option<String>,
    /// Match start on the query sequence, if recorded.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub query_start: Option<i64>,
    /// Match end on the query sequence, if recorded.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub query_end: Option<i64>,
    /// Raw alignment score, if recorded.
    #[serde(default)]
    pub score: Option<f64>,
    /// Expectation value, if recorded.
    #[serde(default)]
    pub evalue: Option<f64>,
}

/// One feature belonging to an ortholog or coexpression group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GroupMember {
    /// Numeric feature identifier used for feature page links.
    #[serde(deserialize_with = "deserialize_i64")]
    pub feature_id: i64,
    /// Unique name of the member feature.
    pub uniquename: String,
    /// Display name, when the feature has one beyond its unique name.
    #[serde(default)]
    pub display: Option<String>,
    /// Organism the member belongs to (genus and species).
    pub organism: String,
}

/// Ortholog group envelope as served by the annotation service.
///
/// A feature without a group comes back with a null group name and no
/// members; [`OrthologGroup::into_group`] collapses that case to `None`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OrthologGroup {
    /// Name of the ortholog group, if the feature belongs to one.
    #[serde(default)]
    pub ortholog_group: Option<String>,
    /// Features in the group, including the queried feature itself.
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

impl OrthologGroup {
    /// Normalized group data, or `None` when the feature has no group.
    #[must_use]
    pub fn into_group(self) -> Option<FeatureGroup> {
        FeatureGroup::new(self.ortholog_group, self.members)
    }
}

/// Coexpression group envelope as served by the annotation service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CoexpressionGroup {
    /// Name of the coexpression group, if the feature belongs to one.
    #[serde(default)]
    pub coexpression_group: Option<String>,
    /// Features in the group, including the queried feature itself.
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

impl CoexpressionGroup {
    /// Normalized group data, or `None` when the feature has no group.
    #[must_use]
    pub fn into_group(self) -> Option<FeatureGroup> {
        FeatureGroup::new(self.coexpression_group, self.members)
    }
}

/// A named feature group with at least one member.
///
/// Both group endpoints normalize into this shape so one card implementation
/// renders either kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureGroup {
    /// Group name, usable as a facet value in group searches.
    pub name: String,
    /// Features in the group.
    pub members: Vec<GroupMember>,
}

impl FeatureGroup {
    fn new(name: Option<String>, members: Vec<GroupMember>) -> Option<Self> {
        let name = name?;
        if name.is_empty() || members.is_empty() {
            return None;
        }
        Some(Self { name, members })
    }
}

/// One publication associated with a feature.
///
/// Every field is optional; curation quality varies widely between sources
/// and the card renders whatever subset is present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Publication {
    /// Author list as a single preformatted string.
    #[serde(default)]
    pub authors: Option<String>,
    /// Publication title.
    #[serde(default)]
    pub title: Option<String>,
    /// Journal or series name.
    #[serde(default)]
    pub series_name: Option<String>,
    /// Publication year as stored, not necessarily numeric.
    #[serde(default)]
    pub pyear: Option<String>,
    /// Volume designation.
    #[serde(default)]
    pub volume: Option<String>,
    /// Page range.
    #[serde(default)]
    pub pages: Option<String>,
    /// DOI without a URL prefix, when registered.
    #[serde(default)]
    pub doi: Option<String>,
}

/// Residue payload for a feature.
///
/// The service serves a single record for most feature types but a list for
/// some; both shapes decode here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SequencePayload {
    /// The usual single-record shape.
    One(SequenceRecord),
    /// List shape; only the final record is meaningful.
    Many(Vec<SequenceRecord>),
}

/// A single residues record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SequenceRecord {
    /// Raw residue string, absent when the feature stores no residues.
    #[serde(default)]
    pub sequence: Option<String>,
}

impl SequencePayload {
    /// The renderable residue string, or `None` when nothing usable arrived.
    ///
    /// For the list shape the last record wins, matching the way repeated
    /// records overwrite one another.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        let sequence = match self {
            Self::One(record) => record.sequence,
            Self::Many(records) => records.into_iter().next_back().and_then(|r| r.sequence),
        };
        sequence.filter(|s| !s.is_empty())
    }
}

/// One search suggestion.
///
/// The suggestion endpoint historically served bare strings and later grew a
/// labeled record shape; both decode here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Suggestion {
    /// Labeled record with separate display and submit strings.
    Labeled {
        /// Text shown in the dropdown.
        label: String,
        /// Query submitted when this entry is picked.
        value: String,
    },
    /// Bare string used for both display and submit.
    Plain(String),
}

impl Suggestion {
    /// Text to show in the dropdown.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Labeled { label, .. } => label,
            Self::Plain(text) => text,
        }
    }

    /// Query string submitted when this suggestion is picked.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Labeled { value, .. } => value,
            Self::Plain(text) => text,
        }
    }
}

fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    number_to_i64(&number).ok_or_else(|| D::Error::custom("expected integer-compatible number"))
}

fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Number>::deserialize(deserializer)? {
        None => Ok(None),
        Some(number) => number_to_i64(&number)
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
    }
}

/// Accepts integers plus float encodings with no fractional part, which some
/// JSON emitters produce for integral columns.
fn number_to_i64(number: &serde_json::Number) -> Option<i64> {
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    match number.as_f64() {
        Some(float)
            if float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64 =>
        {
            Some(float as i64)
        }
        _ => None,
    }
}
