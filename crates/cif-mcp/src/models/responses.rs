//! Tool response envelopes.
//!
//! Field declaration order is the serialized key order.

use serde::{Deserialize, Serialize};

use super::MaterialRecord;

/// Message returned by `check_cif` when nothing matched.
pub const NO_CIF_FILES_MESSAGE: &str = "No CIF files found for this paper";

/// One `search_cif` hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub paper_title: String,
    pub arxiv_link: String,
    pub cif_link: String,
}

impl From<&MaterialRecord> for SearchResult {
    fn from(record: &MaterialRecord) -> Self {
        Self {
            paper_title: format!(
                "Crystal Structure of {} ({})",
                record.display_name, record.formula
            ),
            arxiv_link: record.arxiv_search_url(),
            cif_link: record.cif_url(),
        }
    }
}

/// `search_cif` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total_results: usize,
    pub materials: Vec<SearchResult>,
}

impl SearchResponse {
    /// Build the envelope; `total_results` always equals `materials.len()`.
    #[must_use]
    pub fn new(materials: Vec<SearchResult>) -> Self {
        Self { total_results: materials.len(), materials }
    }
}

/// One `check_cif` hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub material_name: String,
    pub cif_link: String,
    pub has_cif: bool,
}

impl From<&MaterialRecord> for CheckResult {
    fn from(record: &MaterialRecord) -> Self {
        Self {
            material_name: record.display_name.clone(),
            cif_link: record.cif_url(),
            has_cif: true,
        }
    }
}

/// `check_cif` payload.
///
/// Exactly one of `cif_files` / `message` is present, selected by `has_cif_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    pub paper_title: String,
    pub has_cif_files: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cif_files: Option<Vec<CheckResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResponse {
    /// Build the envelope, choosing the found or not-found shape.
    #[must_use]
    pub fn new(paper_title: String, cif_files: Vec<CheckResult>) -> Self {
        if cif_files.is_empty() {
            Self {
                paper_title,
                has_cif_files: false,
                cif_files: None,
                message: Some(NO_CIF_FILES_MESSAGE.to_string()),
            }
        } else {
            Self { paper_title, has_cif_files: true, cif_files: Some(cif_files), message: None }
        }
    }
}
