//! Material record model.

use serde::{Deserialize, Serialize};

use crate::config::api;

/// A material reference resolved to a COD crystal-structure entry.
///
/// Several records may share one `cod_id`: element names and formula variants
/// are aliases of the same structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Lookup key: chemical formula or search term (e.g. "LiCoO2", "cobalt").
    pub formula: String,

    /// Human-readable material name.
    pub display_name: String,

    /// Crystallography Open Database entry id.
    pub cod_id: String,
}

impl MaterialRecord {
    /// Create a record.
    #[must_use]
    pub fn new(
        formula: impl Into<String>,
        display_name: impl Into<String>,
        cod_id: impl Into<String>,
    ) -> Self {
        Self { formula: formula.into(), display_name: display_name.into(), cod_id: cod_id.into() }
    }

    /// Download URL of the CIF file.
    #[must_use]
    pub fn cif_url(&self) -> String {
        format!("{}/{}.cif", api::COD_FILE_URL, self.cod_id)
    }

    /// arXiv advanced search URL for papers with the formula in their title.
    ///
    /// Only spaces are escaped; this is a search link, not a verified reference.
    #[must_use]
    pub fn arxiv_search_url(&self) -> String {
        format!(
            "{}?advanced=1&terms-0-term={}&terms-0-operator=AND&terms-0-field=title",
            api::ARXIV_ADVANCED_SEARCH,
            self.formula.replace(' ', "+")
        )
    }
}
