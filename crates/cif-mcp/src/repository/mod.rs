//! Material repositories.
//!
//! A [`MaterialRepository`] resolves free text to crystal-structure records.
//! Two implementations exist: [`FixtureRepository`] over the built-in tables
//! and [`crate::client::CodClient`] against the live database.

mod fixture;
mod table;

pub use fixture::FixtureRepository;
pub use table::{MaterialLookupTable, search_matches, text_matches};

use crate::error::ClientResult;
use crate::models::MaterialRecord;

/// Capability to resolve material references to COD records.
#[async_trait::async_trait]
pub trait MaterialRepository: Send + Sync {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Materials related to a free-text query, at most `max_results`, best first.
    async fn search_materials(
        &self,
        query: &str,
        max_results: usize,
    ) -> ClientResult<Vec<MaterialRecord>>;

    /// Materials mentioned in a piece of text (paper title and id). Uncapped.
    async fn materials_in_text(&self, text: &str) -> ClientResult<Vec<MaterialRecord>>;
}
