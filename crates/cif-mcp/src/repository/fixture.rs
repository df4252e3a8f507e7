//! In-memory repository over the built-in lookup tables.

use super::table::{MaterialLookupTable, search_matches, text_matches};
use super::MaterialRepository;
use crate::error::ClientResult;
use crate::models::MaterialRecord;

/// Deterministic repository; never performs I/O and never fails.
#[derive(Debug, Clone, Copy)]
pub struct FixtureRepository {
    search_table: MaterialLookupTable,
    check_table: MaterialLookupTable,
}

impl FixtureRepository {
    /// Repository over the default compound and keyword tables.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_tables(MaterialLookupTable::compounds(), MaterialLookupTable::keywords())
    }

    /// Repository over explicit tables.
    #[must_use]
    pub const fn with_tables(
        search_table: MaterialLookupTable,
        check_table: MaterialLookupTable,
    ) -> Self {
        Self { search_table, check_table }
    }
}

impl Default for FixtureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MaterialRepository for FixtureRepository {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn search_materials(
        &self,
        query: &str,
        max_results: usize,
    ) -> ClientResult<Vec<MaterialRecord>> {
        Ok(search_matches(&self.search_table, query, max_results))
    }

    async fn materials_in_text(&self, text: &str) -> ClientResult<Vec<MaterialRecord>> {
        Ok(text_matches(&self.check_table, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_uses_separate_tables() {
        let repo = FixtureRepository::new();

        // Element keywords only exist in the check table
        assert_eq!(repo.search_materials("sodium", 5).await.unwrap().len(), 1);
        let mentioned = repo.materials_in_text("sodium-ion battery materials").await.unwrap();
        assert_eq!(mentioned.len(), 1);
        assert_eq!(mentioned[0].display_name, "Sodium compounds");
    }
}
