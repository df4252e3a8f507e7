//! Static material lookup tables and the matching rules run over them.
//!
//! Table order is significant: it decides which hits survive the
//! `max_results` cap in [`search_matches`].

use crate::models::MaterialRecord;

/// (formula or term, display name, COD id)
type Entry = (&'static str, &'static str, &'static str);

const COMPOUNDS: &[Entry] = &[
    ("LiCoO2", "Lithium Cobalt Oxide", "1550396"),
    ("LiFePO4", "Lithium Iron Phosphate", "1101111"),
    ("NaNi0.33Mn0.67O2", "P2-type Sodium Nickel Manganese Oxide", "4002260"),
    ("LiNiO2", "Lithium Nickel Oxide", "1550396"),
    ("LiMn2O4", "Lithium Manganese Oxide", "4002260"),
    ("LiCoO", "Lithium Cobalt Oxide", "1550396"),
    ("LiFeO4", "Lithium Iron Phosphate", "1101111"),
];

const KEYWORDS: &[Entry] = &[
    ("LiCoO2", "Lithium Cobalt Oxide", "1550396"),
    ("LiFePO4", "Lithium Iron Phosphate", "1101111"),
    ("NaNi0.33Mn0.67O2", "P2-type Sodium Nickel Manganese Oxide", "4002260"),
    ("lithium", "Lithium compounds", "1550396"),
    ("cobalt", "Cobalt compounds", "1550396"),
    ("iron", "Iron compounds", "1101111"),
    ("phosphate", "Phosphate compounds", "1101111"),
    ("sodium", "Sodium compounds", "4002260"),
    ("nickel", "Nickel compounds", "4002260"),
    ("manganese", "Manganese compounds", "4002260"),
];

/// Read-only, ordered table of known materials.
#[derive(Debug, Clone, Copy)]
pub struct MaterialLookupTable {
    entries: &'static [Entry],
}

impl MaterialLookupTable {
    /// Battery compounds keyed by formula; backs `search_cif`.
    #[must_use]
    pub const fn compounds() -> Self {
        Self { entries: COMPOUNDS }
    }

    /// Formulas plus element and anion keywords; backs `check_cif`.
    #[must_use]
    pub const fn keywords() -> Self {
        Self { entries: KEYWORDS }
    }

    /// All records in definition order.
    pub fn lookup_all(&self) -> impl Iterator<Item = MaterialRecord> + '_ {
        self.entries
            .iter()
            .map(|&(formula, name, cod_id)| MaterialRecord::new(formula, name, cod_id))
    }
}

/// Four-way containment: formula or name inside the query, or the query inside either.
fn matches_search(record: &MaterialRecord, query_lower: &str) -> bool {
    let formula = record.formula.to_lowercase();
    let name = record.display_name.to_lowercase();

    query_lower.contains(&formula)
        || query_lower.contains(&name)
        || formula.contains(query_lower)
        || name.contains(query_lower)
}

/// Records matching `query`, in table order, stopping once `max_results` are collected.
#[must_use]
pub fn search_matches(
    table: &MaterialLookupTable,
    query: &str,
    max_results: usize,
) -> Vec<MaterialRecord> {
    let query_lower = query.to_lowercase();
    let mut results = Vec::new();

    for record in table.lookup_all() {
        if results.len() >= max_results {
            break;
        }
        if matches_search(&record, &query_lower) {
            results.push(record);
        }
    }

    results
}

/// Records whose key occurs in `text`. One-directional and uncapped.
#[must_use]
pub fn text_matches(table: &MaterialLookupTable, text: &str) -> Vec<MaterialRecord> {
    let text_lower = text.to_lowercase();
    table
        .lookup_all()
        .filter(|record| text_lower.contains(&record.formula.to_lowercase()))
        .collect()
}
