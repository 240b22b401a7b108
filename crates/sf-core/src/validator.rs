//! The note requirement: every test item is either checked off or has a
//! non-blank note explaining why not.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::state::StateSnapshot;

/// Outcome of a full validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Descriptions of violating items, in catalog order.
    pub violations: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.violations.iter().any(|violation| violation == item)
    }
}

/// Check every catalog item and collect all violations in one pass.
///
/// An item without state in the snapshot counts as unchecked with an empty
/// note.
#[must_use]
pub fn validate(catalog: &Catalog, snapshot: &StateSnapshot<'_>) -> ValidationReport {
    let violations = catalog
        .items()
        .filter(|item| {
            !snapshot
                .get(item.description())
                .is_some_and(|state| state.is_accounted_for())
        })
        .map(|item| item.description().to_string())
        .collect();

    ValidationReport { violations }
}
