// 💳 Account Entity - a library patron
//
// "Account id is IDENTITY, the name is a VALUE"
//
// Borrow records point back at accounts by id only, so the id is the
// one thing every query here relies on.

use crate::entities::person::PersonName;
use serde::{Deserialize, Serialize};

/// Account identifier as it appears in the record sources
pub type AccountId = String;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity
///
/// Identity: `id` (referenced by `Borrow::id`)
/// Values: name
///
/// Source records carry more fields (picture, email, registration date);
/// they are not needed for reporting and are skipped on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity
    pub id: AccountId,

    /// Patron name
    pub name: PersonName,
}

impl Account {
    pub fn new(id: &str, first: &str, last: &str) -> Self {
        Account {
            id: id.to_string(),
            name: PersonName::new(first, last),
        }
    }

    pub fn last_name(&self) -> &str {
        &self.name.last
    }
}

// ============================================================================
// TESTS
// ============================================================================
