// ✍️ Author Entity
//
// Books reference authors through `Book::author_id`. The reference is weak:
// an author missing from the collection is a lookup miss, not an error.

use crate::entities::person::PersonName;
use serde::{Deserialize, Serialize};

/// Author identifier (numeric in the record sources)
pub type AuthorId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: PersonName,
}

impl Author {
    pub fn new(id: AuthorId, first: &str, last: &str) -> Self {
        Author {
            id,
            name: PersonName::new(first, last),
        }
    }

    /// Name as shown in author rankings
    pub fn display_name(&self) -> String {
        self.name.full_name()
    }
}
