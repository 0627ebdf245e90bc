use serde::{Deserialize, Serialize};

/// First/last name pair shared by accounts and authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn new(first: &str, last: &str) -> Self {
        PersonName {
            first: first.to_string(),
            last: last.to_string(),
        }
    }

    /// "first last", the display form used in rankings
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}
