// 📚 Book Entity + Borrow events
//
// A book owns its borrow history (insertion-ordered). The current holder,
// if any, is the account behind a borrow with `returned == false`.
// Nothing guarantees there is only one such borrow; every query treats
// each borrow as an independent event.

use crate::entities::account::AccountId;
use crate::entities::author::AuthorId;
use serde::{Deserialize, Serialize};

/// Book identifier as it appears in the record sources
pub type BookId = String;

// ============================================================================
// BORROW
// ============================================================================

/// One checkout of a book by an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrow {
    /// Account that performed the checkout (weak reference)
    pub id: AccountId,

    /// false while the account still holds the book
    pub returned: bool,
}

impl Borrow {
    /// Borrow that is still out
    pub fn checked_out(account_id: &str) -> Self {
        Borrow {
            id: account_id.to_string(),
            returned: false,
        }
    }

    /// Borrow that has been brought back
    pub fn returned(account_id: &str) -> Self {
        Borrow {
            id: account_id.to_string(),
            returned: true,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.returned
    }
}

// ============================================================================
// BOOK
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub genre: String,

    /// Author reference (weak, lookup only)
    pub author_id: AuthorId,

    /// Full borrow history, oldest first
    #[serde(default)]
    pub borrows: Vec<Borrow>,
}

impl Book {
    pub fn new(id: &str, title: &str, genre: &str, author_id: AuthorId) -> Self {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            genre: genre.to_string(),
            author_id,
            borrows: Vec::new(),
        }
    }

    /// Append a borrow event (builder style, for assembling fixtures)
    pub fn with_borrow(mut self, borrow: Borrow) -> Self {
        self.borrows.push(borrow);
        self
    }

    /// Total checkouts, historical and current
    pub fn borrow_count(&self) -> usize {
        self.borrows.len()
    }

    /// True if at least one borrow is still out
    pub fn is_borrowed(&self) -> bool {
        self.borrows.iter().any(Borrow::is_active)
    }

    /// All borrows made by one account, returned or not
    pub fn borrows_by<'a>(&'a self, account_id: &'a str) -> impl Iterator<Item = &'a Borrow> + 'a {
        self.borrows.iter().filter(move |borrow| borrow.id == account_id)
    }

    /// True if the account has an active borrow on this book
    pub fn is_held_by(&self, account_id: &str) -> bool {
        self.borrows
            .iter()
            .any(|borrow| borrow.is_active() && borrow.id == account_id)
    }
}

// ============================================================================
// TESTS
// ============================================================================
