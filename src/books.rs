// 📖 Book Queries - lookups and borrowed/available partitioning
//
// The account views and catalog statistics consume two of these:
// author lookup and the borrowed/available split.

use crate::accounts::find_account_by_id;
use crate::entities::{Account, Author, AuthorId, Book};
use serde::{Deserialize, Serialize};

/// Borrower listing stops after this many entries
pub const MAX_BORROWERS_LISTED: usize = 10;

// ============================================================================
// LOOKUPS
// ============================================================================

/// First author whose id matches, or None
pub fn find_author_by_id(authors: &[Author], id: AuthorId) -> Option<&Author> {
    authors.iter().find(|author| author.id == id)
}

/// First book whose id matches, or None
pub fn find_book_by_id<'a>(books: &'a [Book], id: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.id == id)
}

// ============================================================================
// PARTITIONING
// ============================================================================

/// Split books into (borrowed, available), each keeping input order.
///
/// A book is borrowed iff it has at least one borrow that is not returned.
pub fn partition_books_by_borrowed_status(books: &[Book]) -> (Vec<&Book>, Vec<&Book>) {
    books.iter().partition(|book| book.is_borrowed())
}

// ============================================================================
// BORROWERS
// ============================================================================

/// An account as it appears in a book's borrow history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrower {
    #[serde(flatten)]
    pub account: Account,
    pub returned: bool,
}

/// Accounts behind a book's borrows, in borrow order, capped at
/// `MAX_BORROWERS_LISTED`.
///
/// Borrows whose account is not in `accounts` are skipped.
pub fn get_borrowers_for_book(book: &Book, accounts: &[Account]) -> Vec<Borrower> {
    book.borrows
        .iter()
        .filter_map(|borrow| {
            find_account_by_id(accounts, &borrow.id).map(|account| Borrower {
                account: account.clone(),
                returned: borrow.returned,
            })
        })
        .take(MAX_BORROWERS_LISTED)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
