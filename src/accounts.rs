// 👤 Account Views - per-account queries
//
// Lookup, ordering, borrow counting and current-possession listing.
// Every function is pure: inputs are borrowed, results are fresh values.

use crate::books::find_author_by_id;
use crate::entities::{Account, Author, AuthorId, Book, BookId, Borrow};
use serde::{Deserialize, Serialize};

// ============================================================================
// POSSESSED BOOK (derived view)
// ============================================================================

/// A book currently held by an account, with its author resolved.
///
/// Field order matches the book record with `author` inserted between
/// `authorId` and `borrows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossessedBook {
    pub id: BookId,
    pub title: String,
    pub genre: String,
    pub author_id: AuthorId,

    /// None when `author_id` does not resolve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    pub borrows: Vec<Borrow>,
}

impl PossessedBook {
    fn from_book(book: &Book, author: Option<&Author>) -> Self {
        PossessedBook {
            id: book.id.clone(),
            title: book.title.clone(),
            genre: book.genre.clone(),
            author_id: book.author_id,
            author: author.cloned(),
            borrows: book.borrows.clone(),
        }
    }
}

// ============================================================================
// QUERIES
// ============================================================================

/// First account whose id matches, or None
pub fn find_account_by_id<'a>(accounts: &'a [Account], id: &str) -> Option<&'a Account> {
    accounts.iter().find(|account| account.id == id)
}

/// Accounts ordered by last name, ascending.
///
/// Returns a new vector; the caller's slice is left as it was.
/// Accounts sharing a last name keep their input order.
pub fn sort_accounts_by_last_name(accounts: &[Account]) -> Vec<Account> {
    let mut sorted = accounts.to_vec();
    sorted.sort_by(|a, b| a.last_name().cmp(b.last_name()));
    sorted
}

/// How many times the account has borrowed anything.
///
/// Counts every borrow carrying the account id, returned or not.
pub fn number_of_borrows(account: &Account, books: &[Book]) -> usize {
    books
        .iter()
        .map(|book| book.borrows_by(&account.id).count())
        .sum()
}

/// Books the account holds right now, in input order, each with its author.
pub fn get_books_possessed_by_account(
    account: &Account,
    books: &[Book],
    authors: &[Author],
) -> Vec<PossessedBook> {
    books
        .iter()
        .filter(|book| book.is_held_by(&account.id))
        .map(|book| PossessedBook::from_book(book, find_author_by_id(authors, book.author_id)))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_accounts() -> Vec<Account> {
        vec![
            Account::new("a1", "Esther", "Tucker"),
            Account::new("a2", "Ferrell", "Brennan"),
            Account::new("a3", "Cheryl", "Tucker"),
            Account::new("a4", "Adele", "Abbott"),
        ]
    }

    fn create_test_authors() -> Vec<Author> {
        vec![Author::new(1, "Frank", "Herbert"), Author::new(2, "Jane", "Austen")]
    }

    #[test]
    fn test_find_account_by_id() {
        let accounts = create_test_accounts();

        let found = find_account_by_id(&accounts, "a3").unwrap();
        assert_eq!(found.name.first, "Cheryl");
    }

    #[test]
    fn test_find_account_by_id_empty_returns_none() {
        assert!(find_account_by_id(&[], "1").is_none());
    }

    #[test]
    fn test_find_account_by_id_missing_returns_none() {
        assert!(find_account_by_id(&create_test_accounts(), "zz").is_none());
    }

    #[test]
    fn test_sort_accounts_by_last_name() {
        let accounts = create_test_accounts();
        let sorted = sort_accounts_by_last_name(&accounts);

        let last_names: Vec<&str> = sorted.iter().map(|a| a.last_name()).collect();
        assert_eq!(last_names, vec!["Abbott", "Brennan", "Tucker", "Tucker"]);
    }

    #[test]
    fn test_sort_accounts_keeps_order_of_equal_last_names() {
        let sorted = sort_accounts_by_last_name(&create_test_accounts());
        let tuckers: Vec<&str> = sorted
            .iter()
            .filter(|a| a.last_name() == "Tucker")
            .map(|a| a.id.as_str())
            .collect();

        assert_eq!(tuckers, vec!["a1", "a3"]);
    }

    #[test]
    fn test_sort_accounts_leaves_input_untouched() {
        let accounts = create_test_accounts();
        let before = accounts.clone();

        let _sorted = sort_accounts_by_last_name(&accounts);

        assert_eq!(accounts, before);
    }

    #[test]
    fn test_number_of_borrows_counts_returned_and_active() {
        let account = Account::new("5", "Esther", "Tucker");
        let books = vec![
            Book::new("1", "Dune", "Science Fiction", 1).with_borrow(Borrow::checked_out("5")),
            Book::new("2", "Emma", "Classics", 2).with_borrow(Borrow::returned("5")),
        ];

        assert_eq!(number_of_borrows(&account, &books), 2);
    }

    #[test]
    fn test_number_of_borrows_counts_repeat_borrows_of_same_book() {
        let account = Account::new("5", "Esther", "Tucker");
        let books = vec![Book::new("1", "Dune", "Science Fiction", 1)
            .with_borrow(Borrow::returned("5"))
            .with_borrow(Borrow::returned("6"))
            .with_borrow(Borrow::checked_out("5"))];

        assert_eq!(number_of_borrows(&account, &books), 2);
    }

    #[test]
    fn test_number_of_borrows_none() {
        let account = Account::new("5", "Esther", "Tucker");
        assert_eq!(number_of_borrows(&account, &[]), 0);
    }

    #[test]
    fn test_double_active_borrow_counts_twice_but_lists_book_once() {
        let account = Account::new("a1", "Esther", "Tucker");
        let books = vec![Book::new("b1", "Dune", "Science Fiction", 1)
            .with_borrow(Borrow::checked_out("a1"))
            .with_borrow(Borrow::checked_out("a1"))];

        let possessed = get_books_possessed_by_account(&account, &books, &create_test_authors());

        assert_eq!(number_of_borrows(&account, &books), 2);
        assert_eq!(possessed.len(), 1);
        assert_eq!(possessed[0].id, "b1");
    }

    #[test]
    fn test_get_books_possessed_by_account() {
        let account = Account::new("5", "Esther", "Tucker");
        let books = vec![
            Book::new("1", "Dune", "Science Fiction", 1).with_borrow(Borrow::checked_out("5")),
            Book::new("2", "Emma", "Classics", 2).with_borrow(Borrow::returned("5")),
        ];

        let possessed = get_books_possessed_by_account(&account, &books, &create_test_authors());

        assert_eq!(possessed.len(), 1);
        assert_eq!(possessed[0].id, "1");
        assert_eq!(possessed[0].author.as_ref().unwrap().id, 1);
        assert_eq!(possessed[0].borrows, books[0].borrows);
    }

    #[test]
    fn test_get_books_possessed_preserves_input_order() {
        let account = Account::new("a1", "Esther", "Tucker");
        let books = vec![
            Book::new("b3", "Ubik", "Science Fiction", 1).with_borrow(Borrow::checked_out("a1")),
            Book::new("b1", "Dune", "Science Fiction", 1).with_borrow(Borrow::checked_out("other")),
            Book::new("b2", "Emma", "Classics", 2).with_borrow(Borrow::checked_out("a1")),
        ];

        let ids: Vec<String> =
            get_books_possessed_by_account(&account, &books, &create_test_authors())
                .into_iter()
                .map(|b| b.id)
                .collect();

        assert_eq!(ids, vec!["b3", "b2"]);
    }

    #[test]
    fn test_get_books_possessed_missing_author_is_none() {
        let account = Account::new("a1", "Esther", "Tucker");
        let books = vec![
            Book::new("b1", "Orphan", "Mystery", 404).with_borrow(Borrow::checked_out("a1")),
        ];

        let possessed = get_books_possessed_by_account(&account, &books, &create_test_authors());

        assert_eq!(possessed.len(), 1);
        assert!(possessed[0].author.is_none());
    }

    #[test]
    fn test_possessed_book_field_order() {
        let account = Account::new("a1", "Esther", "Tucker");
        let books = vec![
            Book::new("b1", "Dune", "Science Fiction", 1).with_borrow(Borrow::checked_out("a1")),
        ];

        let possessed = get_books_possessed_by_account(&account, &books, &create_test_authors());
        let json = serde_json::to_string(&possessed[0]).unwrap();

        let author_id_at = json.find("\"authorId\"").unwrap();
        let author_at = json.find("\"author\":").unwrap();
        let borrows_at = json.find("\"borrows\"").unwrap();
        assert!(author_id_at < author_at && author_at < borrows_at);
    }

    #[test]
    fn test_account_queries_are_idempotent() {
        let accounts = create_test_accounts();
        let books = vec![
            Book::new("b1", "Dune", "Science Fiction", 1).with_borrow(Borrow::checked_out("a1")),
        ];
        let authors = create_test_authors();

        assert_eq!(sort_accounts_by_last_name(&accounts), sort_accounts_by_last_name(&accounts));
        assert_eq!(
            get_books_possessed_by_account(&accounts[0], &books, &authors),
            get_books_possessed_by_account(&accounts[0], &books, &authors)
        );
    }
}
