// Library Catalog - Reporting Library
// Derived views over accounts, books and authors: possessions, borrow
// counts, totals and top-five rankings. Used by the CLI and by tests.

pub mod entities;   // Record shapes: Account, Author, Book, Borrow
pub mod books;      // Book lookups + borrowed/available partitioning
pub mod accounts;   // Account views
pub mod ranking;    // Shared rank-and-truncate
pub mod statistics; // Catalog-wide totals and rankings
pub mod catalog;    // JSON loading of the three collections
pub mod report;     // Report snapshots + CSV export

// Re-export commonly used types
pub use entities::{
    Account, AccountId,
    Author, AuthorId,
    Book, BookId, Borrow,
    PersonName,
};
pub use books::{
    find_author_by_id, find_book_by_id,
    partition_books_by_borrowed_status, get_borrowers_for_book,
    Borrower,
};
pub use accounts::{
    find_account_by_id, sort_accounts_by_last_name,
    number_of_borrows, get_books_possessed_by_account,
    PossessedBook,
};
pub use ranking::{rank_top_five, rank_entries, RankedEntry, TOP_RANKING_SIZE};
pub use statistics::{
    total_books_count, total_accounts_count, books_borrowed_count,
    get_most_common_genres, get_most_popular_books, get_most_popular_authors,
};
pub use catalog::Catalog;
pub use report::{export_rankings_csv, AccountReport, CatalogReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
