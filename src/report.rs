// 📋 Reports - derived views bundled for a presentation layer
//
// CatalogReport: the "home page" numbers (totals + three top-five lists)
// AccountReport: one patron's borrow count and current possessions
//
// Both are plain snapshots: built fresh from a Catalog, serializable,
// never written back.

use crate::accounts::{get_books_possessed_by_account, number_of_borrows, PossessedBook};
use crate::catalog::Catalog;
use crate::entities::Account;
use crate::ranking::RankedEntry;
use crate::statistics::{
    books_borrowed_count, get_most_common_genres, get_most_popular_authors, get_most_popular_books,
    total_accounts_count, total_books_count,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

// ============================================================================
// CATALOG REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReport {
    pub total_books: usize,
    pub total_accounts: usize,
    pub books_borrowed: usize,
    pub most_common_genres: Vec<RankedEntry>,
    pub most_popular_books: Vec<RankedEntry>,
    pub most_popular_authors: Vec<RankedEntry>,
    pub generated_at: DateTime<Utc>,
}

impl CatalogReport {
    pub fn build(catalog: &Catalog) -> Self {
        let report = CatalogReport {
            total_books: total_books_count(&catalog.books),
            total_accounts: total_accounts_count(&catalog.accounts),
            books_borrowed: books_borrowed_count(&catalog.books),
            most_common_genres: get_most_common_genres(&catalog.books),
            most_popular_books: get_most_popular_books(&catalog.books),
            most_popular_authors: get_most_popular_authors(&catalog.books, &catalog.authors),
            generated_at: Utc::now(),
        };

        debug!(
            total_books = report.total_books,
            books_borrowed = report.books_borrowed,
            "catalog report built"
        );

        report
    }

    /// Books with no active borrow
    pub fn books_available(&self) -> usize {
        self.total_books.saturating_sub(self.books_borrowed)
    }

    pub fn summary(&self) -> String {
        format!(
            "Catalog: {} books ({} borrowed, {} available), {} accounts",
            self.total_books,
            self.books_borrowed,
            self.books_available(),
            self.total_accounts
        )
    }
}

// ============================================================================
// ACCOUNT REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountReport {
    pub account: Account,
    pub borrow_count: usize,
    pub possessed_books: Vec<PossessedBook>,
}

impl AccountReport {
    /// None if no account has this id
    pub fn build(catalog: &Catalog, account_id: &str) -> Option<Self> {
        let account = catalog.find_account(account_id)?;

        let report = AccountReport {
            account: account.clone(),
            borrow_count: number_of_borrows(account, &catalog.books),
            possessed_books: get_books_possessed_by_account(
                account,
                &catalog.books,
                &catalog.authors,
            ),
        };

        debug!(
            account_id,
            borrow_count = report.borrow_count,
            possessed = report.possessed_books.len(),
            "account report built"
        );

        Some(report)
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} borrows, currently holding {}",
            self.account.name.full_name(),
            self.borrow_count,
            self.possessed_books.len()
        )
    }
}

// ============================================================================
// CSV EXPORT
// ============================================================================

/// Write a ranking as CSV: a `name,count` header, then one row per entry
/// in rank order. An empty ranking still gets the header.
pub fn export_rankings_csv<W: Write>(writer: W, entries: &[RankedEntry]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(["name", "count"])
        .context("Failed to write ranking header")?;

    for entry in entries {
        wtr.serialize(entry).context("Failed to write ranking row")?;
    }

    wtr.flush().context("Failed to flush ranking CSV")?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
