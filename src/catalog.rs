// 🗂️ Catalog - the three record collections, loaded together
//
// A catalog directory holds one JSON array per collection:
//
//   accounts.json   [Account]
//   books.json      [Book]
//   authors.json    [Author]
//
// Loading only deserializes. Dangling borrow/author ids are left as they
// are; the queries treat them as lookup misses.

use crate::accounts::find_account_by_id;
use crate::entities::{Account, Author, Book};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const ACCOUNTS_FILE: &str = "accounts.json";
pub const BOOKS_FILE: &str = "books.json";
pub const AUTHORS_FILE: &str = "authors.json";

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub accounts: Vec<Account>,
    pub books: Vec<Book>,
    pub authors: Vec<Author>,
}

impl Catalog {
    pub fn new(accounts: Vec<Account>, books: Vec<Book>, authors: Vec<Author>) -> Self {
        Catalog {
            accounts,
            books,
            authors,
        }
    }

    /// Load `accounts.json`, `books.json` and `authors.json` from `dir`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let catalog = Catalog {
            accounts: load_records(&dir.join(ACCOUNTS_FILE))?,
            books: load_records(&dir.join(BOOKS_FILE))?,
            authors: load_records(&dir.join(AUTHORS_FILE))?,
        };

        info!(
            dir = %dir.display(),
            accounts = catalog.accounts.len(),
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Build a catalog from in-memory JSON arrays
    pub fn from_json_strs(accounts: &str, books: &str, authors: &str) -> Result<Self> {
        Ok(Catalog {
            accounts: serde_json::from_str(accounts).context("Failed to parse accounts")?,
            books: serde_json::from_str(books).context("Failed to parse books")?,
            authors: serde_json::from_str(authors).context("Failed to parse authors")?,
        })
    }

    pub fn find_account(&self, id: &str) -> Option<&Account> {
        find_account_by_id(&self.accounts, id)
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let records: Vec<T> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(path = %path.display(), records = records.len(), "records loaded");

    Ok(records)
}

// ============================================================================
// TESTS
// ============================================================================
