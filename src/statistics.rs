// 📊 Catalog Statistics - catalog-wide totals and top-five rankings
//
// Totals:   books, accounts, currently borrowed books
// Rankings: genres by book count, books by borrows, authors by borrows
//
// Every ranking goes through `ranking::rank_top_five`.

use crate::books::partition_books_by_borrowed_status;
use crate::entities::{Account, Author, AuthorId, Book};
use crate::ranking::{rank_top_five, RankedEntry};
use std::collections::{HashMap, HashSet};

// ============================================================================
// TOTALS
// ============================================================================

/// Number of book records (duplicates included)
pub fn total_books_count(books: &[Book]) -> usize {
    books.len()
}

/// Number of account records
pub fn total_accounts_count(accounts: &[Account]) -> usize {
    accounts.len()
}

/// Number of books with at least one borrow still out
pub fn books_borrowed_count(books: &[Book]) -> usize {
    let (borrowed, _available) = partition_books_by_borrowed_status(books);
    borrowed.len()
}

// ============================================================================
// RANKINGS
// ============================================================================

/// Top five genres by number of books.
///
/// Genres are collected in first-occurrence order before ranking, so
/// equally common genres appear in the order the catalog introduces them.
pub fn get_most_common_genres(books: &[Book]) -> Vec<RankedEntry> {
    let mut genres: Vec<&str> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    let mut index_of: HashMap<&str, usize> = HashMap::new();

    for book in books {
        match index_of.get(book.genre.as_str()).copied() {
            Some(i) => counts[i] += 1,
            None => {
                index_of.insert(&book.genre, genres.len());
                genres.push(&book.genre);
                counts.push(1);
            }
        }
    }

    rank_top_five(genres, counts)
}

/// Top five books by total borrows.
///
/// A book id listed more than once is ranked once, using its first record.
pub fn get_most_popular_books(books: &[Book]) -> Vec<RankedEntry> {
    let mut seen: HashSet<&str> = HashSet::new();

    let (titles, counts): (Vec<&str>, Vec<usize>) = books
        .iter()
        .filter(|book| seen.insert(book.id.as_str()))
        .map(|book| (book.title.as_str(), book.borrow_count()))
        .unzip();

    rank_top_five(titles, counts)
}

/// Top five authors by total borrows across their books.
///
/// An author id listed more than once is ranked once. Authors with no
/// books in the catalog rank with a count of zero.
pub fn get_most_popular_authors(books: &[Book], authors: &[Author]) -> Vec<RankedEntry> {
    let mut borrows_by_author: HashMap<AuthorId, usize> = HashMap::new();
    for book in books {
        *borrows_by_author.entry(book.author_id).or_insert(0) += book.borrow_count();
    }

    let mut seen: HashSet<AuthorId> = HashSet::new();

    let (names, counts): (Vec<String>, Vec<usize>) = authors
        .iter()
        .filter(|author| seen.insert(author.id))
        .map(|author| {
            let count = borrows_by_author.get(&author.id).copied().unwrap_or(0);
            (author.display_name(), count)
        })
        .unzip();

    rank_top_five(names, counts)
}

// ============================================================================
// TESTS
// ============================================================================
