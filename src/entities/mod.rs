// Entity Models - the record shapes every query in this crate reads
//
// Records arrive fully formed from the catalog sources. Nothing here
// validates them: ids are weak references and are only ever looked up.

pub mod account;
pub mod author;
pub mod book;
pub mod person;

pub use account::{Account, AccountId};
pub use author::{Author, AuthorId};
pub use book::{Book, BookId, Borrow};
pub use person::PersonName;
