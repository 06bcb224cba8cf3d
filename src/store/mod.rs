//! Persistence capability for books. Any conforming backend may be
//! substituted; the SQL-backed implementation lives in [`postgres`].

use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;

mod postgres;

pub use postgres::{ensure_books_table, PgBookStore};

/// The five persistence operations a book store must provide.
///
/// No operation is safe to retry blindly: a `NotFound` will repeat, while a
/// `Db` failure may be transient.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persists a new book, assigning a fresh unique id into `book.id`.
    async fn create_book(&self, book: &mut Book) -> Result<(), AppError>;

    /// Returns all persisted books. Ordering is store-defined; an empty
    /// store yields an empty vec, not an error.
    async fn get_books(&self) -> Result<Vec<Book>, AppError>;

    /// Fetches a single book by id, or `NotFound`.
    async fn get_book(&self, id: i64) -> Result<Book, AppError>;

    /// Full replace of the row keyed by `book.id`. Fails with `NotFound`
    /// when no such row exists, never a silent no-op.
    async fn update_book(&self, book: &Book) -> Result<(), AppError>;

    /// Hard delete by id. Fails with `NotFound` when no such row exists.
    async fn delete_book(&self, id: i64) -> Result<(), AppError>;
}
