//! PostgreSQL-backed book store. Every operation issues exactly one
//! parameterized statement against the `books` table.

use crate::error::AppError;
use crate::model::Book;
use crate::store::BookStore;
use async_trait::async_trait;
use sqlx::PgPool;

/// Create the `books` table if it does not exist. Call once before serving.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            published_year INT NOT NULL,
            genre TEXT NOT NULL,
            summary TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create_book(&self, book: &mut Book) -> Result<(), AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO books (title, author, published_year, genre, summary) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.published_year)
        .bind(&book.genre)
        .bind(&book.summary)
        .fetch_one(&self.pool)
        .await?;
        book.id = id;
        Ok(())
    }

    async fn get_books(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_year, genre, summary FROM books",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn get_book(&self, id: i64) -> Result<Book, AppError> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_year, genre, summary FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(id))
    }

    async fn update_book(&self, book: &Book) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE books SET title = $1, author = $2, published_year = $3, genre = $4, \
             summary = $5 WHERE id = $6",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.published_year)
        .bind(&book.genre)
        .bind(&book.summary)
        .bind(book.id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(book.id));
        }
        Ok(())
    }

    async fn delete_book(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}
