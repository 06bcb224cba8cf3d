//! Bookshelf: book catalog REST service library.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use middleware::log_requests;
pub use model::Book;
pub use routes::{book_routes, common_routes};
pub use state::AppState;
pub use store::{ensure_books_table, BookStore, PgBookStore};
