//! Book CRUD routes. The id arrives as a raw path segment; handlers parse
//! it so a non-integer id maps to 400.

use crate::handlers::book::{create, delete as delete_book, get as get_book, list, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list).post(create))
        .route("/books/:id", get(get_book).put(update).delete(delete_book))
        .with_state(state)
}
