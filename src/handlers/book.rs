//! Book CRUD handlers: create, list, get, update, delete.
//!
//! Handlers are a pure translation layer: decode the request, call the
//! store, map the result to a status code. No field-level validation
//! happens here; any decodable book is persisted as-is.

use crate::error::AppError;
use crate::model::Book;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid book id".into()))
}

/// Typed decode in the handler so every shape error maps to 400, not
/// axum's 422 for data errors.
fn decode_book(body: Value) -> Result<Book, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(format!("invalid book payload: {e}")))
}

#[derive(Serialize)]
pub struct DeleteAck {
    message: &'static str,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut book = decode_book(body)?;
    state.store.create_book(&mut book).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.store.get_books().await?;
    Ok(Json(books))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&id_str)?;
    let book = state.store.get_book(id).await?;
    Ok(Json(book))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&id_str)?;
    let mut book = decode_book(body)?;
    // The body's id is advisory only; the path id wins.
    book.id = id;
    state.store.update_book(&book).await?;
    Ok(Json(book))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<DeleteAck>, AppError> {
    let id = parse_id(&id_str)?;
    state.store.delete_book(id).await?;
    Ok(Json(DeleteAck {
        message: "Book deleted successfully",
    }))
}
