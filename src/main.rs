//! Server bootstrap: env config, pool, table bootstrap, router, serve.

use axum::{middleware, Router};
use bookshelf::{
    book_routes, common_routes, ensure_books_table, log_requests, AppState, PgBookStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bookshelf=info".parse()?))
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/bookshelf".into());
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    ensure_books_table(&pool).await?;

    let state = AppState {
        store: Arc::new(PgBookStore::new(pool)),
    };

    let app = Router::new()
        .merge(common_routes())
        .merge(book_routes(state))
        .layer(middleware::from_fn(log_requests));

    let listener = TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
