//! Router construction.

mod book;
mod common;

pub use book::book_routes;
pub use common::common_routes;
