//! HTTP handlers.

pub mod book;
