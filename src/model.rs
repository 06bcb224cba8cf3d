//! The Book record as stored and as exposed over HTTP.

use serde::{Deserialize, Serialize};

/// A book in the catalog. `id` is assigned by the store on create; request
/// bodies may omit it (and on update the path id supersedes whatever the
/// body carries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(rename = "publishedYear")]
    pub published_year: i32,
    pub genre: String,
    pub summary: String,
}
