use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Full `comments` row, as returned by `INSERT ... RETURNING *` and the
/// vote update. Field order matches the table column order.
#[derive(Debug, Queryable, Serialize)]
pub struct Comment {
    pub comment_id: i32,
    pub body: String,
    pub article_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: NaiveDateTime,
}

/// Comment as listed under an article; the parent `article_id` is implied
/// by the request path and not repeated per row.
#[derive(Debug, Queryable, Serialize)]
pub struct ArticleComment {
    pub comment_id: i32,
    pub votes: i32,
    pub created_at: NaiveDateTime,
    pub author: String,
    pub body: String,
}

/// Creation payload for POST /api/articles/:article_id/comments.
/// Presence of both fields is checked before the store is touched.
#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub username: Option<String>,
    pub body: Option<String>,
}
