use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text, Timestamp};
use serde::{Deserialize, Serialize};

use crate::schema::articles;

/// Full `articles` row, as returned by `INSERT ... RETURNING *` and the
/// vote update.
#[derive(Debug, Queryable, Serialize)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub votes: i32,
}

/// List-view shape: no `body`, plus the derived `comment_count`.
/// Field order matches the listing query's select list.
#[derive(Debug, Queryable, Serialize)]
pub struct ArticleSummary {
    pub article_id: i32,
    pub title: String,
    pub author: String,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i32,
    pub comment_count: i32,
}

/// Single-fetch shape: `body` included, plus `comment_count`.
#[derive(Debug, QueryableByName, Serialize)]
pub struct ArticleDetail {
    #[diesel(sql_type = Integer)]
    pub article_id: i32,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Text)]
    pub author: String,
    #[diesel(sql_type = Text)]
    pub topic: String,
    #[diesel(sql_type = Text)]
    pub body: String,
    #[diesel(sql_type = Timestamp)]
    pub created_at: NaiveDateTime,
    #[diesel(sql_type = Integer)]
    pub votes: i32,
    #[diesel(sql_type = Integer)]
    pub comment_count: i32,
}

/// Creation payload. Every field is required by the table, but they are
/// deserialized as options and inserted as-is: a `None` becomes `DEFAULT`
/// and trips the column's NOT NULL constraint, which the error translator
/// reports as 400 "The Input is Invalid".
#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = articles)]
pub struct NewArticle {
    pub title: Option<String>,
    pub topic: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
}
