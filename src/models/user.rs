use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Queryable, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
