use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Queryable, Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
