use rocket::serde::json::{json, Value};

use crate::database::{topics, Db};
use crate::errors::ApiError;

#[get("/topics")]
pub async fn list(db: Db) -> Result<Value, ApiError> {
    let topics = db.run(topics::list).await?;
    Ok(json!({ "topics": topics }))
}
