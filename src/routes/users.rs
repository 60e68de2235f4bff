use rocket::serde::json::{json, Value};

use crate::database::{users, Db};
use crate::errors::ApiError;

#[get("/users")]
pub async fn list(db: Db) -> Result<Value, ApiError> {
    let users = db.run(users::list).await?;
    Ok(json!({ "users": users }))
}

#[get("/users/<username>")]
pub async fn find(db: Db, username: String) -> Result<Value, ApiError> {
    let user = db.run(move |conn| users::find(conn, &username)).await?;
    Ok(json!({ "user": user }))
}
