use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};

use super::{parse_id, vote_delta, VoteDelta};
use crate::database::{comments, Db};
use crate::errors::ApiError;
use crate::models::comment::NewComment;

#[get("/articles/<article_id>/comments")]
pub async fn list(db: Db, article_id: &str) -> Result<Value, ApiError> {
    let article_id = parse_id(article_id)?;
    let comments = db
        .run(move |conn| comments::list_for_article(conn, article_id))
        .await?;
    Ok(json!({ "comments": comments }))
}

#[post("/articles/<article_id>/comments", data = "<new_comment>")]
pub async fn create(
    db: Db,
    article_id: &str,
    new_comment: Json<NewComment>,
) -> Result<(Status, Value), ApiError> {
    let article_id = parse_id(article_id)?;
    let comment = db
        .run(move |conn| comments::create(conn, article_id, new_comment.into_inner()))
        .await?;
    Ok((Status::Created, json!({ "comment": comment })))
}

#[patch("/comments/<comment_id>", data = "<payload>")]
pub async fn update_votes(
    db: Db,
    comment_id: &str,
    payload: Json<VoteDelta>,
) -> Result<Value, ApiError> {
    let comment_id = parse_id(comment_id)?;
    let delta = vote_delta(payload.into_inner())?;
    let comment = db
        .run(move |conn| comments::update_votes(conn, comment_id, delta))
        .await?;
    Ok(json!({ "comment": comment }))
}

#[delete("/comments/<comment_id>")]
pub async fn delete(db: Db, comment_id: &str) -> Result<Status, ApiError> {
    let comment_id = parse_id(comment_id)?;
    db.run(move |conn| comments::delete(conn, comment_id))
        .await?;
    Ok(Status::NoContent)
}
