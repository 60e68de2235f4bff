use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};

use super::{parse_id, vote_delta, VoteDelta};
use crate::database::articles::ListParams;
use crate::database::{articles, Db};
use crate::errors::ApiError;
use crate::models::article::NewArticle;

#[get("/articles?<topic>&<sort_by>&<order>&<limit>&<page>")]
pub async fn list(
    db: Db,
    topic: Option<String>,
    sort_by: Option<String>,
    order: Option<String>,
    limit: Option<i64>,
    page: Option<i64>,
) -> Result<Value, ApiError> {
    let params = ListParams {
        topic,
        sort_by,
        order,
        limit,
        page,
    };
    let articles = db.run(move |conn| articles::list(conn, params)).await?;
    Ok(json!({ "articles": articles }))
}

#[get("/articles/<article_id>")]
pub async fn find(db: Db, article_id: &str) -> Result<Value, ApiError> {
    let article_id = parse_id(article_id)?;
    let article = db.run(move |conn| articles::find(conn, article_id)).await?;
    Ok(json!({ "article": article }))
}

#[post("/articles", data = "<new_article>")]
pub async fn create(db: Db, new_article: Json<NewArticle>) -> Result<(Status, Value), ApiError> {
    let article = db
        .run(move |conn| articles::create(conn, new_article.into_inner()))
        .await?;
    Ok((Status::Created, json!({ "article": article })))
}

#[patch("/articles/<article_id>", data = "<payload>")]
pub async fn update_votes(
    db: Db,
    article_id: &str,
    payload: Json<VoteDelta>,
) -> Result<Value, ApiError> {
    let article_id = parse_id(article_id)?;
    let delta = vote_delta(payload.into_inner())?;
    let article = db
        .run(move |conn| articles::update_votes(conn, article_id, delta))
        .await?;
    Ok(json!({ "article": article }))
}

#[delete("/articles/<article_id>")]
pub async fn delete(db: Db, article_id: &str) -> Result<Status, ApiError> {
    let article_id = parse_id(article_id)?;
    db.run(move |conn| articles::delete(conn, article_id))
        .await?;
    Ok(Status::NoContent)
}
