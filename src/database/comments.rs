use diesel::prelude::*;

use crate::errors::ApiError;
use crate::models::comment::{ArticleComment, Comment, NewComment};
use crate::schema::comments;

/// Comments for one article, oldest first. The parent article is looked up
/// first: listing comments of a missing article is a 404, while an existing
/// article with no comments is an empty vec.
pub fn list_for_article(
    conn: &mut PgConnection,
    article_id: i32,
) -> Result<Vec<ArticleComment>, ApiError> {
    use crate::schema::comments::dsl;

    super::articles::find(conn, article_id)?;

    comments::table
        .filter(dsl::article_id.eq(article_id))
        .select((
            dsl::comment_id,
            dsl::votes,
            dsl::created_at,
            dsl::author,
            dsl::body,
        ))
        .order(dsl::created_at.asc())
        .load::<ArticleComment>(conn)
        .map_err(ApiError::from)
}

/// Both fields must be present and non-empty before the store is touched.
fn required_fields(new_comment: NewComment) -> Result<(String, String), ApiError> {
    match (new_comment.username, new_comment.body) {
        (Some(author), Some(body)) if !author.is_empty() && !body.is_empty() => Ok((author, body)),
        _ => Err(ApiError::bad_request(
            "Username or Body has not been provided.",
        )),
    }
}

/// Inserts a comment. Whether the referenced article and user actually
/// exist is left to the store's foreign keys, whose violations the error
/// translator distinguishes by constraint name.
pub fn create(
    conn: &mut PgConnection,
    article_id: i32,
    new_comment: NewComment,
) -> Result<Comment, ApiError> {
    use crate::schema::comments::dsl;

    let (author, body) = required_fields(new_comment)?;

    diesel::insert_into(comments::table)
        .values((
            dsl::article_id.eq(article_id),
            dsl::author.eq(author),
            dsl::body.eq(body),
        ))
        .get_result::<Comment>(conn)
        .map_err(ApiError::from)
}

pub fn update_votes(
    conn: &mut PgConnection,
    comment_id: i32,
    delta: i32,
) -> Result<Comment, ApiError> {
    use crate::schema::comments::dsl;

    diesel::update(comments::table.find(comment_id))
        .set(dsl::votes.eq(dsl::votes + delta))
        .get_result::<Comment>(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("No comment found"))
}

pub fn delete(conn: &mut PgConnection, comment_id: i32) -> Result<(), ApiError> {
    let deleted = diesel::delete(comments::table.find(comment_id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("No Comment Found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;

    fn comment(username: Option<&str>, body: Option<&str>) -> NewComment {
        NewComment {
            username: username.map(String::from),
            body: body.map(String::from),
        }
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        for payload in [
            comment(None, Some("nice")),
            comment(Some("butter_bridge"), None),
            comment(Some(""), Some("nice")),
            comment(Some("butter_bridge"), Some("")),
            comment(None, None),
        ] {
            let err = required_fields(payload).unwrap_err();
            assert_eq!(err.status, Status::BadRequest);
            assert_eq!(err.msg, "Username or Body has not been provided.");
        }
    }

    #[test]
    fn present_fields_pass_through() {
        let (author, body) = required_fields(comment(Some("butter_bridge"), Some("nice"))).unwrap();
        assert_eq!(author, "butter_bridge");
        assert_eq!(body, "nice");
    }
}
