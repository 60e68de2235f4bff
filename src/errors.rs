//! Uniform `{status, msg}` error contract.
//!
//! Two error domains funnel into [`ApiError`]: rejections raised directly by
//! the database layer (unknown topic, missing row, missing field) and
//! Postgres errors surfaced through Diesel, translated in the `From` impl
//! below. Clients never see raw store diagnostics.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Status,
    pub msg: String,
}

impl ApiError {
    pub fn bad_request(msg: &str) -> Self {
        ApiError {
            status: Status::BadRequest,
            msg: msg.to_string(),
        }
    }

    pub fn not_found(msg: &str) -> Self {
        ApiError {
            status: Status::NotFound,
            msg: msg.to_string(),
        }
    }

    pub fn internal() -> Self {
        ApiError {
            status: Status::InternalServerError,
            msg: "Server error.".to_string(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let body = json!({ "msg": self.msg });
        (self.status, body).respond_to(req)
    }
}

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> Self {
        match err {
            // A missing required field is inserted as DEFAULT and bounces
            // off the column's NOT NULL constraint.
            DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, _) => {
                ApiError::bad_request("The Input is Invalid")
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                match info.constraint_name() {
                    Some("comments_author_fkey") | Some("articles_author_fkey") => {
                        ApiError::not_found("No Username Found")
                    }
                    Some("comments_article_id_fkey") => ApiError::not_found("No Article Found"),
                    _ => ApiError::internal(),
                }
            }
            _ => ApiError::internal(),
        }
    }
}
