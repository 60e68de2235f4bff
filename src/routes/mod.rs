pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

use rocket::serde::json::{json, Value};
use serde::Deserialize;

use crate::errors::ApiError;

/// Path ids are parsed at the edge so a non-numeric id is rejected as
/// 400 "Invalid ID" before any statement reaches the store.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request("Invalid ID"))
}

/// PATCH body for the vote endpoints. `inc_votes` is taken as raw JSON so a
/// non-integer value can be rejected with the contract's message instead of
/// a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct VoteDelta {
    pub inc_votes: Option<serde_json::Value>,
}

pub fn vote_delta(payload: VoteDelta) -> Result<i32, ApiError> {
    match payload.inc_votes {
        None => Err(ApiError::bad_request("The Input is Invalid")),
        Some(value) => value
            .as_i64()
            .and_then(|delta| i32::try_from(delta).ok())
            .ok_or_else(|| ApiError::bad_request("Invalid ID")),
    }
}

#[catch(404)]
pub fn not_found() -> Value {
    json!({ "msg": "Path not found." })
}

#[catch(500)]
pub fn server_error() -> Value {
    json!({ "msg": "Server error." })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;
    use serde_json::json;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("9999").unwrap(), 9999);

        for raw in ["bananas", "1.5", "", "0x10"] {
            let err = parse_id(raw).unwrap_err();
            assert_eq!(err.status, Status::BadRequest);
            assert_eq!(err.msg, "Invalid ID");
        }
    }

    #[test]
    fn vote_delta_accepts_signed_integers() {
        let delta = vote_delta(VoteDelta {
            inc_votes: Some(json!(101)),
        })
        .unwrap();
        assert_eq!(delta, 101);

        let delta = vote_delta(VoteDelta {
            inc_votes: Some(json!(-30)),
        })
        .unwrap();
        assert_eq!(delta, -30);
    }

    #[test]
    fn vote_delta_rejects_non_integers() {
        for bad in [json!("bananas"), json!(1.5), json!(null), json!([1])] {
            let err = vote_delta(VoteDelta {
                inc_votes: Some(bad),
            })
            .unwrap_err();
            assert_eq!(err.status, Status::BadRequest);
            assert_eq!(err.msg, "Invalid ID");
        }
    }

    #[test]
    fn vote_delta_requires_the_field() {
        let err = vote_delta(VoteDelta { inc_votes: None }).unwrap_err();
        assert_eq!(err.status, Status::BadRequest);
        assert_eq!(err.msg, "The Input is Invalid");
    }
}
