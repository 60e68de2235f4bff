use diesel::prelude::*;

use crate::errors::ApiError;
use crate::models::user::User;
use crate::schema::users;

pub fn list(conn: &mut PgConnection) -> Result<Vec<User>, ApiError> {
    users::table.load::<User>(conn).map_err(ApiError::from)
}

pub fn find(conn: &mut PgConnection, username: &str) -> Result<User, ApiError> {
    users::table
        .find(username)
        .first::<User>(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("No user found"))
}
