use diesel::prelude::*;

use crate::errors::ApiError;
use crate::models::topic::Topic;
use crate::schema::topics;

pub fn list(conn: &mut PgConnection) -> Result<Vec<Topic>, ApiError> {
    topics::table.load::<Topic>(conn).map_err(ApiError::from)
}

/// Live lookup backing the known-topic check of the article listing.
pub fn exists(conn: &mut PgConnection, slug: &str) -> Result<bool, ApiError> {
    diesel::select(diesel::dsl::exists(topics::table.find(slug)))
        .get_result::<bool>(conn)
        .map_err(ApiError::from)
}
