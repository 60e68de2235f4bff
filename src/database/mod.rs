pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

#[database("newsdb")]
pub struct Db(diesel::PgConnection);
