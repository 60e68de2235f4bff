//! NC News: a content API for a news/discussion platform.
//!
//! Topics, articles, comments and users live in PostgreSQL; the database
//! layer composes validated, fully parameterized queries and translates
//! store failures into the API's `{status, msg}` error contract, while the
//! Rocket routes stay a thin transport.

#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_sync_db_pools;
#[macro_use]
extern crate diesel;

pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod routes;
pub mod schema;

use rocket::{Build, Rocket};

pub fn rocket() -> Rocket<Build> {
    dotenv::dotenv().ok();
    let figment =
        rocket::Config::figment().merge(("databases.newsdb.url", config::database_url()));
    rocket::custom(figment)
        .attach(database::Db::fairing())
        .attach(config::cors_fairing())
        .mount(
            "/api",
            routes![
                routes::topics::list,
                routes::articles::list,
                routes::articles::find,
                routes::articles::create,
                routes::articles::update_votes,
                routes::articles::delete,
                routes::comments::list,
                routes::comments::create,
                routes::comments::update_votes,
                routes::comments::delete,
                routes::users::list,
                routes::users::find,
            ],
        )
        .register("/", catchers![routes::not_found, routes::server_error])
}
