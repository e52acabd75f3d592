pub mod api;
pub mod error;
pub mod menu;
pub mod models;
pub mod reservation;
pub mod schema;

use diesel_async::pooled_connection::bb8::Pool;
use diesel_async::AsyncPgConnection;

pub type DbPool = Pool<AsyncPgConnection>;
