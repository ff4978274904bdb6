pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::web;

use crate::db::employee_store::{EmployeeStore, PgEmployeeStore};

/// Wraps the Postgres gateway in the shared handle the handlers extract.
pub fn employee_store(pool: sqlx::PgPool) -> web::Data<dyn EmployeeStore> {
    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool));
    web::Data::from(store)
}

/// Browser clients may call the API from any origin.
pub fn cors() -> Cors {
    Cors::permissive()
}
