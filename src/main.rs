use std::io;

use actix_web::{middleware::Logger, App, HttpServer};
use dotenv::dotenv;
use log::info;

use employee_backend::config::Config;
use employee_backend::{cors, db, employee_store, handlers};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;

    // Initialize the database pool and make sure the table exists before serving
    let pool = db::create_pool(&config).await.map_err(io::Error::other)?;
    db::ensure_schema(&pool).await.map_err(io::Error::other)?;
    info!("Database ready");

    let store = employee_store(pool.clone());

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    pool.close().await;
    info!("Server stopped, database pool closed");
    Ok(())
}
