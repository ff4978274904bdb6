pub mod employee_store;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

const CREATE_EMPLOYEES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id SERIAL PRIMARY KEY,
        first_name VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL,
        national_id VARCHAR(16) NOT NULL,
        employee_number VARCHAR(20) NOT NULL,
        email VARCHAR(30) NOT NULL,
        position VARCHAR(10) NOT NULL,
        birth_date DATE NOT NULL
    )
"#;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Creates the `employees` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_EMPLOYEES_TABLE).execute(pool).await?;
    Ok(())
}
