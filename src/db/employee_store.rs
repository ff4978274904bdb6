use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeChanges, EmployeeDraft};

/// CRUD primitives over the employee table. Each call is one auto-committed
/// statement; concurrent updates to the same row are last-writer-wins.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Employee>, AppError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, AppError>;

    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, AppError>;

    async fn update(&self, id: i32, changes: EmployeeChanges)
        -> Result<Option<Employee>, AppError>;

    /// Returns the row as it was immediately before removal.
    async fn delete(&self, id: i32) -> Result<Option<Employee>, AppError>;
}

const COLUMNS: &str =
    "id, first_name, last_name, national_id, employee_number, email, position, birth_date";

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeStore { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees", COLUMNS);
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, AppError> {
        let sql = format!(
            "INSERT INTO employees (first_name, last_name, national_id, employee_number, email, position, birth_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            COLUMNS
        );
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(draft.first_name)
            .bind(draft.last_name)
            .bind(draft.national_id)
            .bind(draft.employee_number)
            .bind(draft.email)
            .bind(draft.position)
            .bind(draft.birth_date)
            .fetch_one(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn update(
        &self,
        id: i32,
        changes: EmployeeChanges,
    ) -> Result<Option<Employee>, AppError> {
        let sql = format!(
            r#"
            UPDATE employees SET
                first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                national_id = COALESCE($3, national_id),
                employee_number = COALESCE($4, employee_number),
                email = COALESCE($5, email),
                position = COALESCE($6, position),
                birth_date = $7
            WHERE id = $8
            RETURNING {}
            "#,
            COLUMNS
        );
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(changes.first_name)
            .bind(changes.last_name)
            .bind(changes.national_id)
            .bind(changes.employee_number)
            .bind(changes.email)
            .bind(changes.position)
            .bind(changes.birth_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn delete(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let sql = format!("DELETE FROM employees WHERE id = $1 RETURNING {}", COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }
}
