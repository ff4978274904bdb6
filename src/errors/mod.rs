use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

pub const EMPLOYEE_NOT_FOUND: &str = "Empleado no encontrado";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Validation Error: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("Integrity Error: {0}")]
    Integrity(String),
    #[error("Database Error: {0}")]
    Database(String),
}

impl AppError {
    pub fn employee_not_found() -> Self {
        AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct ValidationErrorResponse<'a> {
    error: &'a [String],
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse { error: msg }),
            AppError::Validation(messages) => {
                log::debug!("Rejected request: {}", messages.join("; "));
                HttpResponse::BadRequest().json(ValidationErrorResponse { error: messages })
            }
            AppError::Integrity(msg) | AppError::Database(msg) => {
                log::error!("{}", self);
                HttpResponse::InternalServerError().json(ErrorResponse { error: msg })
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => AppError::Integrity(err.to_string()),
                _ => AppError::Database(err.to_string()),
            },
            _ => AppError::Database(err.to_string()),
        }
    }
}

/// Bad or mistyped JSON bodies answer with the same 400 shape as field validation.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        AppError::Validation(vec![err.to_string()]).into()
    })
}

/// Ids are integers; anything else can never match a row.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err: PathError, _req: &HttpRequest| AppError::employee_not_found().into())
}
