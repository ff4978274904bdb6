use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::db::employee_store::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{parse_birth_date, EmployeeChanges, EmployeeDraft};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate, Debug)]
pub struct NewEmployee {
    #[validate(required(message = "Missing data for required field."), length(max = 100))]
    nombre: Option<String>,
    #[validate(required(message = "Missing data for required field."), length(max = 100))]
    apellido: Option<String>,
    #[validate(required(message = "Missing data for required field."), length(max = 16))]
    dni: Option<String>,
    #[validate(required(message = "Missing data for required field."), length(max = 20))]
    num_empleado: Option<String>,
    #[validate(required(message = "Missing data for required field."), length(max = 30))]
    correo: Option<String>,
    #[validate(required(message = "Missing data for required field."), length(max = 10))]
    cargo: Option<String>,
    #[validate(
        required(message = "Missing data for required field."),
        custom = "validate_birth_date"
    )]
    fecha_nacimiento: Option<String>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct EmployeeUpdate {
    #[validate(length(max = 100))]
    nombre: Option<String>,
    #[validate(length(max = 100))]
    apellido: Option<String>,
    #[validate(length(max = 16))]
    dni: Option<String>,
    #[validate(length(max = 20))]
    num_empleado: Option<String>,
    #[validate(length(max = 30))]
    correo: Option<String>,
    #[validate(length(max = 10))]
    cargo: Option<String>,
    // Required even on partial updates.
    #[validate(
        required(message = "Missing data for required field."),
        custom = "validate_birth_date"
    )]
    fecha_nacimiento: Option<String>,
}

fn validate_birth_date(value: &str) -> Result<(), ValidationError> {
    parse_birth_date(value).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("date");
        err.message = Some("Not a valid date, expected YYYY-MM-DD.".into());
        err
    })
}

fn incomplete() -> AppError {
    AppError::Validation(vec!["payload failed validation".to_string()])
}

impl NewEmployee {
    pub fn into_draft(self) -> Result<EmployeeDraft, AppError> {
        validate_payload(&self)?;

        // Presence and the date format were checked by `validate_payload`.
        let birth_date = self
            .fecha_nacimiento
            .as_deref()
            .and_then(|value| parse_birth_date(value).ok());
        let (
            Some(first_name),
            Some(last_name),
            Some(national_id),
            Some(employee_number),
            Some(email),
            Some(position),
            Some(birth_date),
        ) = (
            self.nombre,
            self.apellido,
            self.dni,
            self.num_empleado,
            self.correo,
            self.cargo,
            birth_date,
        )
        else {
            return Err(incomplete());
        };

        Ok(EmployeeDraft {
            first_name,
            last_name,
            national_id,
            employee_number,
            email,
            position,
            birth_date,
        })
    }
}

impl EmployeeUpdate {
    pub fn into_changes(self) -> Result<EmployeeChanges, AppError> {
        validate_payload(&self)?;

        let Some(birth_date) = self
            .fecha_nacimiento
            .as_deref()
            .and_then(|value| parse_birth_date(value).ok())
        else {
            return Err(incomplete());
        };

        Ok(EmployeeChanges {
            first_name: self.nombre,
            last_name: self.apellido,
            national_id: self.dni,
            employee_number: self.num_empleado,
            email: self.correo,
            position: self.cargo,
            birth_date,
        })
    }
}

pub async fn get_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = store.get_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<i32>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = store
        .get_by_id(id.into_inner())
        .await?
        .ok_or_else(AppError::employee_not_found)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    let draft = new_employee.into_inner().into_draft()?;
    let employee = store.insert(draft).await?;
    log::info!("Created employee {}", employee.id);
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<i32>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();

    // An unknown id is reported before anything wrong with the body.
    if store.get_by_id(id).await?.is_none() {
        return Err(AppError::employee_not_found().into());
    }

    let changes = updates.into_inner().into_changes()?;
    let employee = store
        .update(id, changes)
        .await?
        .ok_or_else(AppError::employee_not_found)?;
    log::info!("Updated employee {}", id);
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<i32>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();
    let employee = store
        .delete(id)
        .await?
        .ok_or_else(AppError::employee_not_found)?;
    log::info!("Deleted employee {}", id);
    Ok(HttpResponse::Ok().json(employee))
}
