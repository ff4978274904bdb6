#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use employee_backend::db::employee_store::EmployeeStore;
use employee_backend::errors::AppError;
use employee_backend::handlers;
use employee_backend::models::employee::{Employee, EmployeeChanges, EmployeeDraft};

/// Store backed by a map, ids handed out from 1 like a SERIAL column.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<i32, Employee>>,
    next_id: Mutex<i32>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, AppError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let employee = draft.into_employee(*next_id);
        self.rows
            .lock()
            .unwrap()
            .insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: i32,
        changes: EmployeeChanges,
    ) -> Result<Option<Employee>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|employee| {
            changes.apply_to(employee);
            employee.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Employee>, AppError> {
        Ok(self.rows.lock().unwrap().remove(&id))
    }
}

/// Store whose every call fails the way an unreachable database does.
pub struct UnreachableStore;

fn unreachable() -> AppError {
    AppError::Database("connection refused".to_string())
}

#[async_trait]
impl EmployeeStore for UnreachableStore {
    async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        Err(unreachable())
    }

    async fn get_by_id(&self, _id: i32) -> Result<Option<Employee>, AppError> {
        Err(unreachable())
    }

    async fn insert(&self, _draft: EmployeeDraft) -> Result<Employee, AppError> {
        Err(unreachable())
    }

    async fn update(
        &self,
        _id: i32,
        _changes: EmployeeChanges,
    ) -> Result<Option<Employee>, AppError> {
        Err(unreachable())
    }

    async fn delete(&self, _id: i32) -> Result<Option<Employee>, AppError> {
        Err(unreachable())
    }
}

pub fn app(
    store: Arc<dyn EmployeeStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(store))
        .configure(handlers::configure)
}

pub fn ana() -> Value {
    json!({
        "nombre": "Ana",
        "apellido": "Lopez",
        "dni": "123",
        "num_empleado": "E1",
        "correo": "a@b.com",
        "cargo": "Dev",
        "fecha_nacimiento": "1990-05-01"
    })
}
