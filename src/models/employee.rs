use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire and storage format of `fecha_nacimiento`.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the `employees` table. Serializes with the Spanish field names
/// existing clients expect; `birth_date` renders as `YYYY-MM-DD`.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "dni")]
    pub national_id: String,
    #[serde(rename = "num_empleado")]
    pub employee_number: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "cargo")]
    pub position: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: NaiveDate,
}

/// Fields of a new employee before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub employee_number: String,
    pub email: String,
    pub position: String,
    pub birth_date: NaiveDate,
}

impl EmployeeDraft {
    /// In-memory counterpart of the row `INSERT ... RETURNING` yields.
    pub fn into_employee(self, id: i32) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            national_id: self.national_id,
            employee_number: self.employee_number,
            email: self.email,
            position: self.position,
            birth_date: self.birth_date,
        }
    }
}

/// Partial update. `None` keeps the stored value; the birth date is always replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    pub employee_number: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub birth_date: NaiveDate,
}

impl EmployeeChanges {
    /// In-memory counterpart of the `COALESCE` update the Postgres store runs.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(national_id) = self.national_id {
            employee.national_id = national_id;
        }
        if let Some(employee_number) = self.employee_number {
            employee.employee_number = employee_number;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        employee.birth_date = self.birth_date;
    }
}

pub fn parse_birth_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)
}
