use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|err| AppError::Validation(error_messages(&err)))
}

/// Flattens field errors into sorted `"field: message"` lines.
pub fn error_messages(err: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = err
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                };
                format!("{}: {}", field, detail)
            })
        })
        .collect();
    messages.sort();
    messages
}
