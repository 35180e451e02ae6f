//! Client-side validation of the order form.
//!
//! Same contract as the review validation: pure, synchronous, the full rule
//! set runs on every submit attempt.

use super::OrderDraft;

/// Fields of the order form that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Master,
    Services,
    AppointmentDate,
    ClientName,
    Phone,
}

/// One failing field with its user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: OrderField,
    pub message: String,
}

impl FieldError {
    fn new(field: OrderField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validates the whole draft and returns every failing field, at most one
/// error per field, in the order the form renders them.
pub fn validate(draft: &OrderDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.master_id.trim().is_empty() {
        errors.push(FieldError::new(
            OrderField::Master,
            "Пожалуйста, выберите мастера",
        ));
    }

    if draft.services.is_empty() {
        errors.push(FieldError::new(
            OrderField::Services,
            "Выберите хотя бы одну услугу",
        ));
    }

    if draft.appointment_date.trim().is_empty() {
        errors.push(FieldError::new(
            OrderField::AppointmentDate,
            "Укажите дату и время записи",
        ));
    }

    if draft.client_name.trim().is_empty() {
        errors.push(FieldError::new(
            OrderField::ClientName,
            "Пожалуйста, укажите ваше имя",
        ));
    }

    if draft.phone.trim().is_empty() {
        errors.push(FieldError::new(
            OrderField::Phone,
            "Пожалуйста, укажите ваш телефон",
        ));
    }

    errors
}
