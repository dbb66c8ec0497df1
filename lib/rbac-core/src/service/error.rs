use shared_types::{EmployeeId, OrganisationId};
use thiserror::Error;

use crate::model::role::Role;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Organisation `{0}` not found")]
    Organisation(OrganisationId),

    #[error("Employee `{0}` not found")]
    Employee(EmployeeId),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Organisation `{0}` still has employees")]
    OrganisationHasEmployees(OrganisationId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid value for field `{0}`")]
    InvalidField(&'static str),

    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("Field `{field}` is longer than {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Organisation `{0}` does not exist")]
    UnknownOrganisation(OrganisationId),

    #[error("Role `{0}` required")]
    Forbidden(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0047,
    BR_0054,
    BR_0084,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error code",
            ErrorCode::BR_0001 => "Organisation not found",
            ErrorCode::BR_0002 => "Employee not found",
            ErrorCode::BR_0003 => "Organisation still has employees",
            ErrorCode::BR_0004 => "Missing required field",
            ErrorCode::BR_0005 => "Invalid field value",
            ErrorCode::BR_0006 => "Empty field value",
            ErrorCode::BR_0007 => "Field value too long",
            ErrorCode::BR_0008 => "Unknown organisation",
            ErrorCode::BR_0009 => "Insufficient role",
            ErrorCode::BR_0010 => "Entity not found",
            ErrorCode::BR_0047 => "Response mapping error",
            ErrorCode::BR_0054 => "Database error",
            ErrorCode::BR_0084 => "General input validation error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::BR_0047,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Organisation(_) => ErrorCode::BR_0001,
            EntityNotFoundError::Employee(_) => ErrorCode::BR_0002,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::OrganisationHasEmployees(_) => ErrorCode::BR_0003,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField(_) => ErrorCode::BR_0004,
            ValidationError::InvalidField(_) => ErrorCode::BR_0005,
            ValidationError::EmptyField(_) => ErrorCode::BR_0006,
            ValidationError::FieldTooLong { .. } => ErrorCode::BR_0007,
            ValidationError::UnknownOrganisation(_) => ErrorCode::BR_0008,
            ValidationError::Forbidden(_) => ErrorCode::BR_0009,
        }
    }
}
