use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

pub static MISSING_REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill in at least Sex/Age, Clothing, and Environment to get good results.";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionsApiError {
    SessionNotFound,
    MissingRequiredFields,
    UnknownField,
}

impl SessionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::SessionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Session not found.".to_string(),
            },
            Self::MissingRequiredFields => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: MISSING_REQUIRED_FIELDS_MESSAGE.to_string(),
            },
            Self::UnknownField => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Unknown attribute field.".to_string(),
            },
        }
    }
}
