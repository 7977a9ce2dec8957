use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum MediaApiError {
    ShotNotFound,
    ResultNotAvailable,
    ImageNotAvailable,
    ImageUndecodable,
}

impl MediaApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ShotNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Shot not found.".to_string(),
            },
            Self::ResultNotAvailable => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "No generated result for this session yet.".to_string(),
            },
            Self::ImageNotAvailable => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "No image was generated for this shot.".to_string(),
            },
            Self::ImageUndecodable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to decode image.".to_string(),
            },
        }
    }
}
