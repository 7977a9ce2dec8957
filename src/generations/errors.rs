use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

/// The only failure text a user ever sees for an aborted generation.
pub static GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate prompts. Please check your API key or try again later.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("api key not found in environment")]
    MissingCredential,
    #[error("upstream failure: {0}")]
    Upstream(String),
    #[error("no content generated")]
    EmptyResponse,
    #[error("response does not match prompt schema: {0}")]
    SchemaViolation(String),
    #[error("image synthesis failed: {0}")]
    ImageSynthesis(String),
}

/// Why a shot catalog file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ShotCatalogError {
    #[error("failed to read shot catalog: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid shot catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("shot catalog must list each shot exactly once, {0} is missing or repeated")]
    MissingShot(&'static str),
    #[error("shot catalog lists {0} shots, expected 5")]
    ShotCount(usize),
}

impl GenerationError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingCredential => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            },
            _ => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_never_leaks_detail() {
        let error = GenerationError::Upstream("401 API key not valid".to_string());
        let api_error = error.value();

        assert_eq!(api_error.code, StatusCode::BAD_GATEWAY);
        assert_eq!(api_error.message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_display_keeps_detail_for_logs() {
        let error = GenerationError::SchemaViolation("actionShot is blank".to_string());

        assert_eq!(
            error.to_string(),
            "response does not match prompt schema: actionShot is blank"
        );
        assert_eq!(
            GenerationError::MissingCredential.to_string(),
            "api key not found in environment"
        );
    }
}
