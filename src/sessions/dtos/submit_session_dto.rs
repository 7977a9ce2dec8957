use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::generations::enums::generation_mode::GenerationMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmitSessionDto {
    #[validate(custom(function = "validate_mode"))]
    pub mode: Option<String>,
}

impl SubmitSessionDto {
    pub fn generation_mode(&self) -> Option<GenerationMode> {
        self.mode.as_deref().and_then(GenerationMode::from_value)
    }
}

fn validate_mode(value: &str) -> Result<(), ValidationError> {
    if GenerationMode::from_value(value).is_none() {
        let mut error = ValidationError::new("validate_mode");
        error.message = Some("mode must be either prompts or images.".into());
        return Err(error);
    }

    Ok(())
}
