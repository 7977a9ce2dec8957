use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::attributes::enums::attribute_field::AttributeField;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAttributeDto {
    #[validate(custom(function = "validate_field"))]
    pub field: String,
    pub value: String,
}

impl UpdateAttributeDto {
    pub fn attribute_field(&self) -> Option<AttributeField> {
        AttributeField::from_value(&self.field)
    }
}

fn validate_field(value: &str) -> Result<(), ValidationError> {
    if AttributeField::from_value(value).is_none() {
        let mut error = ValidationError::new("validate_field");
        error.message = Some("field must be one of subject, physique, hair, features, clothing, environment, action, style.".into());
        return Err(error);
    }

    Ok(())
}
