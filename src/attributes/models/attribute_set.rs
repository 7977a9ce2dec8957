use serde::{Deserialize, Serialize};

use crate::attributes::enums::attribute_field::AttributeField;

pub static DEFAULT_STYLE: &str = "Photorealism, 8k, cinematic lighting, highly detailed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub subject: String,
    pub physique: String,
    pub hair: String,
    pub features: String,
    pub clothing: String,
    pub environment: String,
    pub action: String,
    pub style: String,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            subject: String::new(),
            physique: String::new(),
            hair: String::new(),
            features: String::new(),
            clothing: String::new(),
            environment: String::new(),
            action: String::new(),
            style: DEFAULT_STYLE.to_string(),
        }
    }
}

impl AttributeSet {
    pub fn get(&self, field: AttributeField) -> &str {
        match field {
            AttributeField::Subject => &self.subject,
            AttributeField::Physique => &self.physique,
            AttributeField::Hair => &self.hair,
            AttributeField::Features => &self.features,
            AttributeField::Clothing => &self.clothing,
            AttributeField::Environment => &self.environment,
            AttributeField::Action => &self.action,
            AttributeField::Style => &self.style,
        }
    }

    pub fn set(&mut self, field: AttributeField, value: String) {
        let slot = match field {
            AttributeField::Subject => &mut self.subject,
            AttributeField::Physique => &mut self.physique,
            AttributeField::Hair => &mut self.hair,
            AttributeField::Features => &mut self.features,
            AttributeField::Clothing => &mut self.clothing,
            AttributeField::Environment => &mut self.environment,
            AttributeField::Action => &mut self.action,
            AttributeField::Style => &mut self.style,
        };

        *slot = value;
    }

    /// Required fields that are empty or whitespace only.
    pub fn missing_required(&self) -> Vec<AttributeField> {
        AttributeField::ALL
            .into_iter()
            .filter(AttributeField::is_required)
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// The user turn sent to the prompt drafting model.
    pub fn to_user_content(&self) -> String {
        let mut content = "Generate 5 prompts based on this data:\n".to_string();

        for field in AttributeField::ALL {
            content.push_str(&format!("- {}: {}\n", field.label(), self.get(field).trim()));
        }

        content
    }
}
