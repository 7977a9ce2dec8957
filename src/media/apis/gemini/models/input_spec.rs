use serde::Serialize;
use serde_json::Value;

use crate::media::apis::gemini::config::{IMAGE_MODALITY, JSON_MIME_TYPE};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<InputContent>,
    pub contents: Vec<InputContent>,
    pub generation_config: InputGenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct InputContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<InputTextPart>,
}

#[derive(Debug, Serialize)]
pub struct InputTextPart {
    pub text: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<InputImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputImageConfig {
    pub aspect_ratio: String,
}

impl InputContent {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![InputTextPart {
                text: text.to_string(),
            }],
        }
    }
}

impl InputSpec {
    /// A single user turn answered with json matching `response_schema`.
    pub fn structured(
        system_instruction: &str,
        user_content: &str,
        response_schema: &Value,
        temperature: f32,
    ) -> Self {
        Self {
            system_instruction: Some(InputContent::text(None, system_instruction)),
            contents: vec![InputContent::text(Some("user"), user_content)],
            generation_config: InputGenerationConfig {
                response_mime_type: Some(JSON_MIME_TYPE.to_string()),
                response_schema: Some(response_schema.clone()),
                temperature: Some(temperature),
                ..Default::default()
            },
        }
    }

    pub fn image(prompt: &str, aspect_ratio: &str) -> Self {
        Self {
            system_instruction: None,
            contents: vec![InputContent::text(Some("user"), prompt)],
            generation_config: InputGenerationConfig {
                response_modalities: Some(vec![IMAGE_MODALITY.to_string()]),
                image_config: Some(InputImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                }),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_structured_input_shape() {
        let schema = json!({ "type": "OBJECT" });
        let input = InputSpec::structured("be helpful", "five prompts please", &schema, 0.5);

        let value = serde_json::to_value(&input).unwrap();

        assert_eq!(
            value,
            json!({
                "systemInstruction": { "parts": [{ "text": "be helpful" }] },
                "contents": [{ "role": "user", "parts": [{ "text": "five prompts please" }] }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "OBJECT" },
                    "temperature": 0.5
                }
            })
        );
    }

    #[test]
    fn test_image_input_shape() {
        let input = InputSpec::image("a woman on a tokyo street", "9:16");

        let value = serde_json::to_value(&input).unwrap();

        assert!(value.get("systemInstruction").is_none());
        assert_eq!(
            value["generationConfig"],
            json!({
                "responseModalities": ["IMAGE"],
                "imageConfig": { "aspectRatio": "9:16" }
            })
        );
        assert_eq!(value["contents"][0]["parts"][0]["text"], "a woman on a tokyo street");
    }
}
