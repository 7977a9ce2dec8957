use serde::Deserialize;

use crate::generations::models::inline_image::{InlineImage, DEFAULT_IMAGE_MIME_TYPE};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GenerateContentCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentCandidate {
    pub content: Option<GenerateContentContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentContent {
    #[serde(default)]
    pub parts: Vec<GenerateContentPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentPart {
    pub text: Option<String>,
    pub inline_data: Option<GenerateContentInlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentInlineData {
    pub mime_type: Option<String>,
    pub data: String,
}

impl GenerateContentResponse {
    fn parts(&self) -> &[GenerateContentPart] {
        match self.candidates.first().and_then(|c| c.content.as_ref()) {
            Some(content) => content.parts.as_slice(),
            None => &[],
        }
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    /// Text parts of the first candidate joined together, `None` when there are none.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        match text.trim().is_empty() {
            true => None,
            false => Some(text),
        }
    }

    /// The first part carrying non empty inline image bytes.
    pub fn first_inline_image(&self) -> Option<InlineImage> {
        self.parts()
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .find(|inline_data| !inline_data.data.is_empty())
            .map(|inline_data| InlineImage {
                mime_type: inline_data
                    .mime_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string()),
                data: inline_data.data.clone(),
            })
    }
}
