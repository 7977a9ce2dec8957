use serde::{Deserialize, Serialize};

use crate::generations::enums::{aspect_ratio::AspectRatio, shot_kind::ShotKind};

use super::inline_image::InlineImage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedShot {
    pub kind: ShotKind,
    pub title: String,
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Base64 image, absent when synthesis failed or was not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl GeneratedShot {
    pub fn new(
        kind: ShotKind,
        title: &str,
        prompt: &str,
        aspect_ratio: AspectRatio,
        image: Option<InlineImage>,
    ) -> Self {
        let (mime_type, image_data) = match image {
            Some(image) => (Some(image.mime_type), Some(image.data)),
            None => (None, None),
        };

        Self {
            kind,
            title: title.to_string(),
            prompt: prompt.to_string(),
            aspect_ratio,
            mime_type,
            image_data,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_data.is_some()
    }
}
