use serde::{Deserialize, Serialize};

pub static DEFAULT_IMAGE_MIME_TYPE: &str = "image/png";

/// Base64 encoded image bytes as returned by the image model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}
