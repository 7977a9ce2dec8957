use futures::future::BoxFuture;
use serde_json::Value;

use super::{
    enums::aspect_ratio::AspectRatio, errors::GenerationError, models::inline_image::InlineImage,
};

#[derive(Debug, Clone, Copy)]
pub struct DraftRequest<'a> {
    pub system_instruction: &'a str,
    pub user_content: &'a str,
    pub response_schema: &'a Value,
    pub temperature: f32,
}

/// A text model that answers with json matching `response_schema`.
pub trait PromptDrafter: Send + Sync {
    /// Returns the raw json text produced by the model.
    fn draft<'a>(&'a self, request: DraftRequest<'a>) -> BoxFuture<'a, Result<String, GenerationError>>;
}

pub trait ImageRenderer: Send + Sync {
    fn render<'a>(
        &'a self,
        prompt: &'a str,
        aspect_ratio: AspectRatio,
    ) -> BoxFuture<'a, Result<InlineImage, GenerationError>>;
}
