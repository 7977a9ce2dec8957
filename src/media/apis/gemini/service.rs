use futures::future::BoxFuture;
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::{
    app::{
        env::Env,
        envy::Envy,
        util::reqwest::{post_json, PostJsonError},
    },
    generations::{
        enums::aspect_ratio::AspectRatio,
        errors::GenerationError,
        models::inline_image::InlineImage,
        providers::{DraftRequest, ImageRenderer, PromptDrafter},
    },
};

use super::{
    config::{generate_content_url, API_KEY_HEADER, JSON_MIME_TYPE},
    models::input_spec::InputSpec,
    structs::generate_content_response::GenerateContentResponse,
};

/// Client for the Gemini `generateContent` endpoint, used both for prompt
/// drafting and for image rendering.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    pub http_client: reqwest::Client,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    api_key_var: String,
}

impl GeminiClient {
    pub fn new(envy: &Envy, http_client: Option<reqwest::Client>) -> Self {
        Self {
            http_client: http_client.unwrap_or_default(),
            base_url: envy.gemini_base_url().to_string(),
            text_model: envy.gemini_text_model().to_string(),
            image_model: envy.gemini_image_model().to_string(),
            api_key_var: Env::GEMINI_API_KEY.to_string(),
        }
    }

    /// Reads the credential from another environment variable.
    #[cfg(test)]
    pub fn with_api_key_var(mut self, api_key_var: &str) -> Self {
        self.api_key_var = api_key_var.to_string();
        self
    }

    // read on every call, a key exported after startup is picked up
    fn api_key(&self) -> Result<String, GenerationError> {
        match std::env::var(&self.api_key_var) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => {
                tracing::error!("environment: {} missing", self.api_key_var);
                Err(GenerationError::MissingCredential)
            }
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        input: &InputSpec,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let api_key = self.api_key()?;

        let Ok(api_key_value) = HeaderValue::from_str(&api_key) else {
            return Err(GenerationError::Upstream(
                "api key is not a valid header value".to_string(),
            ));
        };

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_MIME_TYPE));
        headers.insert(API_KEY_HEADER, api_key_value);

        let url = generate_content_url(&self.base_url, model);

        let text = match post_json(&self.http_client, &url, headers, input).await {
            Ok(text) => text,
            Err(PostJsonError::Status { code, body }) => {
                return Err(GenerationError::Upstream(format!("{}: {}", code, body)))
            }
            Err(e) => return Err(GenerationError::Upstream(e.to_string())),
        };

        match serde_json::from_str(&text) {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::warn!("generate_content failed to deserialize: {:?}", text);
                Err(GenerationError::Upstream(format!(
                    "failed to deserialize response: {}",
                    e
                )))
            }
        }
    }

    pub async fn draft_structured(
        &self,
        request: DraftRequest<'_>,
    ) -> Result<String, GenerationError> {
        let input = InputSpec::structured(
            request.system_instruction,
            request.user_content,
            request.response_schema,
            request.temperature,
        );

        let response = self.generate_content(&self.text_model, &input).await?;

        match response.text() {
            Some(text) => Ok(text),
            None => {
                tracing::warn!(
                    "draft_structured got no text, finish reason: {:?}",
                    response.finish_reason()
                );
                Err(GenerationError::EmptyResponse)
            }
        }
    }

    pub async fn render_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<InlineImage, GenerationError> {
        let input = InputSpec::image(prompt, aspect_ratio.value());

        let response = self.generate_content(&self.image_model, &input).await?;

        match response.first_inline_image() {
            Some(image) => Ok(image),
            None => Err(GenerationError::ImageSynthesis(format!(
                "no inline image part, finish reason: {:?}",
                response.finish_reason()
            ))),
        }
    }
}

impl PromptDrafter for GeminiClient {
    fn draft<'a>(
        &'a self,
        request: DraftRequest<'a>,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(self.draft_structured(request))
    }
}

impl ImageRenderer for GeminiClient {
    fn render<'a>(
        &'a self,
        prompt: &'a str,
        aspect_ratio: AspectRatio,
    ) -> BoxFuture<'a, Result<InlineImage, GenerationError>> {
        Box::pin(self.render_image(prompt, aspect_ratio))
    }
}
