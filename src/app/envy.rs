use serde::Deserialize;

pub static DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub static DEFAULT_GEMINI_TEXT_MODEL: &str = "gemini-2.5-flash";
pub static DEFAULT_GEMINI_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub static DEFAULT_SESSION_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub gemini_base_url: Option<String>,
    pub gemini_text_model: Option<String>,
    pub gemini_image_model: Option<String>,

    pub generate_images: Option<bool>,
    pub shot_catalog_path: Option<String>,

    pub session_ttl_secs: Option<u64>,
}

impl Envy {
    pub fn gemini_base_url(&self) -> &str {
        self.gemini_base_url
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn gemini_text_model(&self) -> &str {
        self.gemini_text_model
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_TEXT_MODEL)
    }

    pub fn gemini_image_model(&self) -> &str {
        self.gemini_image_model
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_IMAGE_MODEL)
    }

    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl_secs.unwrap_or(DEFAULT_SESSION_TTL_SECS)
    }
}
