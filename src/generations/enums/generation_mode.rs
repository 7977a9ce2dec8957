use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Draft the five prompts only.
    Prompts,
    /// Draft the prompts, then render one image per prompt.
    Images,
}

impl GenerationMode {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Prompts => "prompts",
            Self::Images => "images",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "prompts" => Some(Self::Prompts),
            "images" => Some(Self::Images),
            _ => None,
        }
    }

    pub fn from_generate_images(generate_images: bool) -> Self {
        match generate_images {
            true => Self::Images,
            false => Self::Prompts,
        }
    }
}
