/// Coarse progress markers; advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    DraftingPrompts,
    RenderingImages,
}

impl GenerationPhase {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::DraftingPrompts => "drafting_prompts",
            Self::RenderingImages => "rendering_images",
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            Self::DraftingPrompts => "Designing your influencer...",
            Self::RenderingImages => "Rendering images...",
        }
    }
}
