use std::sync::Arc;

use futures::future::join_all;

use crate::attributes::models::attribute_set::AttributeSet;

use super::{
    config::{ShotCatalog, PROMPT_TEMPERATURE},
    enums::{generation_mode::GenerationMode, generation_phase::GenerationPhase, shot_kind::ShotKind},
    errors::GenerationError,
    models::{
        generated_shot::GeneratedShot, generation_result::GenerationResult,
        inline_image::InlineImage, prompt_set::PromptSet,
    },
    providers::{DraftRequest, ImageRenderer, PromptDrafter},
};

pub type PhaseCallback<'a> = &'a (dyn Fn(GenerationPhase) + Send + Sync);

/// Drafts the five shot prompts and, in `Images` mode, renders them.
///
/// Holds no state between calls; every `generate` is independent.
pub struct Generator {
    drafter: Arc<dyn PromptDrafter>,
    renderer: Arc<dyn ImageRenderer>,
    catalog: Arc<ShotCatalog>,
}

impl Generator {
    pub fn new(
        drafter: Arc<dyn PromptDrafter>,
        renderer: Arc<dyn ImageRenderer>,
        catalog: Arc<ShotCatalog>,
    ) -> Self {
        Self {
            drafter,
            renderer,
            catalog,
        }
    }

    pub fn catalog(&self) -> &ShotCatalog {
        &self.catalog
    }

    pub async fn generate(
        &self,
        attributes: &AttributeSet,
        mode: GenerationMode,
        on_phase: Option<PhaseCallback<'_>>,
    ) -> Result<GenerationResult, GenerationError> {
        report(on_phase, GenerationPhase::DraftingPrompts);
        let prompts = self.draft_prompts(attributes).await?;

        let mut images = match mode {
            GenerationMode::Prompts => vec![None; ShotKind::ALL.len()],
            GenerationMode::Images => {
                report(on_phase, GenerationPhase::RenderingImages);
                self.render_images(&prompts).await
            }
        };

        Ok(GenerationResult::assemble(mode, |kind| {
            let spec = self.catalog.spec(kind);
            GeneratedShot::new(
                kind,
                &spec.title,
                prompts.get(kind),
                spec.aspect_ratio,
                images[kind.index()].take(),
            )
        }))
    }

    pub async fn draft_prompts(&self, attributes: &AttributeSet) -> Result<PromptSet, GenerationError> {
        let user_content = attributes.to_user_content();
        let response_schema = self.catalog.response_schema();

        let request = DraftRequest {
            system_instruction: &self.catalog.system_instruction,
            user_content: &user_content,
            response_schema: &response_schema,
            temperature: PROMPT_TEMPERATURE,
        };

        let text = match self.drafter.draft(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("draft_prompts failed: {}", e);
                return Err(e);
            }
        };

        match PromptSet::parse(&text) {
            Ok(prompts) => Ok(prompts),
            Err(e) => {
                tracing::error!("draft_prompts returned unusable content: {} ({:?})", e, text);
                Err(e)
            }
        }
    }

    /// One request per shot, all in flight together. Results keep `ShotKind::ALL` order.
    async fn render_images(&self, prompts: &PromptSet) -> Vec<Option<InlineImage>> {
        let mut futures = Vec::with_capacity(ShotKind::ALL.len());

        for kind in ShotKind::ALL {
            futures.push(self.render_shot(kind, prompts.get(kind)));
        }

        join_all(futures).await
    }

    async fn render_shot(&self, kind: ShotKind, prompt: &str) -> Option<InlineImage> {
        let aspect_ratio = self.catalog.aspect_ratio(kind);

        match self.renderer.render(prompt, aspect_ratio).await {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("render_shot {} failed: {}", kind.value(), e);
                None
            }
        }
    }
}

fn report(on_phase: Option<PhaseCallback<'_>>, phase: GenerationPhase) {
    tracing::debug!("generation phase: {}", phase.value());

    if let Some(on_phase) = on_phase {
        on_phase(phase);
    }
}
