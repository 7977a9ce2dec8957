use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{
    enums::{aspect_ratio::AspectRatio, shot_kind::ShotKind},
    errors::ShotCatalogError,
};

/// Sampling temperature for prompt drafting. Not user configurable.
pub static PROMPT_TEMPERATURE: f32 = 0.7;

pub static DEFAULT_SYSTEM_INSTRUCTION: &str = "\
Act as a world-class prompt engineer specialised in creating hyper-realistic virtual influencers.

Your only goal is to take a list of parameters and turn them into 5 extremely detailed, professional image generation prompts in ENGLISH.

You must automatically \"enhance\" the inputs, adding lighting details (volumetric lighting, golden hour, neon noir, etc.), the camera lens type (85mm, 35mm, macro) and textures (skin pores, fabric texture) to ensure maximum realism.

Keep the character consistent across the 5 prompts.

Return the answer strictly as JSON.
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotSpec {
    pub kind: ShotKind,
    pub title: String,
    /// Guidance handed to the drafting model for this shot.
    pub description: String,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Deserialize)]
struct ShotCatalogFile {
    system_instruction: Option<String>,
    shots: Vec<ShotSpec>,
}

/// Shot titles, drafting guidance and aspect ratios, one entry per `ShotKind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotCatalog {
    pub system_instruction: String,
    shots: [ShotSpec; 5],
}

impl Default for ShotCatalog {
    fn default() -> Self {
        Self {
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            shots: [
                spec(
                    ShotKind::FullBody,
                    "Full Body Shot",
                    "A dense, descriptive prompt for a full body shot.",
                    AspectRatio::TallPortrait,
                ),
                spec(
                    ShotKind::ExtremeCloseUp,
                    "Extreme Close-Up",
                    "A dense, descriptive prompt for an extreme close-up focusing on face and details.",
                    AspectRatio::Square,
                ),
                spec(
                    ShotKind::ViewFromBehind,
                    "View From Behind",
                    "A dense, descriptive prompt for a view from behind, atmospheric.",
                    AspectRatio::Portrait,
                ),
                spec(
                    ShotKind::SideProfile,
                    "Side Profile",
                    "A dense, descriptive prompt for a sharp side profile view.",
                    AspectRatio::Square,
                ),
                spec(
                    ShotKind::ActionShot,
                    "Action Shot",
                    "A dynamic medium shot focused 100% on the specific action.",
                    AspectRatio::Landscape,
                ),
            ],
        }
    }
}

fn spec(kind: ShotKind, title: &str, description: &str, aspect_ratio: AspectRatio) -> ShotSpec {
    ShotSpec {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        aspect_ratio,
    }
}

impl ShotCatalog {
    pub fn from_file(path: &str) -> Result<Self, ShotCatalogError> {
        let text = fs::read_to_string(path)?;

        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ShotCatalogError> {
        let file: ShotCatalogFile = serde_json::from_str(text)?;

        let mut shots = file.shots;
        shots.sort_by_key(|shot| shot.kind.index());

        for (i, kind) in ShotKind::ALL.iter().enumerate() {
            if shots.get(i).map(|shot| shot.kind) != Some(*kind) {
                return Err(ShotCatalogError::MissingShot(kind.value()));
            }
        }

        let shots: [ShotSpec; 5] = match shots.try_into() {
            Ok(shots) => shots,
            Err(shots) => return Err(ShotCatalogError::ShotCount(Vec::len(&shots))),
        };

        Ok(Self {
            system_instruction: file
                .system_instruction
                .unwrap_or_else(|| DEFAULT_SYSTEM_INSTRUCTION.to_string()),
            shots,
        })
    }

    pub fn spec(&self, kind: ShotKind) -> &ShotSpec {
        &self.shots[kind.index()]
    }

    pub fn specs(&self) -> &[ShotSpec] {
        &self.shots
    }

    pub fn title(&self, kind: ShotKind) -> &str {
        &self.spec(kind).title
    }

    pub fn aspect_ratio(&self, kind: ShotKind) -> AspectRatio {
        self.spec(kind).aspect_ratio
    }

    /// Json schema the drafting model must answer with: five required strings.
    pub fn response_schema(&self) -> Value {
        let mut properties = Map::new();
        for shot in &self.shots {
            properties.insert(
                shot.kind.wire_name().to_string(),
                json!({ "type": "STRING", "description": shot.description }),
            );
        }

        let names: Vec<&str> = ShotKind::ALL.iter().map(|kind| kind.wire_name()).collect();

        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": names,
            "propertyOrdering": names,
        })
    }
}
