use serde::{Deserialize, Serialize};

use crate::{
    app::util::time,
    generations::enums::{generation_mode::GenerationMode, shot_kind::ShotKind},
};

use super::generated_shot::GeneratedShot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub full_body: GeneratedShot,
    pub extreme_close_up: GeneratedShot,
    pub view_from_behind: GeneratedShot,
    pub side_profile: GeneratedShot,
    pub action_shot: GeneratedShot,
    pub mode: GenerationMode,
    pub generated_at: u64,
}

impl GenerationResult {
    /// Builds one shot per kind, in `ShotKind::ALL` order.
    pub fn assemble(mode: GenerationMode, mut shot: impl FnMut(ShotKind) -> GeneratedShot) -> Self {
        Self {
            full_body: shot(ShotKind::FullBody),
            extreme_close_up: shot(ShotKind::ExtremeCloseUp),
            view_from_behind: shot(ShotKind::ViewFromBehind),
            side_profile: shot(ShotKind::SideProfile),
            action_shot: shot(ShotKind::ActionShot),
            mode,
            generated_at: time::current_time_in_secs(),
        }
    }

    pub fn shot(&self, kind: ShotKind) -> &GeneratedShot {
        match kind {
            ShotKind::FullBody => &self.full_body,
            ShotKind::ExtremeCloseUp => &self.extreme_close_up,
            ShotKind::ViewFromBehind => &self.view_from_behind,
            ShotKind::SideProfile => &self.side_profile,
            ShotKind::ActionShot => &self.action_shot,
        }
    }

    pub fn shots(&self) -> impl Iterator<Item = &GeneratedShot> {
        ShotKind::ALL.into_iter().map(|kind| self.shot(kind))
    }
}
