use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    FullBody,
    ExtremeCloseUp,
    ViewFromBehind,
    SideProfile,
    ActionShot,
}

impl ShotKind {
    pub const ALL: [ShotKind; 5] = [
        Self::FullBody,
        Self::ExtremeCloseUp,
        Self::ViewFromBehind,
        Self::SideProfile,
        Self::ActionShot,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::FullBody => "full_body",
            Self::ExtremeCloseUp => "extreme_close_up",
            Self::ViewFromBehind => "view_from_behind",
            Self::SideProfile => "side_profile",
            Self::ActionShot => "action_shot",
        }
    }

    /// Property name used in the drafted json payload.
    pub fn wire_name(&self) -> &'static str {
        match *self {
            Self::FullBody => "fullBody",
            Self::ExtremeCloseUp => "extremeCloseUp",
            Self::ViewFromBehind => "viewFromBehind",
            Self::SideProfile => "sideProfile",
            Self::ActionShot => "actionShot",
        }
    }

    pub fn index(&self) -> usize {
        match *self {
            Self::FullBody => 0,
            Self::ExtremeCloseUp => 1,
            Self::ViewFromBehind => 2,
            Self::SideProfile => 3,
            Self::ActionShot => 4,
        }
    }

    /// Accepts both the snake_case value and the wire name.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.value() == value || kind.wire_name() == value)
    }
}
