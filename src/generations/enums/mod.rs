pub mod aspect_ratio;
pub mod generation_mode;
pub mod generation_phase;
pub mod shot_kind;
