pub mod generated_shot;
pub mod generation_result;
pub mod inline_image;
pub mod prompt_set;
