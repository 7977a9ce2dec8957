#[non_exhaustive]
pub struct Env;

impl Env {
    pub const APP_ENV: &str = "APP_ENV";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
}
