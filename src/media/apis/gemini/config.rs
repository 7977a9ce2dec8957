pub static API_VERSION: &str = "v1beta";
pub static API_KEY_HEADER: &str = "x-goog-api-key";
pub static JSON_MIME_TYPE: &str = "application/json";
pub static IMAGE_MODALITY: &str = "IMAGE";

pub fn generate_content_url(base_url: &str, model: &str) -> String {
    format!("{}/{}/models/{}:generateContent", base_url, API_VERSION, model)
}
