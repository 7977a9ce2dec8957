use std::sync::Arc;

use bytes::Bytes;
use regex::Regex;

use crate::{
    app::{models::api_error::ApiError, util::time},
    generations::{
        enums::shot_kind::ShotKind, models::generated_shot::GeneratedShot,
        models::inline_image::DEFAULT_IMAGE_MIME_TYPE,
    },
    sessions, AppState,
};

use super::errors::MediaApiError;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
    static ref UNSAFE_FILE_NAME_REGEX: Regex = Regex::new(r"[^a-z0-9_.-]").unwrap();
}

/// Decoded image of one shot, ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotImage {
    pub bytes: Bytes,
    pub mime_type: String,
    pub file_name: String,
}

fn get_shot(session_id: &str, shot: &str, state: &Arc<AppState>) -> Result<GeneratedShot, ApiError> {
    let Some(kind) = ShotKind::from_value(shot) else {
        return Err(MediaApiError::ShotNotFound.value());
    };

    let session = sessions::service::get_session_by_id(session_id, state)?;

    match session.result {
        Some(result) => Ok(result.shot(kind).clone()),
        None => Err(MediaApiError::ResultNotAvailable.value()),
    }
}

pub fn get_shot_prompt(
    session_id: &str,
    shot: &str,
    state: &Arc<AppState>,
) -> Result<String, ApiError> {
    let shot = get_shot(session_id, shot, state)?;

    Ok(shot.prompt)
}

pub fn get_shot_image(
    session_id: &str,
    shot: &str,
    state: &Arc<AppState>,
) -> Result<ShotImage, ApiError> {
    let shot = get_shot(session_id, shot, state)?;

    let Some(data) = &shot.image_data else {
        return Err(MediaApiError::ImageNotAvailable.value());
    };

    let bytes = match base64::decode(data) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("get_shot_image {}: {:?}", shot.kind.value(), e);
            return Err(MediaApiError::ImageUndecodable.value());
        }
    };

    let mime_type = shot
        .mime_type
        .clone()
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string());
    let file_name = download_file_name(&shot.title, time::current_time_in_millis(), &mime_type);

    Ok(ShotImage {
        bytes: Bytes::from(bytes),
        mime_type,
        file_name,
    })
}

/// `Full Body Shot` saved at `millis` as png becomes `full_body_shot_<millis>.png`.
pub fn download_file_name(title: &str, millis: u128, mime_type: &str) -> String {
    let slug = WHITESPACE_REGEX
        .replace_all(title.trim(), "_")
        .to_lowercase();
    // the name is quoted inside Content-Disposition
    let slug = match UNSAFE_FILE_NAME_REGEX.replace_all(&slug, "") {
        safe if safe.is_empty() => "shot".to_string(),
        safe => safe.into_owned(),
    };

    let extension = match mime_type.parse::<mime::Mime>() {
        Ok(mime) if mime.type_() == mime::IMAGE => mime.subtype().as_str().to_lowercase(),
        _ => mime::PNG.as_str().to_string(),
    };

    format!("{}_{}.{}", slug, millis, extension)
}
