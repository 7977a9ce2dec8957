use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    app::models::{api_error::ApiError, json_from_request::ValidatedJson},
    attributes::dtos::update_attribute_dto::UpdateAttributeDto,
    AppState,
};

use super::{dtos::submit_session_dto::SubmitSessionDto, models::form_session::FormSession, service};

pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<FormSession>) {
    (StatusCode::CREATED, Json(service::create_session(&state)))
}

pub async fn get_session_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FormSession>, ApiError> {
    match service::get_session_by_id(&id, &state) {
        Ok(session) => Ok(Json(session)),
        Err(e) => Err(e),
    }
}

pub async fn update_attribute(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateAttributeDto>,
) -> Result<Json<FormSession>, ApiError> {
    match service::update_attribute(&id, &dto, &state) {
        Ok(session) => Ok(Json(session)),
        Err(e) => Err(e),
    }
}

/// Answers with the `loading` snapshot; poll the session for the outcome.
pub async fn submit_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<SubmitSessionDto>,
) -> Result<(StatusCode, Json<FormSession>), ApiError> {
    match service::submit_session(&id, &dto, &state) {
        Ok(session) => Ok((StatusCode::ACCEPTED, Json(session))),
        Err(e) => Err(e),
    }
}

pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FormSession>, ApiError> {
    match service::reset_session(&id, &state) {
        Ok(session) => Ok(Json(session)),
        Err(e) => Err(e),
    }
}
