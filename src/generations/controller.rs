use std::sync::Arc;

use axum::{extract::State, Json};

use crate::AppState;

use super::config::ShotSpec;

pub async fn get_shots(State(state): State<Arc<AppState>>) -> Json<Vec<ShotSpec>> {
    Json(state.generator.catalog().specs().to_vec())
}
