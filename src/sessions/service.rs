use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    app::models::api_error::ApiError,
    attributes::dtos::update_attribute_dto::UpdateAttributeDto,
    generations::enums::generation_phase::GenerationPhase,
    AppState,
};

use super::{
    dtos::submit_session_dto::SubmitSessionDto,
    errors::SessionsApiError,
    models::form_session::{FormSession, Submission},
};

pub fn create_session(state: &Arc<AppState>) -> FormSession {
    let session = state.sessions.create();
    tracing::debug!("created session {}", session.id);

    session
}

pub fn get_session_by_id(id: &str, state: &Arc<AppState>) -> Result<FormSession, ApiError> {
    match state.sessions.get(id) {
        Some(session) => Ok(session),
        None => Err(SessionsApiError::SessionNotFound.value()),
    }
}

pub fn update_attribute(
    id: &str,
    dto: &UpdateAttributeDto,
    state: &Arc<AppState>,
) -> Result<FormSession, ApiError> {
    let Some(field) = dto.attribute_field() else {
        return Err(SessionsApiError::UnknownField.value());
    };

    let updated = state.sessions.update(id, |session| {
        session.update(field, dto.value.to_string());
        session.clone()
    });

    match updated {
        Some(session) => Ok(session),
        None => Err(SessionsApiError::SessionNotFound.value()),
    }
}

/// Returns the `loading` snapshot; the generation keeps running in the background.
pub fn submit_session(
    id: &str,
    dto: &SubmitSessionDto,
    state: &Arc<AppState>,
) -> Result<FormSession, ApiError> {
    start_generation(id, dto, state).map(|(session, _)| session)
}

fn start_generation(
    id: &str,
    dto: &SubmitSessionDto,
    state: &Arc<AppState>,
) -> Result<(FormSession, JoinHandle<()>), ApiError> {
    let mode = dto.generation_mode().unwrap_or(state.default_mode);

    let Some(outcome) = state.sessions.update(id, |session| {
        session
            .begin_submit(mode)
            .map(|submission| (submission, session.clone()))
    }) else {
        return Err(SessionsApiError::SessionNotFound.value());
    };

    let (submission, session) = match outcome {
        Ok(outcome) => outcome,
        Err(e) => return Err(e.value()),
    };

    if let Some(superseded) = &submission.superseded {
        tracing::debug!("session {} resubmitted, aborting previous generation", id);
        superseded.abort();
    }

    let request_id = submission.request_id.clone();
    let task = tokio::spawn(run_generation(id.to_string(), submission, state.clone()));

    track_task(id, &request_id, &task, state);

    Ok((session, task))
}

/// Hands the abort handle to the session. A request superseded, reset or
/// evicted before this point is aborted right away.
fn track_task(id: &str, request_id: &str, task: &JoinHandle<()>, state: &Arc<AppState>) -> bool {
    let attached = state
        .sessions
        .update(id, |session| session.attach_task(request_id, task.abort_handle()))
        .unwrap_or(false);

    if !attached {
        tracing::debug!("generation {} no longer active, aborting", request_id);
        task.abort();
    }

    attached
}

pub fn reset_session(id: &str, state: &Arc<AppState>) -> Result<FormSession, ApiError> {
    let reset = state.sessions.update(id, |session| {
        let in_flight = session.reset();
        (in_flight, session.clone())
    });

    let Some((in_flight, session)) = reset else {
        return Err(SessionsApiError::SessionNotFound.value());
    };

    if let Some(abort_handle) = in_flight {
        abort_handle.abort();
    }

    Ok(session)
}

async fn run_generation(session_id: String, submission: Submission, state: Arc<AppState>) {
    let request_id = submission.request_id;

    let on_phase = |phase: GenerationPhase| {
        state
            .sessions
            .update(&session_id, |session| session.set_progress(&request_id, phase));
    };

    let outcome = state
        .generator
        .generate(&submission.attributes, submission.mode, Some(&on_phase))
        .await;

    if let Err(e) = &outcome {
        tracing::error!(
            "generation {} for session {} failed: {}",
            request_id,
            session_id,
            e
        );
    }

    let settled = state.sessions.update(&session_id, |session| {
        session
            .complete(&request_id, outcome)
            .then(|| session.status)
    });

    match settled.flatten() {
        Some(status) => tracing::debug!("session {} settled as {}", session_id, status.value()),
        None => tracing::debug!("discarded stale generation {}", request_id),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{atomic::Ordering, Arc};

    use axum::http::StatusCode;
    use tokio::sync::Notify;

    use super::*;
    use crate::{
        attributes::models::attribute_set::AttributeSet,
        generations::{
            enums::{generation_mode::GenerationMode, shot_kind::ShotKind},
            errors::GENERIC_FAILURE_MESSAGE,
            service::testing::{app_state, prompts_json, MockDrafter, MockRenderer},
        },
        sessions::{enums::generation_status::GenerationStatus, errors::MISSING_REQUIRED_FIELDS_MESSAGE},
    };

    fn dto(field: &str, value: &str) -> UpdateAttributeDto {
        UpdateAttributeDto {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn fill_scenario(id: &str, state: &Arc<AppState>) {
        update_attribute(id, &dto("subject", "Woman, 25 years old"), state).unwrap();
        update_attribute(id, &dto("clothing", "Cyberpunk tech-wear jacket"), state).unwrap();
        update_attribute(id, &dto("environment", "Tokyo neon streets at night"), state).unwrap();
    }

    #[tokio::test]
    async fn test_scenario_goes_idle_loading_success() {
        let drafter = Arc::new(MockDrafter::answering(Ok(prompts_json("neon"))));
        let renderer = Arc::new(MockRenderer::new(None));
        let state = app_state(drafter, renderer);

        let session = create_session(&state);
        assert_eq!(session.status, GenerationStatus::Idle);
        fill_scenario(&session.id, &state);

        let (submitted, task) =
            start_generation(&session.id, &SubmitSessionDto::default(), &state).unwrap();
        assert_eq!(submitted.status, GenerationStatus::Loading);

        task.await.unwrap();

        let session = get_session_by_id(&session.id, &state).unwrap();
        assert_eq!(session.status, GenerationStatus::Success);
        let result = session.result.unwrap();
        let kinds: Vec<ShotKind> = result.shots().map(|shot| shot.kind).collect();
        assert_eq!(kinds, ShotKind::ALL.to_vec());
        assert!(result.shots().all(|shot| !shot.prompt.is_empty()));
        assert!(result.shots().all(|shot| shot.has_image()));
    }

    #[tokio::test]
    async fn test_loading_is_visible_before_generation_resolves() {
        let gate = Arc::new(Notify::new());
        let drafter = Arc::new(MockDrafter::gated(Ok(prompts_json("neon")), gate.clone()));
        let state = app_state(drafter, Arc::new(MockRenderer::new(None)));
        let id = create_session(&state).id;
        fill_scenario(&id, &state);

        let (_, task) = start_generation(&id, &SubmitSessionDto::default(), &state).unwrap();

        assert_eq!(get_session_by_id(&id, &state).unwrap().status, GenerationStatus::Loading);

        gate.notify_one();
        task.await.unwrap();

        assert_eq!(get_session_by_id(&id, &state).unwrap().status, GenerationStatus::Success);
    }

    #[tokio::test]
    async fn test_missing_fields_never_reach_the_generator() {
        let drafter = Arc::new(MockDrafter::answering(Ok(prompts_json("neon"))));
        let state = app_state(drafter.clone(), Arc::new(MockRenderer::new(None)));
        let id = create_session(&state).id;
        update_attribute(&id, &dto("subject", "Woman, 25 years old"), &state).unwrap();
        update_attribute(&id, &dto("environment", "Tokyo"), &state).unwrap();

        let error = submit_session(&id, &SubmitSessionDto::default(), &state).unwrap_err();

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, MISSING_REQUIRED_FIELDS_MESSAGE);
        tokio::task::yield_now().await;
        assert_eq!(drafter.calls.load(Ordering::SeqCst), 0);

        let session = get_session_by_id(&id, &state).unwrap();
        assert_eq!(session.status, GenerationStatus::Idle);
        assert_eq!(session.error.as_deref(), Some(MISSING_REQUIRED_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn test_each_required_field_blocks_submit() {
        let required = [
            ("subject", "Woman, 25 years old"),
            ("clothing", "Cyberpunk tech-wear jacket"),
            ("environment", "Tokyo neon streets at night"),
        ];

        for (missing, _) in required {
            let drafter = Arc::new(MockDrafter::answering(Ok(prompts_json("neon"))));
            let state = app_state(drafter.clone(), Arc::new(MockRenderer::new(None)));
            let id = create_session(&state).id;
            for (field, value) in required.iter().filter(|(field, _)| *field != missing) {
                update_attribute(&id, &dto(field, value), &state).unwrap();
            }
            update_attribute(&id, &dto(missing, "   "), &state).unwrap();

            let error = submit_session(&id, &SubmitSessionDto::default(), &state).unwrap_err();

            assert_eq!(error.message, MISSING_REQUIRED_FIELDS_MESSAGE, "{} missing", missing);
            tokio::task::yield_now().await;
            assert_eq!(drafter.calls.load(Ordering::SeqCst), 0, "{} missing", missing);
            let session = get_session_by_id(&id, &state).unwrap();
            assert_eq!(session.status, GenerationStatus::Idle, "{} missing", missing);
        }
    }

    #[tokio::test]
    async fn test_schema_violation_ends_in_error_without_images() {
        let drafter = Arc::new(MockDrafter::answering(Ok(r#"{"fullBody": "only one"}"#.to_string())));
        let renderer = Arc::new(MockRenderer::new(None));
        let state = app_state(drafter, renderer.clone());
        let id = create_session(&state).id;
        fill_scenario(&id, &state);

        let (_, task) = start_generation(&id, &SubmitSessionDto::default(), &state).unwrap();
        task.await.unwrap();

        let session = get_session_by_id(&id, &state).unwrap();
        assert_eq!(session.status, GenerationStatus::Error);
        assert_eq!(session.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(session.result.is_none());
        assert_eq!(renderer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_one_failed_image_still_succeeds() {
        let drafter = Arc::new(MockDrafter::answering(Ok(prompts_json("neon"))));
        let renderer = Arc::new(MockRenderer::new(Some("from behind")));
        let state = app_state(drafter, renderer);
        let id = create_session(&state).id;
        fill_scenario(&id, &state);

        let (_, task) = start_generation(&id, &SubmitSessionDto::default(), &state).unwrap();
        task.await.unwrap();

        let session = get_session_by_id(&id, &state).unwrap();
        assert_eq!(session.status, GenerationStatus::Success);
        let result = session.result.unwrap();
        assert_eq!(result.shots().count(), 5);
        assert_eq!(result.shots().filter(|shot| shot.has_image()).count(), 4);
        assert!(!result.view_from_behind.has_image());
    }

    #[tokio::test]
    async fn test_prompts_mode_from_dto() {
        let drafter = Arc::new(MockDrafter::answering(Ok(prompts_json("neon"))));
        let renderer = Arc::new(MockRenderer::new(None));
        let state = app_state(drafter, renderer.clone());
        let id = create_session(&state).id;
        fill_scenario(&id, &state);
        let dto = SubmitSessionDto {
            mode: Some("prompts".to_string()),
        };

        let (_, task) = start_generation(&id, &dto, &state).unwrap();
        task.await.unwrap();

        let result = get_session_by_id(&id, &state).unwrap().result.unwrap();
        assert_eq!(result.mode, GenerationMode::Prompts);
        assert_eq!(renderer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_resubmit_aborts_previous_generation() {
        let gate = Arc::new(Notify::new());
        let drafter = Arc::new(MockDrafter::gated(Ok(prompts_json("neon")), gate.clone()));
        let state = app_state(drafter, Arc::new(MockRenderer::new(None)));
        let id = create_session(&state).id;
        fill_scenario(&id, &state);

        let (_, first) = start_generation(&id, &SubmitSessionDto::default(), &state).unwrap();
        let (_, second) = start_generation(&id, &SubmitSessionDto::default(), &state).unwrap();

        let first_outcome = first.await;
        assert!(first_outcome.unwrap_err().is_cancelled());

        gate.notify_one();
        second.await.unwrap();

        assert_eq!(get_session_by_id(&id, &state).unwrap().status, GenerationStatus::Success);
    }

    #[tokio::test]
    async fn test_task_superseded_before_tracking_is_aborted() {
        let drafter = Arc::new(MockDrafter::answering(Ok(prompts_json("neon"))));
        let state = app_state(drafter, Arc::new(MockRenderer::new(None)));
        let id = create_session(&state).id;
        fill_scenario(&id, &state);

        let first = state
            .sessions
            .update(&id, |session| session.begin_submit(GenerationMode::Images))
            .unwrap()
            .unwrap();
        let second = state
            .sessions
            .update(&id, |session| session.begin_submit(GenerationMode::Images))
            .unwrap()
            .unwrap();
        assert!(second.superseded.is_none());

        let stale = tokio::spawn(std::future::pending::<()>());
        assert!(!track_task(&id, &first.request_id, &stale, &state));
        assert!(stale.await.unwrap_err().is_cancelled());

        let current = tokio::spawn(std::future::pending::<()>());
        assert!(track_task(&id, &second.request_id, &current, &state));
        assert!(state.sessions.get(&id).unwrap().is_active_request(&second.request_id));

        reset_session(&id, &state).unwrap();
        assert!(current.await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_reset_after_success() {
        let drafter = Arc::new(MockDrafter::answering(Ok(prompts_json("neon"))));
        let state = app_state(drafter, Arc::new(MockRenderer::new(None)));
        let id = create_session(&state).id;
        fill_scenario(&id, &state);
        let (_, task) = start_generation(&id, &SubmitSessionDto::default(), &state).unwrap();
        task.await.unwrap();

        let session = reset_session(&id, &state).unwrap();

        assert_eq!(session.status, GenerationStatus::Idle);
        assert_eq!(session.attributes, AttributeSet::default());
        assert!(session.result.is_none());
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_generation() {
        let gate = Arc::new(Notify::new());
        let drafter = Arc::new(MockDrafter::gated(Ok(prompts_json("neon")), gate.clone()));
        let state = app_state(drafter, Arc::new(MockRenderer::new(None)));
        let id = create_session(&state).id;
        fill_scenario(&id, &state);
        let (_, task) = start_generation(&id, &SubmitSessionDto::default(), &state).unwrap();

        reset_session(&id, &state).unwrap();
        gate.notify_one();
        let _ = task.await;

        let session = get_session_by_id(&id, &state).unwrap();
        assert_eq!(session.status, GenerationStatus::Idle);
        assert!(session.result.is_none());
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let drafter = Arc::new(MockDrafter::answering(Ok(prompts_json("neon"))));
        let state = app_state(drafter, Arc::new(MockRenderer::new(None)));

        let error = submit_session("missing", &SubmitSessionDto::default(), &state).unwrap_err();
        assert_eq!(error.code, StatusCode::NOT_FOUND);

        let error = reset_session("missing", &state).unwrap_err();
        assert_eq!(error.code, StatusCode::NOT_FOUND);
    }
}
