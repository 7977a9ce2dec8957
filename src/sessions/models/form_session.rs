use serde::Serialize;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::{
    app::util::time,
    attributes::{enums::attribute_field::AttributeField, models::attribute_set::AttributeSet},
    generations::{
        enums::{generation_mode::GenerationMode, generation_phase::GenerationPhase},
        errors::GenerationError,
        models::generation_result::GenerationResult,
    },
    sessions::{
        enums::generation_status::GenerationStatus,
        errors::{SessionsApiError, MISSING_REQUIRED_FIELDS_MESSAGE},
    },
};

#[derive(Debug, Clone)]
struct ActiveRequest {
    id: String,
    abort_handle: Option<AbortHandle>,
}

/// What a spawned generation needs, handed out by `begin_submit`.
#[derive(Debug)]
pub struct Submission {
    pub request_id: String,
    pub attributes: AttributeSet,
    pub mode: GenerationMode,
    /// The in flight generation this submission replaces.
    pub superseded: Option<AbortHandle>,
}

/// Server side state of one character form.
///
/// Only the generation whose request id is currently active may write its
/// outcome back; anything else is stale and gets dropped.
#[derive(Debug, Clone, Serialize)]
pub struct FormSession {
    pub id: String,
    pub attributes: AttributeSet,
    pub status: GenerationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    pub error: Option<String>,
    pub result: Option<GenerationResult>,
    pub created_at: u64,
    pub updated_at: u64,
    #[serde(skip)]
    active_request: Option<ActiveRequest>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        let now = time::current_time_in_secs();

        Self {
            id: Uuid::new_v4().to_string(),
            attributes: AttributeSet::default(),
            status: GenerationStatus::Idle,
            progress: None,
            error: None,
            result: None,
            created_at: now,
            updated_at: now,
            active_request: None,
        }
    }

    fn touch(&mut self) {
        self.updated_at = time::current_time_in_secs();
    }

    pub fn is_active_request(&self, request_id: &str) -> bool {
        self.active_request
            .as_ref()
            .map_or(false, |active| active.id == request_id)
    }

    pub fn update(&mut self, field: AttributeField, value: String) {
        self.attributes.set(field, value);
        self.touch();
    }

    pub fn begin_submit(&mut self, mode: GenerationMode) -> Result<Submission, SessionsApiError> {
        self.touch();

        if !self.attributes.missing_required().is_empty() {
            self.error = Some(MISSING_REQUIRED_FIELDS_MESSAGE.to_string());
            return Err(SessionsApiError::MissingRequiredFields);
        }

        let request_id = Uuid::new_v4().to_string();
        let superseded = self
            .active_request
            .replace(ActiveRequest {
                id: request_id.clone(),
                abort_handle: None,
            })
            .and_then(|previous| previous.abort_handle);

        self.status = GenerationStatus::Loading;
        self.result = None;
        self.error = None;
        self.progress = None;

        Ok(Submission {
            request_id,
            attributes: self.attributes.clone(),
            mode,
            superseded,
        })
    }

    /// Records the task running `request_id` so a later submit or reset can abort it.
    pub fn attach_task(&mut self, request_id: &str, abort_handle: AbortHandle) -> bool {
        match self.active_request.as_mut() {
            Some(active) if active.id == request_id => {
                active.abort_handle = Some(abort_handle);
                true
            }
            _ => false,
        }
    }

    pub fn set_progress(&mut self, request_id: &str, phase: GenerationPhase) -> bool {
        if !self.is_active_request(request_id) {
            return false;
        }

        self.progress = Some(phase.message().to_string());
        true
    }

    /// Stores the outcome of `request_id`. Returns false when the request is stale.
    pub fn complete(
        &mut self,
        request_id: &str,
        outcome: Result<GenerationResult, GenerationError>,
    ) -> bool {
        if !self.is_active_request(request_id) {
            return false;
        }

        self.active_request = None;
        self.progress = None;
        self.touch();

        match outcome {
            Ok(result) => {
                self.status = GenerationStatus::Success;
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.status = GenerationStatus::Error;
                self.result = None;
                self.error = Some(e.value().message);
            }
        }

        true
    }

    /// Takes the abort handle of the in flight generation, leaving none active.
    pub fn detach_task(&mut self) -> Option<AbortHandle> {
        self.active_request
            .take()
            .and_then(|active| active.abort_handle)
    }

    pub fn reset(&mut self) -> Option<AbortHandle> {
        let in_flight = self.detach_task();

        self.attributes = AttributeSet::default();
        self.status = GenerationStatus::Idle;
        self.progress = None;
        self.error = None;
        self.result = None;
        self.touch();

        in_flight
    }
}
