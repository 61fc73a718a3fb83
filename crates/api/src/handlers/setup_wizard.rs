//! Handlers for the event setup wizard.
//!
//! Read and write the per-event progress record and dispatch step saves to
//! [`crate::step_persistence`]. Event ids arrive as raw path segments so a
//! non-numeric id gets the same JSON error body as every other failure.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use vowplan_core::error::CoreError;
use vowplan_core::setup_wizard::WizardStep;
use vowplan_core::types::{DbId, Timestamp};
use vowplan_db::models::event::Event;
use vowplan_db::repositories::{EventRepo, SetupProgressRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, CurrentEvent};
use crate::response::{ActionResponse, DataResponse};
use crate::state::AppState;
use crate::step_persistence;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    pub is_completed: bool,
}

/// Progress overview over the eight recognized steps, in wizard order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub event_id: DbId,
    pub current_step: WizardStep,
    pub completed_at: Option<Timestamp>,
    pub steps: IndexMap<WizardStep, StepStatus>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub step_id: WizardStep,
    pub is_completed: bool,
    pub last_updated: Timestamp,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_event_id(raw: &str) -> AppResult<DbId> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid event ID".into()))
}

/// A request without a body reads as `null`, which records the step
/// without writing step data.
fn body_or_null(body: Result<Option<Json<Value>>, JsonRejection>) -> AppResult<Value> {
    Ok(body?.map(|Json(value)| value).unwrap_or(Value::Null))
}

/// Load an event, failing with 404 if it does not exist.
async fn ensure_event_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Event> {
    EventRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))
}

// ---------------------------------------------------------------------------
// GET /wizard/{event_id}/progress
// ---------------------------------------------------------------------------

/// Return the event's progress, creating the default record on first read.
pub async fn get_progress(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(event_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event_id = parse_event_id(&event_id)?;
    ensure_event_exists(&state.pool, event_id).await?;

    let progress = SetupProgressRepo::get_or_create(&state.pool, event_id).await?;
    let steps = progress
        .flags()
        .completion()
        .into_iter()
        .map(|(step, is_completed)| (step, StepStatus { is_completed }))
        .collect();

    tracing::debug!(event_id, current_step = %progress.current_step, "Loaded setup progress");

    Ok(Json(DataResponse {
        data: ProgressResponse {
            event_id,
            current_step: progress.current_step(),
            completed_at: progress.completed_at,
            steps,
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /wizard/{event_id}/steps/{step_id}
// ---------------------------------------------------------------------------

/// Return completion state of a single recognized step.
///
/// Unknown step ids are reported as 404 on this endpoint.
pub async fn get_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((event_id, step_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let event_id = parse_event_id(&event_id)?;
    let step = WizardStep::parse_recognized(&step_id)
        .map_err(|_| AppError::NotFound(format!("Step '{step_id}' not found")))?;
    ensure_event_exists(&state.pool, event_id).await?;

    let progress = SetupProgressRepo::find_by_event(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SetupProgress",
            id: event_id,
        }))?;

    Ok(Json(DataResponse {
        data: StepResponse {
            step_id: step,
            is_completed: progress.flags().is_step_complete(step),
            last_updated: progress.updated_at,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /wizard/{event_id}/steps/{step_id}
// ---------------------------------------------------------------------------

/// Save a step's data and mark it in the progress record.
pub async fn save_step(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((event_id, step_id)): Path<(String, String)>,
    body: Result<Option<Json<Value>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let event_id = parse_event_id(&event_id)?;
    let step = WizardStep::parse(&step_id)?;
    let body = body_or_null(body)?;
    let event = ensure_event_exists(&state.pool, event_id).await?;

    step_persistence::save_step(&state.pool, &event, step, &body).await?;

    tracing::debug!(event_id, %step, user_id = auth.user_id, "Step save acknowledged");

    Ok(Json(DataResponse {
        data: ActionResponse::ok("Step data saved successfully"),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /wizard/{event_id}/steps/{step_id}
// ---------------------------------------------------------------------------

/// Mark a step incomplete again and clear the completion timestamp.
pub async fn reset_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((event_id, step_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let event_id = parse_event_id(&event_id)?;
    let step = WizardStep::parse_recognized(&step_id)?;
    ensure_event_exists(&state.pool, event_id).await?;

    SetupProgressRepo::reset_step(&state.pool, event_id, step)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SetupProgress",
            id: event_id,
        }))?;

    tracing::info!(event_id, %step, "Setup step reset");

    Ok(Json(DataResponse {
        data: ActionResponse::ok("Step data reset successfully"),
    }))
}

// ---------------------------------------------------------------------------
// POST /wizard/transport
// ---------------------------------------------------------------------------

/// Save transport settings for the caller's selected event.
pub async fn save_transport_for_current_event(
    State(state): State<AppState>,
    current: CurrentEvent,
    body: Result<Option<Json<Value>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = body_or_null(body)?;
    let event = ensure_event_exists(&state.pool, current.event_id).await?;

    step_persistence::save_step(&state.pool, &event, WizardStep::Transport, &body).await?;

    tracing::debug!(
        event_id = event.id,
        user_id = current.user_id,
        "Transport saved for current event"
    );

    Ok(Json(DataResponse {
        data: ActionResponse::ok("Transport settings saved successfully"),
    }))
}
