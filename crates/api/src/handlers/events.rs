//! Handlers for wedding event management.
//!
//! Creating, listing and deleting events, plus read access to the child
//! collections the setup wizard writes (ceremonies, hotels, transport groups).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vowplan_core::error::CoreError;
use vowplan_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use vowplan_core::types::DbId;
use vowplan_core::wedding_event::validate_new_event;
use vowplan_db::models::event::CreateEvent;
use vowplan_db::repositories::{CeremonyRepo, EventRepo, HotelRepo, TransportGroupRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Pagination parameters for listing events.
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn event_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Event", id })
}

async fn ensure_event_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if EventRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(event_not_found(id))
    }
}

// ---------------------------------------------------------------------------
// POST /events
// ---------------------------------------------------------------------------

pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<CreateEvent>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = body?;
    validate_new_event(&body.title, body.start_date, body.end_date)?;

    let event = EventRepo::create(&state.pool, &body).await?;

    tracing::info!(event_id = event.id, user_id = auth.user_id, "Event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

// ---------------------------------------------------------------------------
// GET /events
// ---------------------------------------------------------------------------

pub async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ListEventsParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let events = EventRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// GET /events/{id}
// ---------------------------------------------------------------------------

pub async fn get_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    Ok(Json(DataResponse { data: event }))
}

// ---------------------------------------------------------------------------
// DELETE /events/{id}
// ---------------------------------------------------------------------------

/// Delete an event together with its progress record and child rows.
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !EventRepo::delete(&state.pool, id).await? {
        return Err(event_not_found(id));
    }

    tracing::info!(event_id = id, user_id = auth.user_id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Child collections
// ---------------------------------------------------------------------------

/// GET /events/{id}/ceremonies
pub async fn list_ceremonies(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state.pool, id).await?;
    let ceremonies = CeremonyRepo::list_by_event(&state.pool, id).await?;
    Ok(Json(DataResponse { data: ceremonies }))
}

/// GET /events/{id}/hotels -- each hotel with its room types.
pub async fn list_hotels(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state.pool, id).await?;
    let hotels = HotelRepo::list_by_event(&state.pool, id).await?;
    Ok(Json(DataResponse { data: hotels }))
}

/// GET /events/{id}/transport-groups
pub async fn list_transport_groups(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_event_exists(&state.pool, id).await?;
    let groups = TransportGroupRepo::list_by_event(&state.pool, id).await?;
    Ok(Json(DataResponse { data: groups }))
}
