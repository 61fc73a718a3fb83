//! Handlers for per-session context.
//!
//! The selected "current event" lives in the access token itself: selecting
//! an event issues a fresh token carrying the `current_event_id` claim.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use vowplan_core::error::CoreError;
use vowplan_core::types::DbId;
use vowplan_db::repositories::EventRepo;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectEventRequest {
    pub event_id: DbId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokenResponse {
    pub access_token: String,
    pub current_event_id: DbId,
    pub expires_in: i64,
}

/// POST /session/current-event
pub async fn select_current_event(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<SelectEventRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = body?;
    if !EventRepo::exists(&state.pool, body.event_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: body.event_id,
        }));
    }

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(auth.user_id, &auth.role, Some(body.event_id), jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(
        user_id = auth.user_id,
        event_id = body.event_id,
        "Current event selected"
    );

    Ok(Json(DataResponse {
        data: SessionTokenResponse {
            access_token,
            current_event_id: body.event_id,
            expires_in: jwt.access_token_expiry_mins * 60,
        },
    }))
}
