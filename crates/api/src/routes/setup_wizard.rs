//! Route definitions for the event setup wizard.
//!
//! Mounted at `/wizard` by `api_routes()`.
//!
//! ```text
//! GET    /{event_id}/progress               get_progress
//! GET    /{event_id}/steps/{step_id}        get_step
//! POST   /{event_id}/steps/{step_id}        save_step
//! DELETE /{event_id}/steps/{step_id}        reset_step
//! POST   /transport                         save_transport_for_current_event
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::setup_wizard;
use crate::state::AppState;

/// Setup wizard routes -- mounted at `/wizard`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/transport",
            post(setup_wizard::save_transport_for_current_event),
        )
        .route("/{event_id}/progress", get(setup_wizard::get_progress))
        .route(
            "/{event_id}/steps/{step_id}",
            get(setup_wizard::get_step)
                .post(setup_wizard::save_step)
                .delete(setup_wizard::reset_step),
        )
}
