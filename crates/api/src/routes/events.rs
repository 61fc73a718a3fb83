//! Route definitions for wedding events.
//!
//! Mounted at `/events` by `api_routes()`.
//!
//! ```text
//! POST   /                          create_event
//! GET    /                          list_events (?limit, offset)
//! GET    /{id}                      get_event
//! DELETE /{id}                      delete_event
//! GET    /{id}/ceremonies           list_ceremonies
//! GET    /{id}/hotels               list_hotels
//! GET    /{id}/transport-groups     list_transport_groups
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Event routes -- mounted at `/events`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/{id}", get(events::get_event).delete(events::delete_event))
        .route("/{id}/ceremonies", get(events::list_ceremonies))
        .route("/{id}/hotels", get(events::list_hotels))
        .route("/{id}/transport-groups", get(events::list_transport_groups))
}
