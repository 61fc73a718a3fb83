pub mod events;
pub mod health;
pub mod session;
pub mod setup_wizard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every route requires a Bearer token.
///
/// ```text
/// /events                                  list, create
/// /events/{id}                             get, delete
/// /events/{id}/ceremonies                  list
/// /events/{id}/hotels                      list (with room types)
/// /events/{id}/transport-groups            list
///
/// /session/current-event                   select current event (POST)
///
/// /wizard/{event_id}/progress              progress overview
/// /wizard/{event_id}/steps/{step_id}       get, save (POST), reset (DELETE)
/// /wizard/transport                        save transport for current event (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/session", session::router())
        .nest("/wizard", setup_wizard::router())
}
