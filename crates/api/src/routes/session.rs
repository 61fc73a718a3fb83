//! Route definitions for session context. Mounted at `/session`.

use axum::routing::post;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/current-event", post(session::select_current_event))
}
