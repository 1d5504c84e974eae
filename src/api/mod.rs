mod handlers;
mod models;

use axum::Router;

use crate::AppState;

pub use handlers::{dispatch, handle_event, relay};
pub use models::{AskResponse, ErrorResponse, Event, HelpResponse, Usage};

/// Every path is meaningful to the path router, so it is mounted as the fallback.
pub fn router(state: AppState) -> Router {
    Router::new().fallback(relay).with_state(state)
}
