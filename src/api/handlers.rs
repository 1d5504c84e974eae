use axum::{extract::State, http::StatusCode, http::Uri};
use tracing::debug;

use crate::envelope::Envelope;
use crate::provider::Adapter;
use crate::route::Route;
use crate::AppState;

use super::models::{AskResponse, ErrorResponse, Event, HelpResponse};

/// Route one request path to its terminal response. Never fails.
pub async fn dispatch(state: &AppState, path: &str) -> Envelope {
    match Route::parse(path) {
        Route::Home => {
            debug!("serving help");
            Envelope::ok(&HelpResponse::new())
        }
        Route::MissingQuestion => {
            debug!(path, "missing question");
            Envelope::json(&ErrorResponse::MISSING_QUESTION, StatusCode::BAD_REQUEST)
        }
        Route::InvalidRoute => {
            debug!(path, "invalid route");
            Envelope::json(&ErrorResponse::INVALID_ROUTE, StatusCode::NOT_FOUND)
        }
        Route::Ask { model, question } => {
            debug!(%model, "forwarding question");
            let answer = state.adapter(model).answer(&question).await;
            Envelope::ok(&AskResponse {
                model,
                question,
                answer,
            })
        }
    }
}

/// Entry point for function runtimes that hand over a decoded event.
pub async fn handle_event(state: &AppState, event: &Event) -> Envelope {
    if let Some(method) = event.http_method.as_deref() {
        debug!(method, "handling event");
    }
    dispatch(state, &event.path).await
}

/// Fallback handler: every method and path goes through the path router.
pub async fn relay(State(state): State<AppState>, uri: Uri) -> Envelope {
    dispatch(&state, uri.path()).await
}
