// POST /api/message handler

use serde_json::{json, Value};
use std::convert::Infallible;
use tracing::{error, info, Instrument};
use uuid::Uuid;
use warp::http::StatusCode;

use super::AppState;
use crate::assistant::AssistantRequest;
use crate::models::MessageRequest;

/// Returned (with 200) when no workspace id is configured
pub const NOT_CONFIGURED_TEXT: &str = "The app has not been configured with a <b>WORKSPACE_ID</b> environment variable. Please refer to the <a href=\"https://github.com/watson-developer-cloud/assistant-simple\">README</a> documentation on how to set this variable. <br>Once a workspace has been defined the intents may be imported from <a href=\"https://github.com/watson-developer-cloud/assistant-simple/blob/master/training/car_workspace.json\">here</a> in order to get a working application.";

/// Forward one turn to the assistant and format its answer
pub async fn process_message(state: &AppState, request: MessageRequest) -> (StatusCode, Value) {
    let workspace_id = match &state.config.assistant.workspace_id {
        Some(id) => id.clone(),
        None => {
            info!("No workspace configured");
            return (
                StatusCode::OK,
                json!({ "output": { "text": NOT_CONFIGURED_TEXT } }),
            );
        }
    };

    let payload = AssistantRequest::from_message(workspace_id, request);

    let result = match state.assistant.message(payload).await {
        Ok(result) => result,
        Err(e) => {
            error!(error = %e, "Assistant request failed");
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, e.to_body());
        }
    };

    let formatted = state.formatter.format(result).await;
    match serde_json::to_value(&formatted) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => {
            error!(error = %e, "Failed to serialize response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "code": 500, "error": e.to_string() }),
            )
        }
    }
}

pub async fn message_handler(
    request: MessageRequest,
    state: AppState,
) -> Result<impl warp::Reply, Infallible> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("message", %request_id);

    let (status, body) = process_message(&state, request).instrument(span.clone()).await;
    span.in_scope(|| info!(status = status.as_u16(), "POST /api/message"));

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}
