//! Update-website endpoint handler.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::DEFAULT_SUCCESS_MESSAGE;

/// Body of an update request as the mock service reads it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsiteBody {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub updates: Map<String, Value>,
    #[serde(default)]
    pub send_notification: bool,
}

/// PUT /api/update-website
pub async fn update_website(
    State(state): State<Arc<RwLock<MockState>>>,
    Json(body): Json<UpdateWebsiteBody>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    state.update_requests += 1;

    if let Some(status) = state.forced_status {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return status.into_response();
    }

    let website_id = match body.identifier.filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "websiteId is required" })),
            )
                .into_response()
        }
    };

    let updated_at = chrono::Utc::now().to_rfc3339();
    let website = match state.update_website(&website_id, &body.updates, &updated_at) {
        Some(website) => website.clone(),
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Website not found" })),
            )
                .into_response()
        }
    };

    if body.send_notification {
        state.notify(&website_id, &body.updates);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": DEFAULT_SUCCESS_MESSAGE,
            "websiteId": website_id,
            "website": website,
        })),
    )
        .into_response()
}
