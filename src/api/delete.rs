use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::{
    management::delete::{SpotifyRemover, execute},
    session::AuthSession,
    types::{DeleteReport, DeleteRequest},
};

/// Bulk delete endpoint.
///
/// Runs the request to completion regardless of individual failures and
/// answers 200 on full success or 207 with the itemized failure list.
pub async fn delete_items(auth: AuthSession, Json(request): Json<DeleteRequest>) -> Response {
    let remover = SpotifyRemover {
        token: auth.access_token(),
    };
    let report = execute(&remover, &request).await;

    let (status, body) = report_payload(&report);
    (status, Json(body)).into_response()
}

/// Maps a delete report onto the HTTP answer: 200 for full success, 207
/// Multi-Status with the error list otherwise.
pub fn report_payload(report: &DeleteReport) -> (StatusCode, Value) {
    if report.is_full_success() {
        (
            StatusCode::OK,
            json!({ "message": "All items deleted successfully" }),
        )
    } else {
        (
            StatusCode::MULTI_STATUS,
            json!({ "message": "Partial success", "errors": report.errors }),
        )
    }
}
