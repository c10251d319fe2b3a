use axum::response::Json;
use serde_json::{Value, json};

use crate::session::AuthSession;

pub async fn me(auth: AuthSession) -> Json<Value> {
    Json(json!({ "userId": auth.user_id }))
}
