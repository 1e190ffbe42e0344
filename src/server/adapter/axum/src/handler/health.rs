/* src/server/adapter/axum/src/handler/health.rs */

use axum::Json;
use flutterexpo_server::protocol::now_iso;

pub(super) async fn handle_health() -> Json<serde_json::Value> {
  Json(serde_json::json!({ "status": "ok", "timestamp": now_iso() }))
}
