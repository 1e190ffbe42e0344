/* src/server/adapter/axum/src/handler/mod.rs */

mod health;
mod socket;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use flutterexpo_server::BridgeHandle;

pub(crate) struct AppState {
  pub handle: BridgeHandle,
}

pub(crate) fn build_router(handle: BridgeHandle) -> Router {
  let state = Arc::new(AppState { handle });
  Router::new()
    .route("/", get(socket::handle_upgrade))
    .route("/ws", get(socket::handle_upgrade))
    .route("/health", get(health::handle_health))
    .with_state(state)
}
