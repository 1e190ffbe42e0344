/* src/server/adapter/axum/src/handler/socket.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use flutterexpo_server::BridgeHandle;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::AppState;

pub(super) async fn handle_upgrade(
  ws: WebSocketUpgrade,
  State(state): State<Arc<AppState>>,
) -> Response {
  let handle = state.handle.clone();
  ws.on_upgrade(move |socket| run_session(handle, socket))
}

/// Pump one connection: inbound text and binary frames go to the dispatch
/// loop, the session's outbound queue drains into the socket. Binary payloads
/// are read as UTF-8; invalid bytes become U+FFFD and fail to parse.
async fn run_session(handle: BridgeHandle, socket: WebSocket) {
  let (mut ws_sender, mut ws_receiver) = socket.split();
  let (tx, mut rx) = mpsc::unbounded_channel::<String>();
  let session = handle.open(tx);

  loop {
    tokio::select! {
      msg = ws_receiver.next() => {
        match msg {
          Some(Ok(Message::Text(text))) => handle.message(&session, text.as_str().to_owned()),
          Some(Ok(Message::Binary(bytes))) => {
            handle.message(&session, String::from_utf8_lossy(&bytes).into_owned());
          }
          Some(Ok(Message::Close(_))) | None => break,
          Some(Ok(_)) => continue,
          Some(Err(e)) => {
            warn!(%session, error = %e, "websocket error");
            break;
          }
        }
      }
      frame = rx.recv() => {
        let Some(frame) = frame else { break };
        if ws_sender.send(Message::Text(frame.into())).await.is_err() {
          debug!(%session, "peer went away mid-send");
          break;
        }
      }
    }
  }

  handle.close(&session);
  let _ = ws_sender.close().await;
}
