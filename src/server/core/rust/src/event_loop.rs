/* src/server/core/rust/src/event_loop.rs */

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::bridge::{Bridge, BridgeEvent};
use crate::session::{SessionId, SessionSink};

/// Cloneable entry point for transport tasks. All events funnel into one
/// task that owns the [`Bridge`], so no two messages are handled at once.
#[derive(Debug, Clone)]
pub struct BridgeHandle {
  tx: mpsc::UnboundedSender<BridgeEvent>,
}

impl BridgeHandle {
  /// Register a new connection; the acknowledgment arrives on `sink`.
  pub fn open(&self, sink: SessionSink) -> SessionId {
    let session = SessionId::generate();
    self.send(BridgeEvent::Open { session: session.clone(), sink });
    session
  }

  pub fn message(&self, session: &SessionId, text: String) {
    self.send(BridgeEvent::Message { session: session.clone(), text });
  }

  pub fn close(&self, session: &SessionId) {
    self.send(BridgeEvent::Close { session: session.clone() });
  }

  fn send(&self, event: BridgeEvent) {
    if self.tx.send(event).is_err() {
      debug!("dispatch loop has stopped, event dropped");
    }
  }
}

/// Start the dispatch loop. It ends once every handle is dropped and
/// yields the bridge back. Source generation runs on the blocking pool and
/// finishes before the next event is handled.
pub fn spawn(bridge: Bridge) -> (BridgeHandle, JoinHandle<Bridge>) {
  let (tx, rx) = mpsc::unbounded_channel();
  let task = tokio::spawn(run(bridge, rx));
  (BridgeHandle { tx }, task)
}

async fn run(mut bridge: Bridge, mut rx: mpsc::UnboundedReceiver<BridgeEvent>) -> Bridge {
  while let Some(event) = rx.recv().await {
    let Some(job) = bridge.accept(event) else {
      continue;
    };
    let screen = job.screen_id().to_owned();
    match tokio::task::spawn_blocking(move || job.run()).await {
      Ok(outcome) => bridge.finish_generation(outcome),
      Err(e) => error!(%screen, error = %e, "source generation task aborted"),
    }
  }
  bridge
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};
  use std::thread::{self, ThreadId};

  use serde_json::Value;

  use super::*;
  use crate::ast::AstDocument;
  use crate::bridge::SourceGenerator;
  use crate::errors::BridgeError;

  /// Records the thread each generation ran on, then fails.
  #[derive(Default)]
  struct ThreadRecorder {
    threads: Mutex<Vec<ThreadId>>,
  }

  impl SourceGenerator for ThreadRecorder {
    fn generate(&self, _document: &AstDocument) -> Result<(), BridgeError> {
      self.threads.lock().unwrap().push(thread::current().id());
      Err(BridgeError::generation("read-only output"))
    }
  }

  async fn recv_json(rx: &mut mpsc::UnboundedReceiver<String>) -> Value {
    let frame = rx.recv().await.unwrap();
    serde_json::from_str(&frame).unwrap()
  }

  #[tokio::test]
  async fn events_flow_through_the_loop() {
    let (handle, task) = spawn(Bridge::default());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let session = handle.open(tx);

    let ack = recv_json(&mut rx).await;
    assert_eq!(ack["type"], "CONNECTION_ACK");
    assert_eq!(ack["data"]["sessionId"], session.as_str());

    handle.message(&session, r#"{"type":"PING"}"#.to_string());
    assert_eq!(recv_json(&mut rx).await["type"], "PONG");

    handle.close(&session);
    drop(handle);
    let bridge = task.await.unwrap();
    assert_eq!(bridge.session_count(), 0);
  }

  #[tokio::test]
  async fn config_survives_across_messages() {
    let (handle, task) = spawn(Bridge::default());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let session = handle.open(tx);
    recv_json(&mut rx).await;

    handle.message(&session, r#"{"type":"APP_CONFIG","data":{"title":"Demo"}}"#.to_string());
    assert_eq!(recv_json(&mut rx).await["data"]["title"], "Demo");

    drop(handle);
    let bridge = task.await.unwrap();
    assert_eq!(bridge.current_config().map(|c| c.title.as_str()), Some("Demo"));
  }

  #[tokio::test]
  async fn generation_runs_off_the_dispatch_thread() {
    let generator = Arc::new(ThreadRecorder::default());
    let (handle, task) = spawn(Bridge::default().with_generator(generator.clone()));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let session = handle.open(tx);
    recv_json(&mut rx).await;

    let update = r#"{"type":"UI_UPDATE","data":{"screenId":"home","route":"/",
      "tree":{"type":"Text","props":{},"text":"Hi"}}}"#;
    handle.message(&session, update.to_string());
    handle.message(&session, r#"{"type":"PING"}"#.to_string());

    assert_eq!(recv_json(&mut rx).await["type"], "COMPONENT_SPEC");
    assert_eq!(recv_json(&mut rx).await["data"]["code"], "GENERATION_ERROR");
    assert_eq!(recv_json(&mut rx).await["type"], "PONG");

    drop(handle);
    task.await.unwrap();
    let threads = generator.threads.lock().unwrap();
    assert_eq!(threads.len(), 1);
    assert_ne!(threads[0], thread::current().id());
  }
}
