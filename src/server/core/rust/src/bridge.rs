/* src/server/core/rust/src/bridge.rs */

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::app_config::AppConfig;
use crate::ast::AstDocument;
use crate::errors::BridgeError;
use crate::protocol::{
  ComponentSpecPayload, ConnectionAck, MessageType, Outbound, OutboundEnvelope, SUPPORTED_FEATURES,
  now_iso, parse_envelope,
};
use crate::session::{SessionId, SessionSink, SessionTable};
use crate::translate::Translator;

/// Writes editable source files for a screen. Runs after the live
/// broadcast; a failure never cancels it.
pub trait SourceGenerator: Send + Sync {
  fn generate(&self, document: &AstDocument) -> Result<(), BridgeError>;
}

/// File generation owed for one broadcast screen. Running it blocks on
/// file-system writes, so the dispatch loop moves it to the blocking pool.
pub struct GenerationJob {
  session: SessionId,
  document: AstDocument,
  generator: Arc<dyn SourceGenerator>,
}

impl GenerationJob {
  pub fn screen_id(&self) -> &str {
    &self.document.screen_id
  }

  pub fn run(self) -> GenerationOutcome {
    let result = self.generator.generate(&self.document);
    GenerationOutcome { session: self.session, screen_id: self.document.screen_id, result }
  }
}

/// Result of a [`GenerationJob`], handed back to [`Bridge::finish_generation`].
pub struct GenerationOutcome {
  session: SessionId,
  screen_id: String,
  result: Result<(), BridgeError>,
}

/// Transport events fed into the dispatch loop.
#[derive(Debug)]
pub enum BridgeEvent {
  Open { session: SessionId, sink: SessionSink },
  Message { session: SessionId, text: String },
  Close { session: SessionId },
}

/// Dispatch context owning the live sessions and the current app
/// configuration. Mutated only by the single dispatch loop.
pub struct Bridge {
  sessions: SessionTable,
  current_config: Option<AppConfig>,
  translator: Translator,
  generator: Option<Arc<dyn SourceGenerator>>,
}

impl Bridge {
  pub fn new(translator: Translator) -> Self {
    Self { sessions: SessionTable::new(), current_config: None, translator, generator: None }
  }

  pub fn with_generator(mut self, generator: Arc<dyn SourceGenerator>) -> Self {
    self.generator = Some(generator);
    self
  }

  pub fn current_config(&self) -> Option<&AppConfig> {
    self.current_config.as_ref()
  }

  pub fn session_count(&self) -> usize {
    self.sessions.len()
  }

  /// Handle one event to completion, generating sources inline.
  pub fn dispatch(&mut self, event: BridgeEvent) {
    if let Some(job) = self.accept(event) {
      let outcome = job.run();
      self.finish_generation(outcome);
    }
  }

  /// Handle one event up to, but not including, source generation.
  pub fn accept(&mut self, event: BridgeEvent) -> Option<GenerationJob> {
    match event {
      BridgeEvent::Open { session, sink } => {
        self.open(session, sink);
        None
      }
      BridgeEvent::Message { session, text } => self.handle_message(&session, &text),
      BridgeEvent::Close { session } => {
        self.close(&session);
        None
      }
    }
  }

  /// Report a failed generation to the session whose update caused it.
  pub fn finish_generation(&mut self, outcome: GenerationOutcome) {
    if let Err(err) = outcome.result {
      error!(screen = %outcome.screen_id, error = %err, "source generation failed");
      self.reply_error(&outcome.session, &err);
    }
  }

  /// Register a session and send it the connection acknowledgment.
  pub fn open(&mut self, session: SessionId, sink: SessionSink) {
    info!(session = %session, "viewer connected");
    let ack = Outbound::ConnectionAck(ConnectionAck {
      session_id: session.to_string(),
      supported_features: SUPPORTED_FEATURES.iter().map(|f| (*f).to_string()).collect(),
    });
    self.sessions.insert(session.clone(), sink);
    self.reply(&session, &OutboundEnvelope::new(ack));
  }

  pub fn close(&mut self, session: &SessionId) {
    if self.sessions.remove(session) {
      info!(session = %session, "viewer disconnected");
    }
  }

  pub fn handle_message(&mut self, from: &SessionId, text: &str) -> Option<GenerationJob> {
    let envelope = match parse_envelope(text) {
      Ok(envelope) => envelope,
      Err(err) => {
        warn!(session = %from, error = %err, "failed to parse inbound message");
        self.reply_error(from, &err);
        return None;
      }
    };
    debug!(session = %from, kind = %envelope.kind, "received message");

    match envelope.message_type() {
      Some(MessageType::AppConfig) => self.on_app_config(from, envelope.data),
      Some(MessageType::UiUpdate) => return self.on_ui_update(from, envelope.data),
      Some(MessageType::Ping) => self.reply(from, &OutboundEnvelope::new(Outbound::Pong)),
      _ => debug!(kind = %envelope.kind, "unhandled message type"),
    }
    None
  }

  fn on_app_config(&mut self, from: &SessionId, data: Value) {
    let config: AppConfig = match serde_json::from_value(data) {
      Ok(config) => config,
      Err(e) => {
        let err = BridgeError::config(format!("Failed to process app configuration: {e}"));
        warn!(session = %from, error = %err, "rejected app configuration");
        self.reply_error(from, &err);
        return;
      }
    };
    info!(title = %config.title, routes = config.routes.len(), "app configuration updated");
    self.current_config = Some(config.clone());
    let envelope = OutboundEnvelope::new(Outbound::AppConfig(config)).with_session(from.as_str());
    self.broadcast(&envelope);
  }

  fn on_ui_update(&mut self, from: &SessionId, data: Value) -> Option<GenerationJob> {
    let document: AstDocument = match serde_json::from_value(data) {
      Ok(document) => document,
      Err(e) => {
        let err = BridgeError::translation(format!("Failed to translate UI AST: {e}"));
        warn!(session = %from, error = %err, "rejected UI update");
        self.reply_error(from, &err);
        return None;
      }
    };

    let translation = self.translator.translate_node(&document.tree);
    if !translation.unmapped.is_empty() {
      info!(
        screen = %document.screen_id,
        unmapped = ?translation.unmapped,
        "translated with fallback containers"
      );
    }
    let payload = ComponentSpecPayload {
      screen_id: document.screen_id.clone(),
      route: document.route.clone(),
      language: document.language.clone(),
      components: translation.root,
      timestamp: now_iso(),
      app_config: self.current_config.clone(),
    };
    let envelope =
      OutboundEnvelope::new(Outbound::ComponentSpec(payload)).with_session(from.as_str());
    let delivered = self.broadcast(&envelope);
    info!(
      screen = %document.screen_id,
      route = %document.route,
      delivered,
      "component spec broadcast"
    );

    let generator = self.generator.clone()?;
    Some(GenerationJob { session: from.clone(), document, generator })
  }

  fn broadcast(&mut self, envelope: &OutboundEnvelope) -> usize {
    let Some(frame) = envelope.to_json() else {
      return 0;
    };
    self.sessions.broadcast(&frame)
  }

  fn reply(&mut self, to: &SessionId, envelope: &OutboundEnvelope) {
    let Some(frame) = envelope.to_json() else {
      return;
    };
    if !self.sessions.send_to(to, frame) {
      debug!(session = %to, "reply dropped, session closed");
    }
  }

  fn reply_error(&mut self, to: &SessionId, err: &BridgeError) {
    self.reply(to, &OutboundEnvelope::error(err));
  }
}

impl Default for Bridge {
  fn default() -> Self {
    Self::new(Translator::default())
  }
}
