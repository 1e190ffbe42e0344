/* src/server/core/rust/src/protocol.rs */

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::app_config::AppConfig;
use crate::errors::BridgeError;
use crate::translate::ComponentSpec;

pub const SUPPORTED_FEATURES: &[&str] = &["ui-translation", "real-time-updates", "multi-language"];

/// Every message type name that appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
  AppConfig,
  UiUpdate,
  StateDelta,
  Event,
  ComponentSpec,
  ConnectionAck,
  Error,
  Ping,
  Pong,
}

impl MessageType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::AppConfig => "APP_CONFIG",
      Self::UiUpdate => "UI_UPDATE",
      Self::StateDelta => "STATE_DELTA",
      Self::Event => "EVENT",
      Self::ComponentSpec => "COMPONENT_SPEC",
      Self::ConnectionAck => "CONNECTION_ACK",
      Self::Error => "ERROR",
      Self::Ping => "PING",
      Self::Pong => "PONG",
    }
  }

  pub fn parse(name: &str) -> Option<Self> {
    let kind = match name {
      "APP_CONFIG" => Self::AppConfig,
      "UI_UPDATE" => Self::UiUpdate,
      "STATE_DELTA" => Self::StateDelta,
      "EVENT" => Self::Event,
      "COMPONENT_SPEC" => Self::ComponentSpec,
      "CONNECTION_ACK" => Self::ConnectionAck,
      "ERROR" => Self::Error,
      "PING" => Self::Ping,
      "PONG" => Self::Pong,
      _ => return None,
    };
    Some(kind)
  }
}

/// Inbound frame. Only `type` is required; the payload stays raw until
/// the dispatcher knows which shape to expect.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEnvelope {
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub timestamp: Option<String>,
  #[serde(default)]
  pub session_id: Option<String>,
  #[serde(default)]
  pub data: Value,
}

impl InboundEnvelope {
  pub fn message_type(&self) -> Option<MessageType> {
    MessageType::parse(&self.kind)
  }
}

pub fn parse_envelope(text: &str) -> Result<InboundEnvelope, BridgeError> {
  serde_json::from_str(text).map_err(|e| BridgeError::parse(format!("Invalid JSON message: {e}")))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpecPayload {
  pub screen_id: String,
  pub route: String,
  pub language: String,
  pub components: ComponentSpec,
  pub timestamp: String,
  pub app_config: Option<AppConfig>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionAck {
  pub session_id: String,
  pub supported_features: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
  pub code: String,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<Value>,
}

impl From<&BridgeError> for ErrorPayload {
  fn from(err: &BridgeError) -> Self {
    Self { code: err.code().to_string(), message: err.message().to_string(), details: None }
  }
}

/// Messages this service sends; serialized as `{"type": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outbound {
  AppConfig(AppConfig),
  ComponentSpec(ComponentSpecPayload),
  ConnectionAck(ConnectionAck),
  Error(ErrorPayload),
  Pong,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEnvelope {
  #[serde(flatten)]
  pub message: Outbound,
  pub timestamp: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub session_id: Option<String>,
}

impl OutboundEnvelope {
  pub fn new(message: Outbound) -> Self {
    Self { message, timestamp: now_iso(), session_id: None }
  }

  pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
    self.session_id = Some(session_id.into());
    self
  }

  pub fn error(err: &BridgeError) -> Self {
    Self::new(Outbound::Error(err.into()))
  }

  /// `None` when the envelope cannot be encoded; nothing should be sent then.
  pub fn to_json(&self) -> Option<String> {
    encode_frame(self)
  }
}

/// Serialize one outbound frame, logging instead of yielding an empty frame.
pub fn encode_frame<T: Serialize>(message: &T) -> Option<String> {
  match serde_json::to_string(message) {
    Ok(frame) => Some(frame),
    Err(e) => {
      error!(error = %e, "failed to encode outbound frame, not sent");
      None
    }
  }
}

/// RFC 3339 UTC timestamp with millisecond precision.
pub fn now_iso() -> String {
  Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn to_value(envelope: &OutboundEnvelope) -> Value {
    serde_json::from_str(&envelope.to_json().unwrap()).unwrap()
  }

  #[test]
  fn message_type_names() {
    for kind in [
      MessageType::AppConfig,
      MessageType::UiUpdate,
      MessageType::StateDelta,
      MessageType::Event,
      MessageType::ComponentSpec,
      MessageType::ConnectionAck,
      MessageType::Error,
      MessageType::Ping,
      MessageType::Pong,
    ] {
      assert_eq!(MessageType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(MessageType::parse("ping"), None);
  }

  #[test]
  fn inbound_only_requires_type() {
    let env = parse_envelope(r#"{"type":"PING"}"#).unwrap();
    assert_eq!(env.message_type(), Some(MessageType::Ping));
    assert!(env.data.is_null());
    assert!(env.session_id.is_none());
  }

  #[test]
  fn inbound_full_envelope() {
    let env = parse_envelope(
      r#"{"type":"UI_UPDATE","timestamp":"2024-01-01T00:00:00.000Z","sessionId":"abc","data":{"x":1}}"#,
    )
    .unwrap();
    assert_eq!(env.kind, "UI_UPDATE");
    assert_eq!(env.session_id.as_deref(), Some("abc"));
    assert_eq!(env.data, json!({ "x": 1 }));
  }

  #[test]
  fn malformed_inbound_is_parse_error() {
    for text in ["not json", "[1,2]", r#"{"data":{}}"#, r#"{"type":42}"#] {
      let err = parse_envelope(text).unwrap_err();
      assert_eq!(err.code(), "PARSE_ERROR", "{text}");
    }
  }

  #[test]
  fn pong_has_no_data() {
    let value = to_value(&OutboundEnvelope::new(Outbound::Pong));
    assert_eq!(value["type"], "PONG");
    assert!(value.get("data").is_none());
    assert!(value.get("sessionId").is_none());
    assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
  }

  #[test]
  fn connection_ack_shape() {
    let ack = Outbound::ConnectionAck(ConnectionAck {
      session_id: "s1".into(),
      supported_features: SUPPORTED_FEATURES.iter().map(|f| (*f).to_string()).collect(),
    });
    let value = to_value(&OutboundEnvelope::new(ack));
    assert_eq!(value["type"], "CONNECTION_ACK");
    assert_eq!(value["data"]["sessionId"], "s1");
    assert_eq!(value["data"]["supportedFeatures"][0], "ui-translation");
  }

  #[test]
  fn error_envelope() {
    let value = to_value(&OutboundEnvelope::error(&BridgeError::parse("bad")));
    assert_eq!(value["type"], "ERROR");
    assert_eq!(value["data"], json!({ "code": "PARSE_ERROR", "message": "bad" }));
  }

  #[test]
  fn component_spec_without_config_sends_null() {
    let payload = ComponentSpecPayload {
      screen_id: "home".into(),
      route: "/".into(),
      language: "en".into(),
      components: ComponentSpec {
        tag: "div".into(),
        props: Default::default(),
        style: None,
        children: None,
      },
      timestamp: now_iso(),
      app_config: None,
    };
    let value = to_value(&OutboundEnvelope::new(Outbound::ComponentSpec(payload)).with_session("s"));
    assert_eq!(value["type"], "COMPONENT_SPEC");
    assert_eq!(value["sessionId"], "s");
    assert!(value["data"]["appConfig"].is_null());
    assert!(value["data"].as_object().unwrap().contains_key("appConfig"));
    assert_eq!(value["data"]["components"], json!({ "type": "div", "props": {} }));
  }

  struct Unencodable;

  impl Serialize for Unencodable {
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
      Err(serde::ser::Error::custom("unencodable"))
    }
  }

  #[test]
  fn unencodable_frame_yields_nothing() {
    assert_eq!(encode_frame(&Unencodable), None);
    assert_eq!(encode_frame(&json!({"type": "PONG"})).as_deref(), Some(r#"{"type":"PONG"}"#));
  }
}
