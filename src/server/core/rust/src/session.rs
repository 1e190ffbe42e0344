/* src/server/core/rust/src/session.rs */

use std::collections::BTreeMap;
use std::fmt;

use tokio::sync::mpsc;
use uuid::Uuid;

/// Outbound queue of one viewer connection; the transport drains it.
pub type SessionSink = mpsc::UnboundedSender<String>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(String);

impl SessionId {
  pub fn generate() -> Self {
    Self(Uuid::new_v4().simple().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for SessionId {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl fmt::Display for SessionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Live sessions keyed by id. Owned by the dispatch context only.
#[derive(Debug, Default)]
pub struct SessionTable {
  sessions: BTreeMap<SessionId, SessionSink>,
}

impl SessionTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, id: SessionId, sink: SessionSink) {
    self.sessions.insert(id, sink);
  }

  pub fn remove(&mut self, id: &SessionId) -> bool {
    self.sessions.remove(id).is_some()
  }

  pub fn contains(&self, id: &SessionId) -> bool {
    self.sessions.contains_key(id)
  }

  pub fn len(&self) -> usize {
    self.sessions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sessions.is_empty()
  }

  /// Queue a frame for one session. A closed queue drops the session.
  pub fn send_to(&mut self, id: &SessionId, frame: String) -> bool {
    let delivered = match self.sessions.get(id) {
      Some(sink) => sink.send(frame).is_ok(),
      None => return false,
    };
    if !delivered {
      self.sessions.remove(id);
    }
    delivered
  }

  /// Queue the same frame for every open session; returns how many took it.
  /// Sessions whose queue has closed are skipped and dropped.
  pub fn broadcast(&mut self, frame: &str) -> usize {
    let mut delivered = 0;
    self.sessions.retain(|_, sink| {
      let ok = sink.send(frame.to_string()).is_ok();
      if ok {
        delivered += 1;
      }
      ok
    });
    delivered
  }
}
