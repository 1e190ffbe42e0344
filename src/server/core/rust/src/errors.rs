/* src/server/core/rust/src/errors.rs */

use std::fmt;

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const APP_CONFIG_ERROR: &str = "APP_CONFIG_ERROR";
pub const TRANSLATION_ERROR: &str = "TRANSLATION_ERROR";
pub const GENERATION_ERROR: &str = "GENERATION_ERROR";
pub const DUPLICATE_MAPPING: &str = "DUPLICATE_MAPPING";

/// Error carried back to a session as an `ERROR` message.
/// None of these are fatal to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeError {
  code: String,
  message: String,
}

impl BridgeError {
  pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
    Self { code: code.into(), message: message.into() }
  }

  pub fn parse(msg: impl Into<String>) -> Self {
    Self::new(PARSE_ERROR, msg)
  }

  pub fn config(msg: impl Into<String>) -> Self {
    Self::new(APP_CONFIG_ERROR, msg)
  }

  pub fn translation(msg: impl Into<String>) -> Self {
    Self::new(TRANSLATION_ERROR, msg)
  }

  pub fn generation(msg: impl Into<String>) -> Self {
    Self::new(GENERATION_ERROR, msg)
  }

  pub fn duplicate_mapping(source_type: &str) -> Self {
    Self::new(DUPLICATE_MAPPING, format!("mapping for '{source_type}' is already registered"))
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for BridgeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for BridgeError {}
