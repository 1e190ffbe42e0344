/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use serde::Deserialize;

/// `flutterexpo.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlutterExpoConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub generate: GenerateSection,
  #[serde(default)]
  pub log: LogSection,
}

impl FlutterExpoConfig {
  pub fn validate(&self) -> Result<()> {
    if self.server.port == 0 {
      bail!("server.port must be non-zero");
    }
    if self.generate.out_dir.trim().is_empty() {
      bail!("generate.out_dir must not be empty");
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

impl ServerSection {
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3001
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
  #[serde(default = "default_live_url")]
  pub live_url: String,
}

impl Default for GenerateSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir(), live_url: default_live_url() }
  }
}

fn default_out_dir() -> String {
  "generated_react_app".to_string()
}

fn default_live_url() -> String {
  flutterexpo_codegen::DEFAULT_LIVE_URL.to_string()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
  #[serde(default = "default_log_level")]
  pub level: String,
  #[serde(default)]
  pub format: LogFormat,
}

impl Default for LogSection {
  fn default() -> Self {
    Self { level: default_log_level(), format: LogFormat::default() }
  }
}

fn default_log_level() -> String {
  "info".to_string()
}
