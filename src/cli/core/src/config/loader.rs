/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::FlutterExpoConfig;

pub const CONFIG_FILE: &str = "flutterexpo.toml";

/// Walk upward from `start` to find `flutterexpo.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<Option<PathBuf>> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(Some(candidate));
    }
    if !dir.pop() {
      return Ok(None);
    }
  }
}

pub fn load_config(path: &Path) -> Result<FlutterExpoConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: FlutterExpoConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// An explicit path must exist; otherwise search upward from `cwd` and fall
/// back to defaults when nothing is found.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<FlutterExpoConfig> {
  match explicit {
    Some(path) => load_config(path),
    None => match find_config(cwd)? {
      Some(path) => load_config(&path),
      None => Ok(FlutterExpoConfig::default()),
    },
  }
}
