/* src/cli/codegen/src/react/generator.rs */

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use flutterexpo_server::{AstDocument, BridgeError, MappingRegistry, SourceGenerator};

use super::routing::{BASE_APP, register_route};
use super::screen::render_screen;
use super::stylesheet::render_stylesheet;
use crate::naming::component_name;

pub const DEFAULT_LIVE_URL: &str = "ws://localhost:3001";

/// Paths written by one `generate_app` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
  pub screen: PathBuf,
  pub stylesheet: PathBuf,
  pub manifest: PathBuf,
}

/// Writes a React screen plus its stylesheet under `<output_dir>/src` and
/// registers its route in `App.tsx`.
#[derive(Debug, Clone)]
pub struct ReactCodeGenerator {
  output_dir: PathBuf,
  live_url: String,
  registry: Arc<MappingRegistry>,
}

impl ReactCodeGenerator {
  pub fn new(output_dir: impl Into<PathBuf>, registry: Arc<MappingRegistry>) -> Self {
    Self { output_dir: output_dir.into(), live_url: DEFAULT_LIVE_URL.to_string(), registry }
  }

  pub fn live_url(mut self, url: impl Into<String>) -> Self {
    self.live_url = url.into();
    self
  }

  pub fn output_dir(&self) -> &Path {
    &self.output_dir
  }

  /// Screen and stylesheet are rewritten every call; the manifest only
  /// gains lines it does not already contain. Earlier writes are kept
  /// when a later step fails.
  pub fn generate_app(&self, document: &AstDocument) -> Result<GeneratedFiles> {
    let src = self.output_dir.join("src");
    let screens_dir = src.join("screens");
    let styles_dir = src.join("styles");
    for dir in [&screens_dir, &styles_dir] {
      std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let name = component_name(&document.screen_id);

    let screen = screens_dir.join(format!("{name}.tsx"));
    let content = render_screen(document, &self.registry, &name, &self.live_url);
    write(&screen, &content)?;

    let stylesheet = styles_dir.join(format!("{name}.css"));
    write(&stylesheet, &render_stylesheet(document, &self.registry, &name))?;

    let manifest = src.join("App.tsx");
    update_routing(&manifest, &name, &document.route)?;

    Ok(GeneratedFiles { screen, stylesheet, manifest })
  }
}

impl SourceGenerator for ReactCodeGenerator {
  fn generate(&self, document: &AstDocument) -> Result<(), BridgeError> {
    let files = self
      .generate_app(document)
      .map_err(|e| BridgeError::generation(format!("{e:#}")))?;
    tracing::debug!(
      screen = %files.screen.display(),
      stylesheet = %files.stylesheet.display(),
      manifest = %files.manifest.display(),
      "generated sources"
    );
    Ok(())
  }
}

fn update_routing(manifest: &Path, component: &str, route: &str) -> Result<()> {
  let current = match std::fs::read_to_string(manifest) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => BASE_APP.to_string(),
    Err(e) => {
      return Err(e).with_context(|| format!("failed to read {}", manifest.display()));
    }
  };
  write(manifest, &register_route(&current, component, route))
}

fn write(path: &Path, content: &str) -> Result<()> {
  std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
