/* src/cli/core/src/main.rs */

mod config;
mod logging;
mod ui;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flutterexpo_codegen::ReactCodeGenerator;
use flutterexpo_server::{AstDocument, Bridge, MappingRegistry, Translator};
use flutterexpo_server_axum::IntoAxumRouter;

use config::{FlutterExpoConfig, resolve_config};

#[derive(Parser)]
#[command(name = "flutterexpo", about = "FlutterExpo translator CLI", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Run the live translator service (WebSocket on / and /ws)
  Serve {
    /// Path to flutterexpo.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
    /// Output directory for generated React sources
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Generate React sources from an AST document file
  Generate {
    /// Path to the AST document JSON file
    #[arg(short, long)]
    input: PathBuf,
    /// Output directory for generated React sources
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Path to flutterexpo.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the component specification for an AST document file
  Translate {
    /// Path to the AST document JSON file
    #[arg(short, long)]
    input: PathBuf,
    /// Path to flutterexpo.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

fn load_config(explicit: Option<&Path>) -> Result<FlutterExpoConfig> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  resolve_config(explicit, &cwd)
}

fn read_document(path: &Path) -> Result<AstDocument> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  serde_json::from_str(&content)
    .with_context(|| format!("{} is not a valid AST document", path.display()))
}

fn code_generator(
  config: &FlutterExpoConfig,
  registry: Arc<MappingRegistry>,
) -> ReactCodeGenerator {
  ReactCodeGenerator::new(&config.generate.out_dir, registry)
    .live_url(config.generate.live_url.as_str())
}

async fn serve(config: FlutterExpoConfig) -> Result<()> {
  let registry = Arc::new(MappingRegistry::builtin());
  let generator = code_generator(&config, registry.clone());
  let bridge = Bridge::new(Translator::new(registry)).with_generator(Arc::new(generator));
  let (handle, _dispatch) = flutterexpo_server::spawn(bridge);

  let addr = config.server.bind_addr();
  ui::banner("serve");
  ui::arrow(&format!("listening on ws://{addr}/ws"));
  ui::arrow(&format!("writing sources to {}", config.generate.out_dir));
  tracing::info!(%addr, out_dir = %config.generate.out_dir, "starting translator service");

  handle.serve(&addr).await.with_context(|| format!("translator service on {addr} failed"))
}

fn generate(config: &FlutterExpoConfig, input: &Path) -> Result<()> {
  ui::arrow(&format!("reading {}", input.display()));
  let document = read_document(input)?;
  let generator = code_generator(config, Arc::new(MappingRegistry::builtin()));
  let files = generator.generate_app(&document)?;

  ui::ok(&format!("{}", files.screen.display()));
  ui::ok(&format!("{}", files.stylesheet.display()));
  ui::ok(&format!("{} (route {})", files.manifest.display(), document.route));
  Ok(())
}

fn translate(input: &Path) -> Result<()> {
  let document = read_document(input)?;
  let translation = Translator::default().translate_node(&document.tree);
  for kind in &translation.unmapped {
    ui::warn(&format!("no mapping for {kind}, rendered as a generic container"));
  }
  let json =
    serde_json::to_string_pretty(&translation.root).context("failed to serialize component spec")?;
  println!("{json}");
  Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { config, port, out } => {
      let mut cfg = load_config(config.as_deref())?;
      if let Some(port) = port {
        cfg.server.port = port;
      }
      if let Some(out) = out {
        cfg.generate.out_dir = out.display().to_string();
      }
      cfg.validate()?;
      logging::init(&cfg.log)?;
      serve(cfg).await?;
    }
    Command::Generate { input, out, config } => {
      let mut cfg = load_config(config.as_deref())?;
      if let Some(out) = out {
        cfg.generate.out_dir = out.display().to_string();
      }
      cfg.validate()?;
      logging::init(&cfg.log)?;
      ui::banner("generate");
      generate(&cfg, &input)?;
    }
    Command::Translate { input, config } => {
      let cfg = load_config(config.as_deref())?;
      logging::init(&cfg.log)?;
      translate(&input)?;
    }
  }

  Ok(())
}
