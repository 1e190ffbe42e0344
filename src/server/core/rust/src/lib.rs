/* src/server/core/rust/src/lib.rs */

pub mod app_config;
pub mod ast;
pub mod bridge;
pub mod errors;
pub mod event_loop;
pub mod mapping;
pub mod protocol;
pub mod session;
pub mod translate;
pub mod visit;

// Re-exports for ergonomic use
pub use app_config::AppConfig;
pub use ast::{AssetReference, AstDocument, AstNode, EventBinding, PropMap};
pub use bridge::{Bridge, BridgeEvent, GenerationJob, GenerationOutcome, SourceGenerator};
pub use errors::BridgeError;
pub use event_loop::{BridgeHandle, spawn};
pub use mapping::{FALLBACK_TAG, MappingEntry, MappingRegistry, WidgetKind};
pub use protocol::{InboundEnvelope, MessageType, Outbound, OutboundEnvelope};
pub use session::{SessionId, SessionSink};
pub use translate::{ComponentSpec, Translation, Translator};
pub use visit::{NodeVisitor, Visit, walk};
