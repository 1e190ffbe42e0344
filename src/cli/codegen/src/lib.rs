/* src/cli/codegen/src/lib.rs */

mod react;

pub mod naming;

pub use react::{BASE_APP, DEFAULT_LIVE_URL, GeneratedFiles, ReactCodeGenerator, register_route};
pub use react::{render_screen, render_stylesheet};
