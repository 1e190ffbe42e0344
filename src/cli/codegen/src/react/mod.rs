/* src/cli/codegen/src/react/mod.rs */

mod generator;
mod literal;
mod routing;
mod screen;
mod stylesheet;


pub use generator::{DEFAULT_LIVE_URL, GeneratedFiles, ReactCodeGenerator};
pub use routing::{BASE_APP, register_route};
pub use screen::render_screen;
pub use stylesheet::render_stylesheet;
