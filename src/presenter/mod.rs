// file: src/presenter/mod.rs
// description: terminal and json output module exports
// reference: internal module structure

pub mod json;
pub mod terminal;

pub use json::render_json;
pub use terminal::{PromptChooser, Presenter};
