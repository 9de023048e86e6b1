// All validation logic is in gostcheck-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod render;

// Re-export core types for convenience
pub use gostcheck_core::*;

// Re-export CLI utilities
pub use render::{render_json, render_text, OutputFormat, TextReport};
