// GOST Check Core Library
//
// Checks Russian research reports (GOST 7.32-2017) for title page and
// executor list formatting. Documents are turned into paragraphs, segmented
// into structural sections, then run through a pluggable set of validators.

pub mod config;
pub mod error;
pub mod heuristics;
pub mod preprocessors;
pub mod processor;
pub mod rules;
pub mod segmenter;
pub mod types;

// Re-export main types and functions for easy use
pub use config::ValidationConfig;
pub use error::{ConfigError, DocumentError};
pub use preprocessors::{Preprocessor, TextPreprocessor};
pub use processor::{DocumentProcessor, StepProfiler};
pub use rules::{ExecutorListValidator, TitlePageValidator, ValidationEngine, Validator};
pub use segmenter::SectionSegmenter;
pub use types::*;

#[cfg(feature = "docx")]
pub use preprocessors::DocxPreprocessor;
