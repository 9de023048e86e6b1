use crate::config::ValidationConfig;
use crate::error::DocumentError;
use crate::preprocessors::{default_preprocessors, Preprocessor};
use crate::rules::ValidationEngine;
use crate::segmenter::SectionSegmenter;
use crate::types::{DocumentReport, DocumentStructure};
use chrono::Datelike;
use std::path::Path;
use std::time::{Duration, Instant};

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        println!("⏱️  {}: {:.0}ms", step_name, elapsed.as_millis());

        result
    }

    pub fn timings(&self) -> &[(String, Duration)] {
        &self.timings
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        println!("\n📊 Performance Summary:");
        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &self.timings {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            println!(
                "   {:.<35} {:.0}ms ({:.1}%)",
                step,
                duration.as_millis(),
                percentage
            );
        }
        println!("   {:.<35} {:.0}ms", "Total", total.as_millis());
    }
}

/// Path → paragraphs → DocumentStructure → findings
pub struct DocumentProcessor {
    preprocessors: Vec<Box<dyn Preprocessor>>,
    segmenter: SectionSegmenter,
    engine: ValidationEngine,
    config: ValidationConfig,
    current_year: i32,
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl DocumentProcessor {
    /// Build the processor from config. The reference year for the
    /// "year in the future" check is `title_page.current_year` when set,
    /// otherwise the local clock.
    pub fn new(config: ValidationConfig) -> Self {
        let current_year = config
            .title_page
            .current_year
            .unwrap_or_else(|| chrono::Local::now().year());

        Self {
            preprocessors: default_preprocessors(),
            segmenter: SectionSegmenter::new(config.segmentation.clone()),
            engine: ValidationEngine::from_config(&config, current_year),
            config,
            current_year,
        }
    }

    /// Override the reference year and rebuild the validators with it
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self.engine = ValidationEngine::from_config(&self.config, year);
        self
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Load and segment a document without validating it
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<DocumentStructure, DocumentError> {
        self.parse_with_profiler(path.as_ref(), &mut StepProfiler::new(false))
    }

    /// Load, segment and validate a document
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<DocumentReport, DocumentError> {
        self.validate_file_with_profiling(path, false)
    }

    /// Same as `validate_file`, printing per-step timings when enabled
    pub fn validate_file_with_profiling(
        &self,
        path: impl AsRef<Path>,
        enable_profiling: bool,
    ) -> Result<DocumentReport, DocumentError> {
        let mut profiler = StepProfiler::new(enable_profiling);
        let document = self.parse_with_profiler(path.as_ref(), &mut profiler)?;
        let report = profiler.time_step("3. Validation", || self.validate_structure(&document));
        profiler.print_summary();
        Ok(report)
    }

    /// Run every configured validator over an already segmented document
    pub fn validate_structure(&self, document: &DocumentStructure) -> DocumentReport {
        let results = self.engine.run(document);
        DocumentReport::new(document, results)
    }

    fn parse_with_profiler(
        &self,
        path: &Path,
        profiler: &mut StepProfiler,
    ) -> Result<DocumentStructure, DocumentError> {
        if !path.exists() {
            return Err(DocumentError::NotFound(path.to_path_buf()));
        }

        let preprocessor = self
            .preprocessor_for(path)
            .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;
        log::info!("Processing {} with {}", path.display(), preprocessor.name());

        let paragraphs = profiler.time_step("1. Paragraph Extraction", || {
            preprocessor.process_file(path)
        })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(profiler.time_step("2. Segmentation", || {
            self.segmenter.segment(&filename, paragraphs)
        }))
    }

    fn preprocessor_for(&self, path: &Path) -> Option<&dyn Preprocessor> {
        self.preprocessors
            .iter()
            .find(|p| p.supports_file_type(path))
            .map(|p| p.as_ref())
    }
}
