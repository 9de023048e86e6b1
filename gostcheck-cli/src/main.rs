use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

// Import from gostcheck-core
use gostcheck_core::{DocumentProcessor, DocumentReport, ValidationConfig};

// Import CLI utilities
use gostcheck_cli::{render_json, render_text, OutputFormat};

const EXIT_WORDS: &[&str] = &["exit", "quit", "выход"];

#[derive(Parser)]
#[command(name = "gostcheck")]
#[command(about = "Checks research report title pages and executor lists against GOST 7.32-2017")]
struct Args {
    /// Documents to check (.docx or .txt)
    inputs: Vec<PathBuf>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Reference year for the "year in the future" check (default: config, then clock)
    #[arg(long)]
    year: Option<i32>,

    /// List the detected front-matter sections
    #[arg(long)]
    show_sections: bool,

    /// Print per-step timings
    #[arg(long)]
    profile: bool,

    /// Prompt for paths until `exit`
    #[arg(short, long)]
    interactive: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    let processor = create_processor(&args)?;

    if args.interactive || args.inputs.is_empty() {
        return run_interactive(&processor, &args);
    }

    let mut reports = Vec::with_capacity(args.inputs.len());
    let mut failed = false;

    for input in &args.inputs {
        match processor.validate_file_with_profiling(input, args.profile) {
            Ok(report) => {
                failed |= !report.is_valid();
                if args.format == OutputFormat::Text {
                    print!("{}", render_text(&report, args.show_sections));
                }
                reports.push(report);
            }
            Err(e) => {
                eprintln!("❌ {e}");
                failed = true;
            }
        }
    }

    if args.format == OutputFormat::Json {
        println!("{}", render_json(&reports)?);
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn create_processor(args: &Args) -> Result<DocumentProcessor> {
    let config = match &args.config {
        Some(path) => ValidationConfig::load_from_file(path)
            .with_context(|| format!("Cannot use config {path}"))?,
        None => ValidationConfig::default(),
    };

    let processor = DocumentProcessor::new(config);
    let processor = match args.year {
        Some(year) => processor.with_current_year(year),
        None => processor,
    };

    log::info!(
        "Validators: {} (reference year {})",
        processor.engine().validator_names().join(", "),
        processor.current_year()
    );
    Ok(processor)
}

fn run_interactive(processor: &DocumentProcessor, args: &Args) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("🦀 ВАЛИДАТОР ГОСТ 7.32-2017");
    println!("Проверка титульного листа и структуры документа");
    println!("{}", "=".repeat(60));
    println!("\nВведите путь к .docx файлу или 'exit' для выхода");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF ends the session like `exit`
            break;
        };
        let line = line?;
        let input = clean_input_path(&line);

        if EXIT_WORDS.contains(&input.to_lowercase().as_str()) {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match processor.validate_file_with_profiling(Path::new(input), args.profile) {
            Ok(report) => print_report(&report, args)?,
            Err(e) => println!("❌ Ошибка: {e}"),
        }
    }

    println!("Завершение работы");
    Ok(())
}

fn print_report(report: &DocumentReport, args: &Args) -> Result<()> {
    match args.format {
        OutputFormat::Text => print!("{}", render_text(report, args.show_sections)),
        OutputFormat::Json => println!("{}", render_json(std::slice::from_ref(report))?),
    }
    Ok(())
}

/// Trim whitespace and the quotes a terminal adds to dragged-in paths
fn clean_input_path(line: &str) -> &str {
    line.trim().trim_matches(|c| c == '"' || c == '\'')
}
