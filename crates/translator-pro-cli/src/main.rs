//! Translator Pro CLI - translate text from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use translator_pro_core::{AppConfig, Backend, FlowState, LanguageDirectory, TranslationFlow};

#[derive(Parser, Debug)]
#[command(name = "translator-pro")]
#[command(author, version, about = "Translate text into any language", long_about = None)]
struct Args {
    /// Text to translate (read from stdin when omitted)
    text: Option<String>,

    /// Target language display name (e.g. "French")
    #[arg(short = 't', long = "to")]
    target: Option<String>,

    /// List selectable languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Translation backend (google or openai)
    #[arg(long, env = "TRANSLATOR_BACKEND")]
    backend: Option<String>,

    /// API base URL override
    #[arg(long, env = "OPENAI_API_BASE")]
    api_base: Option<String>,

    /// API key (OpenAI-compatible backend)
    #[arg(long, env = "OPENAI_API_KEY")]
    api_key: Option<String>,

    /// Model name for the OpenAI-compatible backend
    #[arg(long, env = "OPENAI_MODEL")]
    model: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Apply command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut AppConfig, args: &Args) -> Result<()> {
    if let Some(ref name) = args.backend {
        config.translator.backend = Backend::from_name(name)
            .with_context(|| format!("Unknown backend '{name}' (expected google or openai)"))?;
    }
    if args.api_base.is_some() {
        config.translator.api_base.clone_from(&args.api_base);
    }
    if args.api_key.is_some() {
        config.translator.api_key.clone_from(&args.api_key);
    }
    if args.model.is_some() {
        config.translator.model.clone_from(&args.model);
    }
    Ok(())
}

fn read_source_text(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    // Template is hardcoded and valid, unwrap is safe
    #[allow(clippy::unwrap_used)]
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Translating...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

// CLI output is intentional
#[allow(clippy::print_stdout)]
fn print_languages(directory: &LanguageDirectory) {
    for entry in directory.entries() {
        println!("{:<24} {}", entry.display_name, entry.code);
    }
}

/// What a finished cycle prints and how the process exits.
#[derive(Debug, PartialEq)]
struct Outcome {
    /// Printed to stdout so it can be piped
    stdout: Option<String>,
    stderr: String,
    code: ExitCode,
}

fn outcome(state: FlowState) -> Outcome {
    match state {
        FlowState::Succeeded(translation) => Outcome {
            stderr: format!(
                "Detected source language: {}",
                translation.detected_source_display()
            ),
            stdout: Some(translation.translated_text),
            code: ExitCode::SUCCESS,
        },
        FlowState::Warned { message } | FlowState::Failed { message } => Outcome {
            stdout: None,
            stderr: message.to_string(),
            code: ExitCode::FAILURE,
        },
        other => Outcome {
            stdout: None,
            stderr: format!("Translation did not complete ({other:?})"),
            code: ExitCode::FAILURE,
        },
    }
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
fn report(state: FlowState) -> ExitCode {
    let outcome = outcome(state);
    if let Some(text) = outcome.stdout {
        println!("{text}");
    }
    eprintln!("{}", outcome.stderr);
    outcome.code
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let directory = LanguageDirectory::global();

    if args.list_languages {
        print_languages(directory);
        return Ok(ExitCode::SUCCESS);
    }

    // Load or create config
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };
    apply_overrides(&mut config, &args)?;

    let target = args
        .target
        .clone()
        .or_else(|| config.default_language.clone())
        .unwrap_or_else(|| directory.default_display_name().to_string());

    if !directory.contains(&target) {
        debug!("'{}' is not a known language, using English", target);
    }

    let source_text = read_source_text(args.text.clone())?;

    let flow = TranslationFlow::from_config(&config).context("Failed to initialize translator")?;

    let pb = spinner();
    let state = flow.submit(&source_text, &target).await;
    pb.finish_and_clear();

    Ok(report(state))
}
