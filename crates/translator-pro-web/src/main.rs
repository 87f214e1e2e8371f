//! Translator Pro Web - web front end for translating text.

mod app;
mod helpers;
mod routes;
mod state;
mod templates;

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use translator_pro_core::{load_animation, AppConfig, Backend};

use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "translator-pro-web")]
#[command(author, version, about = "Translator Pro Web Server", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

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

    /// Do not fetch the decorative animation
    #[arg(long)]
    no_animation: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Static files directory (defaults to ./static or crate's static dir)
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<String>,
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };

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
    if args.no_animation {
        config.animation.enabled = false;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = load_config(&args)?;
    info!("Using {} translation backend", config.translator.backend);

    let animation = load_animation(&config.animation).await;

    let state = Arc::new(
        AppState::new(&config, animation).context("Failed to initialize application state")?,
    );

    let app = app::build_router(state, app::resolve_static_dir(args.static_dir.as_deref()));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
