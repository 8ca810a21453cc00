//! Contract Analysis Server
//!
//! A REST server that checks Saudi employment, rental, sales and partnership
//! contracts against the compliance rule tables. Provides endpoints for:
//!
//! - Text and file (txt/pdf) analysis
//! - HTML and text reports
//! - Contract type and compliance level listing
//!
//! ## Configuration
//!
//! Every flag has an environment fallback, and a `.env` file in the working
//! directory is read at startup. When `LEGAL_CONTENT_DIR` is set, reference
//! provisions are loaded from it; otherwise only the built-in tables are used.
//!
//! `--check <FILE>` analyzes a single local document, prints the verdict JSON
//! and exits without starting the server.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use compliance_engine::{AnalysisRequest, ComplianceEngine, RuleBook};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod extract;
mod report;

use api::{
    handle_analyze, handle_analyze_file, handle_health, handle_list_compliance_levels,
    handle_list_contract_types, handle_report,
};

/// Command-line arguments for the contract analysis server
#[derive(Parser, Debug)]
#[command(name = "contract-api")]
#[command(about = "Contract compliance analysis server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CONTRACT_API_PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "CONTRACT_API_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Directory of legal reference markdown, one subdirectory per contract type
    #[arg(long, env = "LEGAL_CONTENT_DIR")]
    legal_content_dir: Option<PathBuf>,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "RATE_LIMIT", default_value = "10")]
    rate_limit: u32,

    /// Analyze this file, print the verdict and exit
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,

    /// Contract type for --check; classified from the text when omitted
    #[arg(long, requires = "check")]
    contract_type: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: ComplianceEngine,
}

/// Build the router without rate limiting
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/contract-types", get(handle_list_contract_types))
        .route("/api/compliance-levels", get(handle_list_compliance_levels))
        .route("/api/analyze", post(handle_analyze))
        .route("/api/analyze/file", post(handle_analyze_file))
        .route("/api/report", post(handle_report))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Analyze one local file and print the verdict JSON
fn check_file(engine: &ComplianceEngine, path: &Path, contract_type: Option<String>) -> anyhow::Result<()> {
    let extracted = extract::extract_text(path)?;
    let verdict = engine.analyze(&AnalysisRequest {
        text: extracted.text,
        language: None,
        contract_type,
    })?;

    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let rule_book = match &args.legal_content_dir {
        Some(dir) => {
            info!("Loading legal content from {}", dir.display());
            RuleBook::load(dir)
        }
        None => RuleBook::builtin(),
    };
    let engine = ComplianceEngine::with_rule_book(rule_book);

    if let Some(path) = &args.check {
        return check_file(&engine, path, args.contract_type.clone());
    }

    info!("Starting contract-api server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit.saturating_mul(2))
            .finish()
            .context("Failed to create rate limiter config")?,
    );

    let app = app(AppState { engine }).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
