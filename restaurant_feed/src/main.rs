//! # restaurant_feed
//!
//! HTTP feed serving restaurant records from a spreadsheet export.
//!
//! The contract is deliberately blunt: `GET /` returns the full record
//! array as JSON, and any internal failure comes back as a structured
//! `{error, details, message}` object - still HTTP 200, so the consumer
//! only ever has to parse one shape per outcome.
//!
//! ## Usage
//!
//! ```bash
//! restaurant_feed --sheet data/restaurants.csv --bind 0.0.0.0:8080
//! ```

mod records;
mod sheet;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing::{error, info};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "restaurant_feed")]
#[command(about = "Spreadsheet-to-JSON feed for the restaurant directory")]
#[command(version)]
struct Args {
    /// Sheet export (CSV with a header row) to serve
    #[arg(short, long, default_value = "data/restaurants.csv")]
    sheet: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ============================================================================
// Handlers
// ============================================================================

struct AppState {
    sheet: PathBuf,
}

/// The whole feed, re-read per request so sheet edits show up without a
/// restart. Single attempt, no retries.
async fn feed_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    match sheet::load(&state.sheet) {
        Ok(restaurants) => {
            info!(count = restaurants.len(), "served restaurant records");
            Json(json!(restaurants))
        }
        Err(err) => {
            error!(error = %err, "sheet read failed");
            Json(json!({
                "error": "データの取得に失敗しました",
                "details": err.to_string(),
                "message": "シートのパスと形式を確認してください",
            }))
        }
    }
}

async fn healthz_handler() -> &'static str {
    "ok"
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting restaurant_feed v{}", env!("CARGO_PKG_VERSION"));
    info!("Sheet: {:?}", args.sheet);

    let state = Arc::new(AppState { sheet: args.sheet });
    let app = Router::new()
        .route("/", get(feed_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(state);

    let listener = TcpListener::bind(&args.bind).await?;
    info!("restaurant_feed listening on {}", args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
