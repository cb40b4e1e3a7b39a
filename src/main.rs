//! Server binary for the utility backend.

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use utils_backend::api::{AppState, create_router};
use utils_backend::holiday::{HolidayClassifier, HolidayTable};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let table = load_table();
    info!(entries = table.len(), "holiday table loaded");

    let state = AppState::new(HolidayClassifier::new(table));
    let app = create_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = match format!("0.0.0.0:{port}").parse::<SocketAddr>() {
        Ok(addr) => addr,
        Err(_) => {
            eprintln!("Error: invalid PORT value '{port}'");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, "server starting");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error: failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let serve = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    );
    match serve.await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the exception table from the source chosen at startup.
///
/// `HOLIDAY_DATA` selects an external JSON file; otherwise the embedded
/// dataset is used. Either source failing degrades to an empty table so the
/// service stays available with weekday/weekend arithmetic only.
fn load_table() -> HolidayTable {
    match std::env::var("HOLIDAY_DATA") {
        Ok(path) => match HolidayTable::from_file(&path) {
            Ok(table) => table,
            Err(err) => {
                warn!(error = %err, path = %path, "falling back to empty holiday table");
                HolidayTable::empty()
            }
        },
        Err(_) => HolidayTable::load_or_empty(),
    }
}
