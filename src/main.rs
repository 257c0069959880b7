use clap::Parser;
use color_eyre::eyre::Result;
use scaffold_backend::app::{report_server_error, Args};
use scaffold_backend::cors::build_cors_layer;
use scaffold_backend::logging::{default_log_dir, init_logging, parse_rotation, LogConfig};
use scaffold_backend::server::{build_router, shutdown_signal, AppState};
use scaffold_backend::settings::{load_settings, Settings};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_config = LogConfig {
        log_dir: args.log_dir.clone().unwrap_or_else(default_log_dir),
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    let log_file = log_config.log_file();

    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Settings file is optional; a broken one falls back to defaults.
    let settings = load_settings(args.config.as_deref()).unwrap_or_else(|e| {
        warn!("Failed to load settings, using defaults: {e}");
        Settings::default()
    });
    let settings = args.apply_to(settings);

    let addr: SocketAddr = args.addr.parse()?;

    let allow_all_origins = settings.cors.origins.iter().any(|o| o == "*");
    info!(
        "CORS origins: {}",
        if allow_all_origins {
            "*".to_string()
        } else {
            settings.cors.origins.join(", ")
        }
    );

    let service_name = settings.service.name;
    let cors = build_cors_layer(settings.cors.origins);
    let app = build_router(AppState::new(&service_name)).layer(cors);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting {} on {}", service_name, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} stopped", service_name);
    Ok(())
}
