use crate::cors::normalize_origins;
use crate::settings::Settings;
use clap::Parser;
use std::path::PathBuf;
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";
/// Scaffold Backend - starter REST API over an in-memory item collection
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "SCAFFOLD_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
    /// Comma-separated list of allowed CORS origins (overrides the settings file).
    /// Use "*" to allow all origins (not recommended for production).
    /// Example: --cors-origins=http://localhost:3000,http://localhost:5173
    #[arg(long, env = "SCAFFOLD_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,
    /// Service name reported by the root endpoint (overrides the settings file)
    #[arg(long, env = "SCAFFOLD_SERVICE_NAME")]
    pub service_name: Option<String>,
    /// Settings file (default: ~/.scaffold/config.toml)
    #[arg(long, env = "SCAFFOLD_CONFIG")]
    pub config: Option<PathBuf>,
    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "SCAFFOLD_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "SCAFFOLD_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,
    /// Custom log directory (default: ~/.scaffold/logs)
    #[arg(long, env = "SCAFFOLD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
impl Args {
    /// Layer command-line and environment overrides on top of `settings`.
    #[must_use]
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(name) = &self.service_name {
            settings.service.name.clone_from(name);
        }
        if let Some(origins) = &self.cors_origins {
            settings.cors.origins = normalize_origins(origins);
        }
        settings
    }
}
pub fn report_server_error(
    addr: std::net::SocketAddr,
    log_file: &std::path::Path,
    e: &std::io::Error,
) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of scaffold-backend may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill scaffold-backend");
        eprintln!("  2. Use a different port:        scaffold-backend --addr 127.0.0.1:8001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}
