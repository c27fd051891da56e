use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_EXPORT_FILE: &str = "security-architecture.json";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

/// Presentation settings. Carried through to the export document only; the
/// evaluation engine never reads them.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub dark_mode: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub file_name: String,
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log: LogConfig,
    pub display: DisplayConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Layers built-in defaults, `<dir>/default.*`, `<dir>/<RUN_MODE>.*` and
    /// `POSTURE_*` environment variables (`__` separates nested keys).
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        debug!("Loading configuration from {} (run mode {})", dir.display(), run_mode);

        let builder = Config::builder()
            .set_default("log.filter", "info")?
            .set_default("log.json", false)?
            .set_default("display.dark_mode", true)?
            .set_default("export.file_name", DEFAULT_EXPORT_FILE)?
            .set_default("export.pretty", true)?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&run_mode)).required(false))
            .add_source(
                Environment::with_prefix("POSTURE")
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig {
                filter: "info".to_string(),
                json: false,
            },
            display: DisplayConfig { dark_mode: true },
            export: ExportConfig {
                file_name: DEFAULT_EXPORT_FILE.to_string(),
                pretty: true,
            },
        }
    }
}
