// Configuration loader
// Layers, lowest priority first: built-in defaults, ~/.mindbridge/config.toml,
// then environment variables (PORT, DEBUG, MINDBRIDGE_RESPONSES)

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::settings::Config;

/// Load configuration from the MindBridge config file and environment
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    if let Some(file) = try_load_from_mindbridge_config()? {
        if let Some(host) = file.host {
            config.host = host;
        }
        if let Some(port) = file.port {
            config.port = port;
        }
        if let Some(debug) = file.debug {
            config.debug = debug;
        }
        if let Some(path) = file.responses_path {
            config.responses_path = Some(path);
        }
    }

    apply_env(&mut config)?;

    Ok(config)
}

/// Environment overrides, matching the original deployment contract:
/// PORT is the listen port, DEBUG is "true" (case-insensitive) or off.
fn apply_env(config: &mut Config) -> Result<()> {
    if let Ok(port) = std::env::var("PORT") {
        config.port = port
            .parse()
            .with_context(|| format!("Invalid PORT value: {}", port))?;
    }

    if let Ok(debug) = std::env::var("DEBUG") {
        config.debug = debug.to_lowercase() == "true";
    }

    if let Ok(path) = std::env::var("MINDBRIDGE_RESPONSES") {
        if !path.is_empty() {
            config.responses_path = Some(PathBuf::from(path));
        }
    }

    Ok(())
}

/// Partial settings parsed from ~/.mindbridge/config.toml
#[derive(Debug, serde::Deserialize)]
struct TomlConfig {
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    debug: Option<bool>,
    #[serde(default)]
    responses_path: Option<PathBuf>,
}

fn try_load_from_mindbridge_config() -> Result<Option<TomlConfig>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".mindbridge/config.toml");

    if !config_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let toml_config: TomlConfig =
        toml::from_str(&contents).context("Failed to parse config.toml")?;

    Ok(Some(toml_config))
}
