//! # Chatbot HTTP Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module handles configuration loading and merging for the chat server.
//! It combines settings from:
//! 1. Command-line arguments, with `--port` also read from the `PORT`
//!    environment variable (highest priority)
//! 2. A TOML configuration file: the one named by `--config`, or
//!    `.chatbot.toml` in the current directory if present
//! 3. Default values: host `0.0.0.0`, port `8080`, CORS off (lowest priority)
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! port = 9000
//! host = "127.0.0.1"
//! enable_cors = true
//! ```
//!
//! Loading configuration:
//!
//! ```rust
//! let config = load_config(args)?;
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::error::{ChatbotError, Result};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The configuration file looked up in the current directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".chatbot.toml";

/// Port used when neither the command line, `PORT`, nor a config file sets one.
pub const DEFAULT_PORT: u16 = 8080;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Command-line arguments accepted by `chatbot serve`. Every setting is optional
/// so that an unset flag can fall through to the config file or the defaults.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Network IP address to bind to. Defaults to `0.0.0.0` (all interfaces).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on. Falls back to the `PORT` environment variable, then `8080`.
    #[arg(long, short, env = "PORT")]
    pub port: Option<u16>,

    /// Path to a TOML configuration file. Defaults to `./.chatbot.toml` if it exists.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Send permissive CORS headers so browser front-ends on other origins can call `/chat`.
    #[arg(long)]
    pub cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// The final settings the server runs with, after merging arguments, the
/// optional configuration file, and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The network IP address the server will bind to.
    pub host: IpAddr,

    /// The network port the server will listen on.
    pub port: u16,

    /// Whether permissive CORS headers are added to responses.
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    /// The socket address to bind the listener to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// # Configuration from File (`FileConfig`)
///
/// Mirrors the TOML file. All fields are optional so a file only needs to
/// list the settings it overrides.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    port: Option<u16>,
    host: Option<String>, // Read as string so a bad value can fall back with a warning
    enable_cors: Option<bool>,
}

/// # Load Server Configuration (`load_config`)
///
/// Locates and parses the configuration file (if any) relative to the current
/// working directory, then merges it with `args` and the defaults.
///
/// ## Errors
///
/// Returns an error if:
/// - `--config` names a file that does not exist.
/// - The configuration file exists but cannot be read or parsed.
/// - The current working directory cannot be determined.
pub fn load_config(args: ServeArgs) -> Result<ServerConfig> {
    let cwd = env::current_dir().context("Failed to get current working directory")?;
    load_config_in(args, &cwd)
}

/// `load_config` with an explicit directory for locating `.chatbot.toml`
/// and resolving a relative `--config` path.
fn load_config_in(args: ServeArgs, search_dir: &Path) -> Result<ServerConfig> {
    let file_config = match find_config_file(args.config.as_deref(), search_dir)? {
        Some(path) => Some(load_config_file(&path)?),
        None => {
            debug!("No config file found. Using arguments and defaults.");
            None
        }
    };

    Ok(merge_config(&args, file_config))
}

/// Resolves which configuration file to read, if any.
///
/// An explicit path must exist; the implicit `.chatbot.toml` in `search_dir`
/// is optional.
fn find_config_file(explicit: Option<&Path>, search_dir: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            search_dir.join(path)
        };
        if !path.is_file() {
            return Err(ChatbotError::Config(format!(
                "Config file not found: {}",
                path.display()
            ))
            .into());
        }
        return Ok(Some(path));
    }

    let implicit = search_dir.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        Ok(Some(implicit))
    } else {
        debug!("No config file at {}", implicit.display());
        Ok(None)
    }
}

/// Reads and parses a TOML configuration file.
fn load_config_file(path: &Path) -> Result<FileConfig> {
    info!("Loading configuration from {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Applies precedence: explicit arguments (including `PORT`) over the file over defaults.
fn merge_config(args: &ServeArgs, file_config: Option<FileConfig>) -> ServerConfig {
    let defaults = ServerConfig::default();
    let file_config = file_config.unwrap_or_default();

    let file_host = file_config.host.as_deref().and_then(|host_str| {
        host_str
            .parse::<IpAddr>()
            .map_err(|e| {
                warn!(
                    "Invalid host IP '{}' in config file ({}), using default {}",
                    host_str, e, defaults.host
                );
            })
            .ok()
    });

    ServerConfig {
        host: args.host.or(file_host).unwrap_or(defaults.host),
        port: args.port.or(file_config.port).unwrap_or(defaults.port),
        // `--cors` can only switch CORS on; the file decides otherwise.
        enable_cors: args.cors || file_config.enable_cors.unwrap_or(defaults.enable_cors),
    }
}

// --- Unit Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 8080);
        assert!(!config.enable_cors);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_merge_args_only() {
        let args = ServeArgs {
            host: Some("127.0.0.1".parse().unwrap()),
            port: Some(9000),
            config: None,
            cors: true,
        };

        let config = merge_config(&args, None);

        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_merge_no_args_no_file_uses_defaults() {
        let config = merge_config(&ServeArgs::default(), None);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_merge_file_fills_unset_args() {
        let file: FileConfig = toml::from_str(
            r#"
            port = 9090
            host = "127.0.0.1"
            enable_cors = true
            "#,
        )
        .unwrap();

        // Only the port is given explicitly (as it would be through PORT).
        let args = ServeArgs {
            port: Some(7000),
            ..ServeArgs::default()
        };

        let config = merge_config(&args, Some(file));

        assert_eq!(config.port, 7000);
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_merge_invalid_file_host_falls_back() {
        let file: FileConfig = toml::from_str(r#"host = "not-an-ip""#).unwrap();
        let config = merge_config(&ServeArgs::default(), Some(file));
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    #[test]
    fn test_file_config_rejects_unknown_fields() {
        let result: std::result::Result<FileConfig, _> = toml::from_str("directory = \"www\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_file_implicit() -> Result<()> {
        let temp_dir = TempDir::new()?;

        assert!(find_config_file(None, temp_dir.path())?.is_none());

        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "port = 1234")?;
        let found = find_config_file(None, temp_dir.path())?;
        assert_eq!(found, Some(temp_dir.path().join(CONFIG_FILE_NAME)));

        Ok(())
    }

    #[test]
    fn test_find_config_file_explicit_relative() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("custom.toml"), "port = 1234")?;

        let found = find_config_file(Some(Path::new("custom.toml")), temp_dir.path())?;
        assert_eq!(found, Some(temp_dir.path().join("custom.toml")));

        Ok(())
    }

    #[test]
    fn test_find_config_file_explicit_missing_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;

        let err = find_config_file(Some(Path::new("missing.toml")), temp_dir.path())
            .expect_err("missing explicit config should fail");
        assert!(matches!(
            err.downcast_ref::<ChatbotError>(),
            Some(ChatbotError::Config(_))
        ));

        Ok(())
    }

    /// `PORT` reaches `ServeArgs` through clap and outranks the config file.
    /// Kept as one test so the process-wide variable is only touched here.
    #[test]
    fn test_port_env_overrides_default_and_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        env::set_var("PORT", "9123");

        let args = ServeArgs::try_parse_from(["serve"])?;
        assert_eq!(args.port, Some(9123));
        let config = load_config_in(args, temp_dir.path())?;
        assert_eq!(config.port, 9123);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "port = 7000\n")?;
        let config = load_config_in(ServeArgs::try_parse_from(["serve"])?, temp_dir.path())?;
        assert_eq!(config.port, 9123);

        // An explicit flag still beats the environment.
        let args = ServeArgs::try_parse_from(["serve", "--port", "9500"])?;
        assert_eq!(load_config_in(args, temp_dir.path())?.port, 9500);

        env::remove_var("PORT");

        // Without PORT the file's port applies.
        let config = load_config_in(ServeArgs::try_parse_from(["serve"])?, temp_dir.path())?;
        assert_eq!(config.port, 7000);

        Ok(())
    }

    #[test]
    fn test_load_config_file_parses_and_rejects_bad_toml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let good = temp_dir.path().join("good.toml");
        let bad = temp_dir.path().join("bad.toml");
        fs::write(&good, "port = 9191\nenable_cors = false\n")?;
        fs::write(&bad, "port = \"not a number\"")?;

        let config = merge_config(&ServeArgs::default(), Some(load_config_file(&good)?));
        assert_eq!(config.port, 9191);
        assert!(!config.enable_cors);

        assert!(load_config_file(&bad).is_err());

        Ok(())
    }
}
