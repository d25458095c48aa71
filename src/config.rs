use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration for the server.
///
/// Loaded once at startup and passed explicitly to every component; nothing
/// reads configuration ambiently after this point.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFileConfig,
}

/// Listening socket settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Pending-connection queue for the listening socket.
    #[serde(default = "default_backlog")]
    pub backlog: u32,
    /// Hard cap on the bytes buffered for a single request.
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
}

/// Static file serving settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFileConfig {
    /// Directory beneath which every servable file must reside.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Document served when the request path is "/".
    #[serde(default = "default_index")]
    pub index: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_backlog() -> u32 {
    5
}

fn default_max_request_bytes() -> usize {
    8192
}

fn default_root() -> PathBuf {
    PathBuf::from("./www")
}

fn default_index() -> String {
    "home.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            backlog: default_backlog(),
            max_request_bytes: default_max_request_bytes(),
        }
    }
}

impl Default for StaticFileConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index: default_index(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `ATRIUM_CONFIG`
    /// (default `atrium.yaml`), falling back to defaults when the file does
    /// not exist. `LISTEN` and `WEB_ROOT` environment variables override the
    /// file afterwards.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("ATRIUM_CONFIG").unwrap_or_else(|_| "atrium.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(raw) => Self::from_yaml(&raw)
                .with_context(|| format!("invalid config file {path}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read config file {path}"));
            }
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        if let Ok(root) = std::env::var("WEB_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    /// Parses a configuration document. Missing fields take their defaults.
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
