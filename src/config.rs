use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "DOCROOT_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Size of the single read performed per connection.
    pub read_buffer_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
    pub index_file: String,
    /// Extra extension → MIME type mappings, e.g. `".js": "text/javascript"`.
    pub mime_types: HashMap<String, String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            read_buffer_size: 1024,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("www"),
            index_file: "index.html".to_string(),
            mime_types: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads the config from the process environment.
    ///
    /// `DOCROOT_CONFIG` points at a YAML file; `LISTEN` and `ROOT` override
    /// the listen address and document root afterwards.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] but reads variables through `lookup`.
    pub fn load_with<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup(CONFIG_ENV) {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                Self::from_yaml(&raw).with_context(|| format!("invalid config file {path}"))?
            }
            None => Self::default(),
        };

        if let Some(listen_addr) = lookup("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        if let Some(root) = lookup("ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        if cfg.server.read_buffer_size == 0 {
            anyhow::bail!("server.read_buffer_size must be greater than zero");
        }
        Ok(cfg)
    }
}
