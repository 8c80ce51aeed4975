// src/config/app.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config/recensor.toml";
pub const ENV_CONFIG_PATH: &str = "RECENSOR_CONFIG_PATH";
pub const ENV_MAX_QUERY_LEN: &str = "RECENSOR_MAX_QUERY_LEN";
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

fn default_max_query_len() -> usize {
    200
}
fn default_popular() -> Vec<String> {
    [
        "iPhone 15",
        "Nike Air Max",
        "Samsung TV",
        "MacBook Pro",
        "AirPods",
        "PlayStation 5",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
fn default_ui_dir() -> PathBuf {
    PathBuf::from("ui")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Queries longer than this (in chars) are rejected with 400.
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,
    /// Suggestions shown on the landing page.
    #[serde(default = "default_popular")]
    pub popular: Vec<String>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_query_len: default_max_query_len(),
            popular: default_popular(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_ui_dir")]
    pub dir: PathBuf,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            dir: default_ui_dir(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    /// Exposes `/metrics`.
    #[serde(default)]
    pub debug_routes: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub server: ServerSection,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: AppConfig = toml::from_str(s)?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml_str(&data).with_context(|| format!("parsing {}", path.display()))
    }

    /// Resolution order:
    /// 1) $RECENSOR_CONFIG_PATH (must exist)
    /// 2) config/recensor.toml
    /// 3) built-in defaults
    ///
    /// Env overrides are applied last.
    pub fn load() -> Result<Self> {
        let mut cfg = if let Ok(p) = env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            Self::load_from_file(&pb)?
        } else {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default.exists() {
                Self::load_from_file(&default)?
            } else {
                Self::default()
            }
        };
        cfg.apply_env();
        info!(
            target: "config",
            max_query_len = cfg.search.max_query_len,
            debug_routes = cfg.server.debug_routes,
            ui_dir = %cfg.ui.dir.display(),
            "app config loaded"
        );
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Some(n) = env::var(ENV_MAX_QUERY_LEN)
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
        {
            self.search.max_query_len = n;
        }
        if env::var(ENV_DEBUG_ROUTES).ok().as_deref() == Some("1") {
            self.server.debug_routes = true;
        }
        self.sanitize();
    }

    fn sanitize(&mut self) {
        if self.search.max_query_len == 0 {
            self.search.max_query_len = default_max_query_len();
        }
        self.search.popular.retain(|s| !s.trim().is_empty());
    }
}
