use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::catalog::DEFAULT_SEARCH_LIMIT;
use crate::error::Result;
use crate::geometry::ScaleCorrector;
use crate::geometry::scale::{DEAD_ZONE, MAX_LATITUDE, MIN_LATITUDE};

fn default_countries() -> PathBuf {
    PathBuf::from("countries.geojson")
}
fn default_states() -> PathBuf {
    PathBuf::from("states.geojson")
}
fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `truesize.toml`; CLI flags take precedence
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_countries")]
    pub countries: PathBuf,
    #[serde(default = "default_states")]
    pub states: PathBuf,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub correction: CorrectionConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            countries: default_countries(),
            states: default_states(),
            output: None,
            search_limit: default_search_limit(),
            verbose: default_verbose(),
            correction: CorrectionConfig::default(),
        }
    }
}

fn default_min_latitude() -> f64 {
    MIN_LATITUDE
}
fn default_max_latitude() -> f64 {
    MAX_LATITUDE
}
fn default_dead_zone() -> f64 {
    DEAD_ZONE
}

/// `[correction]` table: clamp range and dead zone of the scale corrector
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct CorrectionConfig {
    #[serde(default = "default_min_latitude")]
    pub min_latitude: f64,
    #[serde(default = "default_max_latitude")]
    pub max_latitude: f64,
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            min_latitude: default_min_latitude(),
            max_latitude: default_max_latitude(),
            dead_zone: default_dead_zone(),
        }
    }
}

impl CorrectionConfig {
    pub fn corrector(&self) -> Result<ScaleCorrector> {
        ScaleCorrector::new(self.min_latitude, self.max_latitude, self.dead_zone)
    }
}

impl FileConfig {
    /// First config file found on the search path that parses cleanly
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("truesize.toml"));
    paths.push(PathBuf::from(".truesize.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("truesize").join("config.toml"));
        paths.push(config_dir.join("truesize.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".truesize.toml"));
    }

    paths
}
