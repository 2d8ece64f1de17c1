//! Configuration loading for Bugboard

mod schema;

pub use schema::{
    Config, Highlight, Profile, DEFAULT_FONT_STYLESHEET, DEFAULT_INPUT, DEFAULT_OUTPUT,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".bugboardrc.json";

/// Find and load the config file. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

/// Parse one config file; relative paths inside it resolve against its directory
fn load_config_file(config_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;
    let base_dir = config_path.parent().unwrap_or(Path::new("."));
    Ok(config.resolve_paths(base_dir))
}

/// Search for .bugboardrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Write a starter config into `dir`; refuses to overwrite an existing file
pub fn write_starter_config(dir: &Path, name: Option<&str>) -> Result<Option<PathBuf>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        return Ok(None);
    }
    let json = serde_json::to_string_pretty(&Config::starter(name))
        .context("Failed to serialize starter config")?;
    fs::write(&config_path, json + "\n")
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(Some(config_path))
}
