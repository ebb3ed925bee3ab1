// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;

use crate::config::{GridConfig, StyleConfig, WindowConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir()? {
            return Ok(exe_config);
        }

        // Then the current working directory
        if fs::metadata("config.toml").is_ok() {
            let content = fs::read_to_string("config.toml")?;
            return Ok(toml::from_str(&content)?);
        }

        // No file anywhere: run the demo on built-in defaults
        Ok(Config::default())
    }

    fn load_from_exe_dir() -> Result<Option<Self>, Box<dyn std::error::Error>> {
        let config_path = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join("config.toml")));

        match config_path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                Ok(Some(toml::from_str(&content)?))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, 400);
        assert_eq!(config.grid.spacing, 50.0);
        assert_eq!(config.style.marker_radius, 15.0);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [window]
            width = 800

            [grid]
            spacing = 25.0
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 400);
        assert_eq!(config.grid.spacing, 25.0);
        assert_eq!(config.style.background, [0.2, 0.2, 0.2]);
    }

    #[test]
    fn test_style_section_parses() {
        let config: Config = toml::from_str(
            r#"
            [style]
            background = [0.0, 0.0, 0.0]
            crosshair_color = [1.0, 0.0, 1.0, 0.8]
            label_font_size = 16
            "#,
        )
        .unwrap();

        assert_eq!(config.style.background, [0.0, 0.0, 0.0]);
        assert_eq!(config.style.crosshair_color, [1.0, 0.0, 1.0, 0.8]);
        assert_eq!(config.style.label_font_size, 16);
        // untouched fields keep their defaults
        assert_eq!(config.style.dot_radius, 3.0);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let result: Result<Config, _> = toml::from_str("[window]\nwidth = \"wide\"");
        assert!(result.is_err());
    }
}
