// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { spacing: 50.0 }
    }
}

/// Colors are linear rgb / rgba component arrays in 0.0..=1.0.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: [f32; 3],
    pub grid_color: [f32; 4],
    pub grid_weight: f32,
    pub crosshair_color: [f32; 4],
    pub crosshair_weight: f32,
    pub readout_color: [f32; 3],
    pub readout_font_size: u32,
    pub marker_color: [f32; 3],
    pub marker_radius: f32,
    pub dot_color: [f32; 3],
    pub dot_radius: f32,
    pub label_color: [f32; 3],
    pub label_font_size: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [0.2, 0.2, 0.2],
            grid_color: [0.4, 0.4, 0.4, 0.5],
            grid_weight: 1.0,
            crosshair_color: [0.0, 1.0, 0.0, 0.5],
            crosshair_weight: 1.0,
            readout_color: [1.0, 1.0, 1.0],
            readout_font_size: 14,
            marker_color: [1.0, 0.0, 0.0],
            marker_radius: 15.0,
            dot_color: [1.0, 1.0, 1.0],
            dot_radius: 3.0,
            label_color: [1.0, 1.0, 0.0],
            label_font_size: 12,
        }
    }
}
