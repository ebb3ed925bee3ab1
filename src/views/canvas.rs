// src/views/canvas.rs
//
// CanvasView assembles one frame of the visualisation from a tracker
// snapshot: background, reference grid, crosshair with readout, then
// the click markers oldest-to-newest so the newest paints on top.

use nannou::prelude::*;

use crate::config::Config;
use crate::draw::{cursor_draw, grid_draw, marker_draw, DrawParams};
use crate::draw::marker_draw::MarkerStyle;
use crate::models::TrackerSnapshot;

pub struct CanvasView {
    background: Rgb,
    grid_spacing: f32,
    grid: DrawParams,
    crosshair: DrawParams,
    readout_color: Rgb,
    readout_font_size: u32,
    markers: MarkerStyle,
}

impl CanvasView {
    pub fn new(config: &Config) -> Self {
        let style = &config.style;
        Self {
            background: component_rgb(style.background),
            grid_spacing: config.grid.spacing,
            grid: DrawParams {
                color: component_rgba(style.grid_color),
                stroke_weight: style.grid_weight,
            },
            crosshair: DrawParams {
                color: component_rgba(style.crosshair_color),
                stroke_weight: style.crosshair_weight,
            },
            readout_color: component_rgb(style.readout_color),
            readout_font_size: style.readout_font_size,
            markers: MarkerStyle {
                circle_color: component_rgb(style.marker_color),
                circle_radius: style.marker_radius,
                dot_color: component_rgb(style.dot_color),
                dot_radius: style.dot_radius,
                label_color: component_rgb(style.label_color),
                label_font_size: style.label_font_size,
            },
        }
    }

    pub fn draw(&self, draw: &Draw, rect: &Rect, snapshot: &TrackerSnapshot) {
        grid_draw::draw_background(draw, self.background);
        grid_draw::draw_grid(draw, rect, self.grid_spacing, &self.grid);

        if let Some(cursor) = snapshot.cursor {
            cursor_draw::draw_crosshair(draw, rect, cursor, &self.crosshair);
            cursor_draw::draw_readout(
                draw,
                rect,
                cursor,
                self.readout_color,
                self.readout_font_size,
            );
        }

        marker_draw::draw_markers(draw, rect, snapshot.clicks, &self.markers);
    }
}

fn component_rgb(c: [f32; 3]) -> Rgb {
    rgb(c[0], c[1], c[2])
}

fn component_rgba(c: [f32; 4]) -> Rgba {
    rgba(c[0], c[1], c[2], c[3])
}
