// src/main.rs
use nannou::prelude::*;

use clickvis::{
    config::Config,
    draw::screen_to_surface,
    models::{ClickTracker, RedrawHost},
    views::CanvasView,
};

struct Model {
    // Core components:
    tracker: ClickTracker,
    canvas: CanvasView,

    // Host adapter:
    redraw: FrameDirty,
}

/// The nannou side of the RedrawHost seam. nannou renders every frame
/// anyway, so a request just marks the frame dirty; update() clears it,
/// coalescing any number of requests into the next rendered frame.
#[derive(Default)]
struct FrameDirty {
    pending: bool,
}

impl RedrawHost for FrameDirty {
    fn request_redraw(&mut self) {
        self.pending = true;
    }
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    app.new_window()
        .title("clickvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();

    Model {
        tracker: ClickTracker::new(),
        canvas: CanvasView::new(&config),
        redraw: FrameDirty::default(),
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let p = screen_to_surface(pos, &app.window_rect());
    model.tracker.update_mouse(p, &mut model.redraw);
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let p = screen_to_surface(app.mouse.position(), &app.window_rect());
    model.tracker.record_click(p, &mut model.redraw);
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    // All redraw requests since the last frame collapse into this one.
    if model.redraw.pending {
        model.redraw.pending = false;
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let snapshot = model.tracker.snapshot();
    model.canvas.draw(&draw, &app.window_rect(), &snapshot);
    draw.to_frame(app, &frame).unwrap();
}
