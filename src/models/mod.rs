pub mod click_tracker;
pub mod geometry;

pub use click_tracker::{ClickTracker, RedrawHost, TrackerSnapshot, CLICK_CAPACITY};
pub use geometry::Point;
