// src/models/click_tracker.rs
//
// ClickTracker is the one stateful entity in the visualisation.
//
// It holds the last known cursor position and a bounded FIFO of the
// most recent click points. The windowing layer feeds it click and
// motion events; the canvas view reads it back through snapshot().
// It knows nothing about nannou or any other toolkit: the redraw
// signal goes out through the RedrawHost seam.

use crate::models::Point;

/// Sliding window size for the click history.
pub const CLICK_CAPACITY: usize = 20;

/// Fire-and-forget redraw request to the host windowing system.
/// The host is free to coalesce any number of requests into one frame.
pub trait RedrawHost {
    fn request_redraw(&mut self);
}

/// Read-only view of the tracker state for one rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct TrackerSnapshot<'a> {
    pub cursor: Option<Point>,
    pub clicks: &'a [Point],
}

#[derive(Debug, Default)]
pub struct ClickTracker {
    clicks: Vec<Point>,
    cursor: Option<Point>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self {
            clicks: Vec::with_capacity(CLICK_CAPACITY),
            cursor: None,
        }
    }

    /// Appends a click point, evicting the oldest once the window is full.
    pub fn record_click(&mut self, p: Point, host: &mut impl RedrawHost) {
        self.clicks.push(p);
        if self.clicks.len() > CLICK_CAPACITY {
            self.clicks.remove(0);
        }
        host.request_redraw();
    }

    /// Stores the latest cursor position. Never cleared afterwards:
    /// the pointer leaving the surface keeps the last known position.
    pub fn update_mouse(&mut self, p: Point, host: &mut impl RedrawHost) {
        self.cursor = Some(p);
        host.request_redraw();
    }

    pub fn snapshot(&self) -> TrackerSnapshot<'_> {
        TrackerSnapshot {
            cursor: self.cursor,
            clicks: &self.clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        requests: usize,
    }

    impl RedrawHost for CountingHost {
        fn request_redraw(&mut self) {
            self.requests += 1;
        }
    }

    mod cursor_tests {
        use super::*;

        #[test]
        fn test_cursor_absent_before_first_motion() {
            let tracker = ClickTracker::new();
            assert!(tracker.snapshot().cursor.is_none());
        }

        #[test]
        fn test_update_mouse_sets_cursor() {
            let mut tracker = ClickTracker::new();
            let mut host = CountingHost::default();

            tracker.update_mouse(Point::new(42.0, 17.0), &mut host);
            assert_eq!(tracker.snapshot().cursor, Some(Point::new(42.0, 17.0)));
        }

        #[test]
        fn test_latest_motion_wins() {
            let mut tracker = ClickTracker::new();
            let mut host = CountingHost::default();

            tracker.update_mouse(Point::new(1.0, 1.0), &mut host);
            tracker.update_mouse(Point::new(2.0, 2.0), &mut host);
            tracker.update_mouse(Point::new(3.0, 3.0), &mut host);
            assert_eq!(tracker.snapshot().cursor, Some(Point::new(3.0, 3.0)));
        }
    }

    mod history_tests {
        use super::*;

        #[test]
        fn test_history_length_is_min_of_n_and_capacity() {
            let mut tracker = ClickTracker::new();
            let mut host = CountingHost::default();

            for n in 1..=25 {
                tracker.record_click(Point::new(n as f32, n as f32), &mut host);
                let expected = n.min(CLICK_CAPACITY);
                assert_eq!(tracker.snapshot().clicks.len(), expected);
            }
        }

        #[test]
        fn test_fifo_eviction_keeps_most_recent_points() {
            let mut tracker = ClickTracker::new();
            let mut host = CountingHost::default();

            // 21 clicks at (0,0)..(20,20): the very first one falls out.
            for i in 0..=20 {
                tracker.record_click(Point::new(i as f32, i as f32), &mut host);
            }

            let snapshot = tracker.snapshot();
            assert_eq!(snapshot.clicks.len(), CLICK_CAPACITY);
            assert!(!snapshot.clicks.contains(&Point::new(0.0, 0.0)));
            for (i, p) in snapshot.clicks.iter().enumerate() {
                let expected = (i + 1) as f32;
                assert_eq!(*p, Point::new(expected, expected));
            }
        }

        #[test]
        fn test_insertion_order_preserved() {
            let mut tracker = ClickTracker::new();
            let mut host = CountingHost::default();

            tracker.record_click(Point::new(10.0, 10.0), &mut host);
            tracker.record_click(Point::new(20.0, 20.0), &mut host);
            tracker.record_click(Point::new(30.0, 30.0), &mut host);

            let snapshot = tracker.snapshot();
            assert_eq!(
                snapshot.clicks,
                &[
                    Point::new(10.0, 10.0),
                    Point::new(20.0, 20.0),
                    Point::new(30.0, 30.0),
                ]
            );
        }
    }

    mod redraw_tests {
        use super::*;

        #[test]
        fn test_every_mutation_requests_a_redraw() {
            let mut tracker = ClickTracker::new();
            let mut host = CountingHost::default();

            tracker.record_click(Point::new(1.0, 1.0), &mut host);
            assert_eq!(host.requests, 1);

            tracker.update_mouse(Point::new(2.0, 2.0), &mut host);
            assert_eq!(host.requests, 2);

            tracker.record_click(Point::new(3.0, 3.0), &mut host);
            assert_eq!(host.requests, 3);
        }

        #[test]
        fn test_snapshot_does_not_request_redraw() {
            let mut tracker = ClickTracker::new();
            let mut host = CountingHost::default();

            tracker.record_click(Point::new(1.0, 1.0), &mut host);
            let before = host.requests;
            let _ = tracker.snapshot();
            assert_eq!(host.requests, before);
        }
    }
}
