// SPDX-License-Identifier: GPL-3.0-only

//! Pinch-to-zoom gesture tracking
//!
//! Converts a stream of raw multi-touch samples into a clamped, normalized
//! zoom level. The controller owns two pieces of state for the duration of a
//! gesture session: the finger distance at the previous sample and the
//! accumulated zoom level. Zoom persists across gesture sessions (lifting
//! fingers does not reset it) and is only reset externally when the active
//! camera changes, since zoom ranges are camera-specific.

use crate::constants::zoom::{PINCH_SENSITIVITY, ZOOM_STEP};
use tracing::debug;

/// A touch point in screen-space pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another touch point
    fn distance_to(&self, other: &TouchPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Direction for the discrete zoom path (keys/buttons)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Tracks a two-finger pinch gesture and accumulates a normalized zoom level
///
/// The controller is fed once per touch-move event with the current set of
/// active touch points, and once per gesture end (touch count dropping below
/// two). The discrete [`step_zoom`](Self::step_zoom) path shares the same
/// zoom state, so a key press after a pinch continues from the pinch's
/// resulting value.
#[derive(Debug, Clone, Default)]
pub struct ZoomGestureController {
    /// Finger distance at the previous sample; 0 between gesture sessions
    last_distance: f64,
    /// Accumulated zoom level, always in [0, 1]
    zoom: f64,
}

impl ZoomGestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom level in [0, 1]
    pub fn level(&self) -> f64 {
        self.zoom
    }

    /// Process one touch-move sample with the currently active touch points
    ///
    /// Fewer than two touches is a no-op (the gesture-end transition is
    /// handled by [`on_touch_end`](Self::on_touch_end)). With two or more
    /// touches only the first two are considered. The first sample of a
    /// gesture session seeds the baseline distance and produces no zoom
    /// change, so a gesture never starts with a spurious jump.
    ///
    /// Returns the (possibly unchanged) zoom level, to be pushed to the
    /// preview's zoom parameter.
    pub fn on_touch_sample(&mut self, touches: &[TouchPoint]) -> f64 {
        if touches.len() < 2 {
            return self.zoom;
        }

        let distance = touches[0].distance_to(&touches[1]);

        if self.last_distance == 0.0 {
            // Baseline sample: seed the distance, no zoom change
            self.last_distance = distance;
            debug!(distance, "Pinch baseline set");
            return self.zoom;
        }

        let delta = (distance - self.last_distance) / PINCH_SENSITIVITY;
        self.zoom = (self.zoom + delta).clamp(0.0, 1.0);
        self.last_distance = distance;
        debug!(zoom = self.zoom, delta, "Pinch zoom update");

        self.zoom
    }

    /// End the current gesture session
    ///
    /// Must be called whenever the touch count transitions below two, so the
    /// next two-finger contact re-baselines instead of computing a delta
    /// against a stale distance. Zoom is left untouched.
    pub fn on_touch_end(&mut self) {
        self.last_distance = 0.0;
    }

    /// Discrete zoom step, clamped to [0, 1]
    ///
    /// Shares the zoom state with the gesture path.
    pub fn step_zoom(&mut self, direction: ZoomDirection, step: f64) -> f64 {
        let delta = match direction {
            ZoomDirection::In => step,
            ZoomDirection::Out => -step,
        };
        self.zoom = (self.zoom + delta).clamp(0.0, 1.0);
        debug!(zoom = self.zoom, ?direction, "Step zoom");
        self.zoom
    }

    /// Zoom in by the default step
    pub fn zoom_in(&mut self) -> f64 {
        self.step_zoom(ZoomDirection::In, ZOOM_STEP)
    }

    /// Zoom out by the default step
    pub fn zoom_out(&mut self) -> f64 {
        self.step_zoom(ZoomDirection::Out, ZOOM_STEP)
    }

    /// Reset zoom to 0
    ///
    /// Called when the active camera is switched: zoom ranges are
    /// camera-specific, so a carried-over level from one lens is not
    /// meaningful on another.
    pub fn reset(&mut self) {
        self.zoom = 0.0;
        debug!("Zoom reset");
    }
}

/// Format a zoom level for the status line
///
/// Zero renders as "1x" (no zoom applied), anything else as a rounded
/// percentage of the normalized range.
pub fn zoom_label(zoom: f64) -> String {
    if zoom == 0.0 {
        "1x".to_string()
    } else {
        format!("{}%", (zoom * 100.0).round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(a: (f64, f64), b: (f64, f64)) -> Vec<TouchPoint> {
        vec![TouchPoint::new(a.0, a.1), TouchPoint::new(b.0, b.1)]
    }

    #[test]
    fn test_fewer_than_two_touches_is_noop() {
        let mut ctl = ZoomGestureController::new();
        assert_eq!(ctl.on_touch_sample(&[]), 0.0);
        assert_eq!(ctl.on_touch_sample(&[TouchPoint::new(10.0, 10.0)]), 0.0);
        assert_eq!(ctl.level(), 0.0);
    }

    #[test]
    fn test_first_sample_sets_baseline_without_zoom_change() {
        let mut ctl = ZoomGestureController::new();
        // Absolute finger positions must not matter for the baseline sample
        let zoom = ctl.on_touch_sample(&points((500.0, 500.0), (900.0, 100.0)));
        assert_eq!(zoom, 0.0);
    }

    #[test]
    fn test_delta_formula() {
        let mut ctl = ZoomGestureController::new();
        ctl.on_touch_sample(&points((0.0, 0.0), (100.0, 0.0)));
        // Distance grows 100 -> 160, delta = 60 / 500 = 0.12
        let zoom = ctl.on_touch_sample(&points((0.0, 0.0), (160.0, 0.0)));
        assert!((zoom - 0.12).abs() < 1e-9);
    }

    #[test]
    fn test_pinch_sequence_across_gesture_end() {
        let mut ctl = ZoomGestureController::new();
        ctl.on_touch_sample(&points((0.0, 0.0), (100.0, 0.0)));
        let zoom = ctl.on_touch_sample(&points((0.0, 0.0), (160.0, 0.0)));
        assert!((zoom - 0.12).abs() < 1e-9);

        ctl.on_touch_end();

        // New gesture at the original positions: re-baseline, no delta
        // against the stale distance of 160
        let zoom = ctl.on_touch_sample(&points((0.0, 0.0), (100.0, 0.0)));
        assert!((zoom - 0.12).abs() < 1e-9);
    }

    #[test]
    fn test_rebaseline_at_same_positions_produces_no_change() {
        let mut ctl = ZoomGestureController::new();
        ctl.on_touch_sample(&points((0.0, 0.0), (200.0, 0.0)));
        ctl.on_touch_sample(&points((0.0, 0.0), (300.0, 0.0)));
        let before = ctl.level();

        ctl.on_touch_end();
        let after = ctl.on_touch_sample(&points((0.0, 0.0), (300.0, 0.0)));
        assert_eq!(before, after);
    }

    #[test]
    fn test_zoom_stays_clamped() {
        let mut ctl = ZoomGestureController::new();
        ctl.on_touch_sample(&points((0.0, 0.0), (10.0, 0.0)));
        // Huge spread: raw delta would exceed 1.0 by far
        let zoom = ctl.on_touch_sample(&points((0.0, 0.0), (5000.0, 0.0)));
        assert_eq!(zoom, 1.0);
        // And a hard pinch-in clamps at 0
        let zoom = ctl.on_touch_sample(&points((0.0, 0.0), (1.0, 0.0)));
        assert_eq!(zoom, 0.0);
    }

    #[test]
    fn test_extra_touches_are_ignored() {
        let mut ctl = ZoomGestureController::new();
        let mut three = points((0.0, 0.0), (100.0, 0.0));
        three.push(TouchPoint::new(9999.0, 9999.0));
        ctl.on_touch_sample(&three);

        let mut three = points((0.0, 0.0), (160.0, 0.0));
        three.push(TouchPoint::new(-9999.0, 0.0));
        let zoom = ctl.on_touch_sample(&three);
        assert!((zoom - 0.12).abs() < 1e-9);
    }

    #[test]
    fn test_step_zoom_round_trip() {
        let mut ctl = ZoomGestureController::new();
        ctl.step_zoom(ZoomDirection::In, 0.3);
        let start = ctl.level();
        ctl.zoom_in();
        ctl.zoom_out();
        assert!((ctl.level() - start).abs() < 1e-9);
    }

    #[test]
    fn test_step_zoom_not_reversible_at_boundary() {
        let mut ctl = ZoomGestureController::new();
        ctl.step_zoom(ZoomDirection::In, 0.98);
        assert!((ctl.zoom_in() - 1.0).abs() < 1e-9);
        // Clamping discarded part of the step, so stepping back lands on
        // 0.95 rather than 0.98
        assert!((ctl.zoom_out() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_reset_always_yields_zero() {
        let mut ctl = ZoomGestureController::new();
        ctl.on_touch_sample(&points((0.0, 0.0), (100.0, 0.0)));
        ctl.on_touch_sample(&points((0.0, 0.0), (400.0, 0.0)));
        ctl.reset();
        assert_eq!(ctl.level(), 0.0);

        ctl.reset();
        assert_eq!(ctl.level(), 0.0);
    }

    #[test]
    fn test_zoom_persists_across_gesture_sessions() {
        let mut ctl = ZoomGestureController::new();
        ctl.on_touch_sample(&points((0.0, 0.0), (100.0, 0.0)));
        ctl.on_touch_sample(&points((0.0, 0.0), (350.0, 0.0)));
        let level = ctl.level();
        assert!(level > 0.0);

        ctl.on_touch_end();
        assert_eq!(ctl.level(), level);
    }

    #[test]
    fn test_zoom_label_formatting() {
        assert_eq!(zoom_label(0.0), "1x");
        assert_eq!(zoom_label(0.12), "12%");
        assert_eq!(zoom_label(0.25), "25%");
        assert_eq!(zoom_label(1.0), "100%");
    }
}
