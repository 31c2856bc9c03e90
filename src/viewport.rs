//! Map viewport state: pan offset and zoom factor.
//!
//! The viewport owns the single affine transform applied to the map surface
//! (translate then scale). Rendering reads the current state; input events
//! mutate it through `pan`, `zoom_by`, and `reset`. There are no discrete
//! modes — just the continuous parameters.

use crate::{DEFAULT_MAP_CENTER_X, DEFAULT_MAP_CENTER_Y};

/// Zoom bounds enforced by the controller. Tighter than the page-level
/// configuration limits, so these are the ones that bind.
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;

/// Wheel zoom step per tick (out is the reciprocal), pivoted at the pointer.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Zoom step for the discrete zoom buttons, pivoted at the viewport center.
pub const BUTTON_ZOOM_STEP: f64 = 1.2;

/// Transient view state. Never persisted; every page load starts centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Viewport {
    /// Centered default: zoom 1, offset placing the default map midpoint at
    /// the screen origin.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            offset_x: -DEFAULT_MAP_CENTER_X,
            offset_y: -DEFAULT_MAP_CENTER_Y,
        }
    }

    /// Add raw pixel deltas to the offset, unclamped. Called continuously
    /// while a pointer drag is active.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.offset_x += delta_x;
        self.offset_y += delta_y;
    }

    /// Multiply zoom by `factor`, clamped to [MIN_ZOOM, MAX_ZOOM], keeping
    /// the map point under `pivot` (screen coordinates) visually stationary.
    /// If clamping leaves the zoom unchanged, the offset is untouched too,
    /// so repeated calls at a boundary cannot drift the view.
    pub fn zoom_by(&mut self, factor: f64, pivot_x: f64, pivot_y: f64) {
        let prev_zoom = self.zoom;
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == prev_zoom {
            return;
        }

        let ratio = new_zoom / prev_zoom;
        self.offset_x = pivot_x - (pivot_x - self.offset_x) * ratio;
        self.offset_y = pivot_y - (pivot_y - self.offset_y) * ratio;
        self.zoom = new_zoom;
    }

    /// Restore the default zoom and offset.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The map-space point currently under a screen-space position.
    pub fn map_point_at(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            (screen_x - self.offset_x) / self.zoom,
            (screen_y - self.offset_y) / self.zoom,
        )
    }

    /// CSS transform string applied to the map surface element.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset_x, self.offset_y, self.zoom
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_centered() {
        let vp = Viewport::new();
        assert_eq!(vp.zoom, 1.0);
        assert_eq!(vp.offset_x, -5000.0);
        assert_eq!(vp.offset_y, -5000.0);
    }

    #[test]
    fn test_pan_accumulates_unclamped() {
        let mut vp = Viewport::new();
        vp.pan(10.0, -20.0);
        vp.pan(-100000.0, 5.0);
        assert_eq!(vp.offset_x, -5000.0 + 10.0 - 100000.0);
        assert_eq!(vp.offset_y, -5000.0 - 20.0 + 5.0);
    }

    #[test]
    fn test_zoom_clamps_at_max() {
        let mut vp = Viewport::new();
        for _ in 0..50 {
            vp.zoom_by(BUTTON_ZOOM_STEP, 400.0, 300.0);
        }
        assert_eq!(vp.zoom, MAX_ZOOM);
    }

    #[test]
    fn test_zoom_clamps_at_min() {
        let mut vp = Viewport::new();
        for _ in 0..50 {
            vp.zoom_by(1.0 / BUTTON_ZOOM_STEP, 400.0, 300.0);
        }
        assert_eq!(vp.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_at_boundary_does_not_drift_offset() {
        let mut vp = Viewport::new();
        while vp.zoom < MAX_ZOOM {
            vp.zoom_by(WHEEL_ZOOM_STEP, 123.0, 456.0);
        }
        let pinned = (vp.offset_x, vp.offset_y);
        for _ in 0..10 {
            vp.zoom_by(WHEEL_ZOOM_STEP, 700.0, 100.0);
        }
        assert_eq!((vp.offset_x, vp.offset_y), pinned);
    }

    #[test]
    fn test_zoom_keeps_pivot_point_stationary() {
        let mut vp = Viewport::new();
        vp.pan(37.0, -12.0);

        let pivot = (320.0, 240.0);
        let before = vp.map_point_at(pivot.0, pivot.1);
        vp.zoom_by(WHEEL_ZOOM_STEP, pivot.0, pivot.1);
        let after = vp.map_point_at(pivot.0, pivot.1);

        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_then_in_recovers_pivot() {
        let mut vp = Viewport::new();
        let pivot = (50.0, 900.0);
        let before = vp.map_point_at(pivot.0, pivot.1);
        vp.zoom_by(1.0 / WHEEL_ZOOM_STEP, pivot.0, pivot.1);
        vp.zoom_by(WHEEL_ZOOM_STEP, pivot.0, pivot.1);
        let after = vp.map_point_at(pivot.0, pivot.1);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
        assert!((vp.zoom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut vp = Viewport::new();
        vp.pan(999.0, -999.0);
        vp.zoom_by(BUTTON_ZOOM_STEP, 0.0, 0.0);
        vp.reset();
        assert_eq!(vp, Viewport::new());
    }

    #[test]
    fn test_transform_css_reads_current_state() {
        let vp = Viewport::new();
        assert_eq!(vp.transform_css(), "translate(-5000px, -5000px) scale(1)");
    }
}
