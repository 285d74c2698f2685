//! Zoom factor arithmetic.
//!
//! Wheel input and the toolbar buttons deliberately use different step sizes.

use tracing::trace;

pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 5.0;
pub const DEFAULT_SCALE: f32 = 1.0;

/// Scale change per wheel notch.
pub const WHEEL_STEP: f32 = 0.1;
/// Scale change per zoom button press.
pub const BUTTON_STEP: f32 = 0.2;

/// Resolution of the scale grid. Steps land exactly on it, so repeated zooming
/// in and out returns to the same value instead of drifting.
const SCALE_RESOLUTION: f32 = 1000.0;

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Applies one wheel notch.
///
/// `delta_y > 0` (scrolling down, away from the user) zooms out; `delta_y < 0`
/// zooms in. A zero or NaN delta leaves the scale untouched.
pub fn zoom_by_wheel(delta_y: f32, current: f32) -> f32 {
    let next = if delta_y > 0.0 {
        step(current, ZoomDirection::Out, WHEEL_STEP)
    } else if delta_y < 0.0 {
        step(current, ZoomDirection::In, WHEEL_STEP)
    } else {
        current
    };
    trace!(delta_y, current, next, "wheel zoom");
    next
}

pub fn zoom_in_button(current: f32) -> f32 {
    step(current, ZoomDirection::In, BUTTON_STEP)
}

pub fn zoom_out_button(current: f32) -> f32 {
    step(current, ZoomDirection::Out, BUTTON_STEP)
}

/// Moves `current` one step of `magnitude` in `direction`, saturating at the range ends.
pub fn step(current: f32, direction: ZoomDirection, magnitude: f32) -> f32 {
    let delta = match direction {
        ZoomDirection::In => magnitude,
        ZoomDirection::Out => -magnitude,
    };
    clamp_scale(current + delta)
}

/// Snaps `value` onto the scale grid and clamps it into `[MIN_SCALE, MAX_SCALE]`.
///
/// Non-finite input falls back to [`DEFAULT_SCALE`].
pub fn clamp_scale(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_SCALE;
    }
    let snapped = (value * SCALE_RESOLUTION).round() / SCALE_RESOLUTION;
    snapped.clamp(MIN_SCALE, MAX_SCALE)
}

/// Whether an image at `scale` is larger than its fitted size and can be dragged.
pub fn allows_drag(scale: f32) -> bool {
    scale > DEFAULT_SCALE
}
