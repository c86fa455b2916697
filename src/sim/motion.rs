//! Straight-line seeking motion
//!
//! Everything that moves in the arena does so by stepping toward a target
//! point at its current speed. There is no velocity or inertia.

use glam::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Step vector that moves `from` toward `to` by at most `speed`.
///
/// Per-axis magnitudes are `|delta| * speed / distance`, sign-corrected toward
/// the target. A target closer than `speed` is reached exactly instead of
/// overshot. Zero distance yields a zero step.
pub fn step_toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let dist = distance(from, to);
    if dist == 0.0 {
        return Vec2::ZERO;
    }
    if dist <= speed {
        return to - from;
    }

    let delta = to - from;
    let mut step = delta.abs() * (speed / dist);
    if to.x < from.x {
        step.x = -step.x;
    }
    if to.y < from.y {
        step.y = -step.y;
    }
    step
}

/// Move `pos` toward `target` if it is within `range`.
///
/// Returns false (and leaves `pos` alone) when the target is out of range.
/// Pass `f32::INFINITY` for free roaming.
pub fn seek_toward(pos: &mut Vec2, speed: f32, target: Vec2, range: f32) -> bool {
    let dist = distance(*pos, target);
    if dist > range {
        return false;
    }
    // Already there: nothing to do, and no division by zero
    if dist == 0.0 {
        return true;
    }

    *pos += step_toward(*pos, target, speed);
    true
}
