//! Fingertip-vs-object collision tests
//!
//! Objects are axis-aligned square boxes centered on their position; the
//! fingertip is a point. Every live object containing the fingertip during a
//! slicing frame resolves independently (no single-hit-per-frame limit).

use glam::Vec2;

use super::state::Projectile;
use crate::consts::OBJECT_SIZE;

/// Point-in-bounding-box containment against the fixed object box
#[inline]
pub fn object_contains(center: Vec2, point: Vec2) -> bool {
    let half = OBJECT_SIZE / 2.0;
    (point.x - center.x).abs() <= half && (point.y - center.y).abs() <= half
}

/// Indices of all live projectiles whose box contains the fingertip.
///
/// Indices are ascending, so callers can resolve each hit in spawn order.
pub fn overlapping(projectiles: &[Projectile], point: Vec2) -> Vec<usize> {
    projectiles
        .iter()
        .enumerate()
        .filter(|(_, p)| p.alive && object_contains(p.pos, point))
        .map(|(idx, _)| idx)
        .collect()
}
