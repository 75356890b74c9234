//! Fingertip velocity slice detection
//!
//! Turns a sequence of raw fingertip positions into a boolean "slicing now"
//! signal plus a trail segment for rendering. The detector is edge-triggered
//! on velocity, not presence: a fast pass over an object slices it, resting
//! a finger on it does not.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SLICE_SPEED_THRESHOLD;

/// Result of ingesting one fingertip sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// True only when both this and the previous frame had a fingertip and
    /// the distance between them exceeds the slice threshold
    pub slicing: bool,
    /// This frame's fingertip in screen pixels, if a hand was detected
    pub pos: Option<Vec2>,
    /// Segment from the previous to the current position, when both exist
    pub trail: Option<(Vec2, Vec2)>,
}

/// Per-session gesture state: just the previous fingertip position.
///
/// Absence of a detected hand clears the previous position immediately, so a
/// tracking gap can never pair a stale position with a fresh one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureTracker {
    prev: Option<Vec2>,
}

impl GestureTracker {
    /// Ingest one optional fingertip sample (screen pixels) and classify it.
    ///
    /// The previous position is unconditionally replaced by the current one
    /// (or cleared when absent) for the next frame.
    pub fn ingest(&mut self, fingertip: Option<Vec2>) -> GestureSample {
        match fingertip {
            Some(cur) => {
                let slicing = self
                    .prev
                    .is_some_and(|prev| prev.distance(cur) > SLICE_SPEED_THRESHOLD);
                let trail = self.prev.map(|prev| (prev, cur));
                self.prev = Some(cur);
                GestureSample {
                    slicing,
                    pos: Some(cur),
                    trail,
                }
            }
            None => {
                self.prev = None;
                GestureSample {
                    slicing: false,
                    pos: None,
                    trail: None,
                }
            }
        }
    }
}
