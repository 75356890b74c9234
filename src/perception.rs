//! Fingertip input boundary
//!
//! Hand tracking happens outside this crate (camera + landmark detection).
//! The engine only needs one optional normalized fingertip position per
//! frame, delivered through [`FingertipSource`]. Consumers don't care
//! whether samples come from real hardware or a synthetic source.
//!
//! Failure model: a frame with no detected hand is `Ok(None)` and simply
//! means "no slicing this frame"; an unrecoverable device fault is an `Err`
//! and ends the session.

use std::fmt;

use glam::Vec2;

/// Unrecoverable perception failure. Transient detection gaps are NOT errors;
/// they are `Ok(None)` samples and self-heal on the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerceptionError {
    /// The capture device stopped delivering frames
    DeviceLost(String),
}

impl fmt::Display for PerceptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptionError::DeviceLost(reason) => write!(f, "capture device lost: {reason}"),
        }
    }
}

impl std::error::Error for PerceptionError {}

/// Anything that can deliver one fingertip sample per frame.
///
/// Positions are in normalized [0,1]² space; the engine converts to screen
/// pixels. When the upstream detector reports several hands, implementations
/// report only the first one's index fingertip.
pub trait FingertipSource {
    fn sample(&mut self) -> Result<Option<Vec2>, PerceptionError>;
}

/// Source that never sees a hand. Useful for soak tests and benchmarks.
#[derive(Debug, Default)]
pub struct NullSource;

impl FingertipSource for NullSource {
    fn sample(&mut self) -> Result<Option<Vec2>, PerceptionError> {
        Ok(None)
    }
}

/// Replays a fixed sequence of samples, then reports no hand forever
#[derive(Debug)]
pub struct ScriptedSource {
    samples: Vec<Option<Vec2>>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(samples: Vec<Option<Vec2>>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl FingertipSource for ScriptedSource {
    fn sample(&mut self) -> Result<Option<Vec2>, PerceptionError> {
        let sample = self.samples.get(self.cursor).copied().flatten();
        self.cursor += 1;
        Ok(sample)
    }
}

/// Synthetic hand sweeping back and forth across the lower screen, fast
/// enough to slice every frame. Drives the headless demo.
#[derive(Debug)]
pub struct SweepSource {
    frame: u32,
    /// Horizontal speed in normalized units per frame
    speed: f32,
}

impl SweepSource {
    pub fn new(speed: f32) -> Self {
        Self { frame: 0, speed }
    }
}

impl Default for SweepSource {
    fn default() -> Self {
        // ~100 px/frame at 1280 wide, well above the slice threshold
        Self::new(0.08)
    }
}

impl FingertipSource for SweepSource {
    fn sample(&mut self) -> Result<Option<Vec2>, PerceptionError> {
        self.frame += 1;
        // Triangle wave across [0,1], with a short off-screen gap at each end
        let span = (self.frame as f32 * self.speed) % 2.4;
        let x = if span < 1.0 {
            span
        } else if span < 1.2 {
            return Ok(None); // hand briefly leaves the frame
        } else if span < 2.2 {
            2.2 - span
        } else {
            return Ok(None);
        };
        let y = 0.7 + 0.1 * (self.frame as f32 * 0.05).sin();
        Ok(Some(Vec2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_source_never_detects() {
        let mut source = NullSource;
        for _ in 0..10 {
            assert_eq!(source.sample(), Ok(None));
        }
    }

    #[test]
    fn test_scripted_source_replays_then_goes_quiet() {
        let mut source = ScriptedSource::new(vec![
            Some(Vec2::new(0.1, 0.5)),
            None,
            Some(Vec2::new(0.9, 0.5)),
        ]);
        assert_eq!(source.sample(), Ok(Some(Vec2::new(0.1, 0.5))));
        assert_eq!(source.sample(), Ok(None));
        assert_eq!(source.sample(), Ok(Some(Vec2::new(0.9, 0.5))));
        assert_eq!(source.sample(), Ok(None));
        assert_eq!(source.sample(), Ok(None));
    }

    #[test]
    fn test_sweep_source_stays_in_bounds_and_moves_fast() {
        let mut source = SweepSource::default();
        let mut prev: Option<Vec2> = None;
        let mut sliced_frames = 0;
        for _ in 0..200 {
            if let Some(p) = source.sample().unwrap() {
                assert!((0.0..=1.0).contains(&p.x));
                assert!((0.0..=1.0).contains(&p.y));
                if let Some(q) = prev {
                    if crate::norm_to_screen(p).distance(crate::norm_to_screen(q))
                        > crate::consts::SLICE_SPEED_THRESHOLD
                    {
                        sliced_frames += 1;
                    }
                }
                prev = Some(p);
            } else {
                prev = None;
            }
        }
        assert!(sliced_frames > 50);
    }
}
