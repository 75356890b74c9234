//! Time-bounded visual effects
//!
//! Explosion rings and screen shake run off the logical frame clock, not
//! wall-clock time, so their lifetimes are deterministic and testable.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Expanding ring overlay started by a bomb detonation.
///
/// Radius and opacity are pure functions of elapsed/duration; there is no
/// independent physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explosion {
    pub start_frame: u64,
}

impl Explosion {
    pub fn new(start_frame: u64) -> Self {
        Self { start_frame }
    }

    /// Elapsed fraction of the explosion lifetime, clamped to [0, 1]
    fn progress(&self, frame: u64) -> f32 {
        let elapsed = frame.saturating_sub(self.start_frame) as f32;
        (elapsed / EXPLOSION_DURATION_FRAMES as f32).min(1.0)
    }

    /// Still drawable at the given frame
    pub fn active(&self, frame: u64) -> bool {
        frame.saturating_sub(self.start_frame) <= EXPLOSION_DURATION_FRAMES as u64
    }

    /// Ring radius in pixels at the given frame
    pub fn radius(&self, frame: u64) -> f32 {
        EXPLOSION_MAX_RADIUS * self.progress(frame)
    }

    /// Overlay opacity at the given frame (255 at birth, 0 at expiry)
    pub fn alpha(&self, frame: u64) -> u8 {
        (255.0 * (1.0 - self.progress(frame))) as u8
    }
}

/// Screen shake countdown driving a transient render offset.
///
/// While the counter is positive the offset is resampled each frame from the
/// seeded RNG; once it reaches zero the offset snaps back to the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shake {
    pub ticks: u32,
    pub offset: Vec2,
}

impl Shake {
    /// Restart the countdown (bomb detonation)
    pub fn trigger(&mut self) {
        self.ticks = SHAKE_FRAMES;
    }

    /// Advance one frame: resample the offset while active, reset when done
    pub fn step(&mut self, rng: &mut Pcg32) {
        if self.ticks > 0 {
            self.ticks -= 1;
            self.offset = Vec2::new(
                rng.random_range(-SHAKE_AMPLITUDE..=SHAKE_AMPLITUDE),
                rng.random_range(-SHAKE_AMPLITUDE..=SHAKE_AMPLITUDE),
            );
        } else {
            self.offset = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_explosion_derivation() {
        let ex = Explosion::new(100);
        // At birth: zero radius, full opacity
        assert_eq!(ex.radius(100), 0.0);
        assert_eq!(ex.alpha(100), 255);
        // Halfway: half radius, half opacity
        let mid = 100 + EXPLOSION_DURATION_FRAMES as u64 / 2;
        assert!((ex.radius(mid) - EXPLOSION_MAX_RADIUS / 2.0).abs() < 1e-3);
        assert_eq!(ex.alpha(mid), 127);
        // Past the duration: inactive, fully transparent
        let end = 100 + EXPLOSION_DURATION_FRAMES as u64;
        assert!(ex.active(end));
        assert!(!ex.active(end + 1));
        assert_eq!(ex.alpha(end), 0);
    }

    #[test]
    fn test_shake_countdown_and_reset() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut shake = Shake::default();
        shake.trigger();
        assert_eq!(shake.ticks, SHAKE_FRAMES);

        for _ in 0..SHAKE_FRAMES {
            shake.step(&mut rng);
            assert!(shake.offset.x.abs() <= SHAKE_AMPLITUDE);
            assert!(shake.offset.y.abs() <= SHAKE_AMPLITUDE);
        }
        assert_eq!(shake.ticks, 0);

        shake.step(&mut rng);
        assert_eq!(shake.offset, Vec2::ZERO);
    }
}
