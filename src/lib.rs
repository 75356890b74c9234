//! Slice Rush - a fruit-slicing reflex game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectile physics, slice detection, scoring)
//! - `frame`: Per-frame output intents for the rendering/audio collaborator
//! - `perception`: Fingertip input boundary (hand tracking lives outside this crate)
//! - `settings`: Player preferences

pub mod frame;
pub mod perception;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Target frame rate; the simulation advances one fixed step per frame
    pub const TARGET_FPS: u32 = 60;

    /// Sliceable object bounding box (square, centered on position)
    pub const OBJECT_SIZE: f32 = 96.0;

    /// Frames the spawn counter must exceed before a new object may launch
    pub const SPAWN_INTERVAL_FRAMES: u32 = 3;
    /// Cap on simultaneously live projectiles
    pub const MAX_LIVE_OBJECTS: usize = 6;
    /// Probability a spawned object is a bomb
    pub const BOMB_PROBABILITY: f64 = 0.12;
    /// Horizontal spawn margin from either screen edge
    pub const SPAWN_MARGIN_X: f32 = 150.0;
    /// Objects launch from this far below the bottom edge
    pub const SPAWN_BELOW_OFFSET: f32 = 80.0;

    /// Gravity applied to projectiles, pixels/frame²
    pub const LAUNCH_GRAVITY: f32 = 0.35;
    /// Gravity applied to slice fragments, pixels/frame²
    pub const FRAGMENT_GRAVITY: f32 = 0.4;

    /// A projectile falling past SCREEN_HEIGHT + this margin is gone
    pub const MISS_MARGIN: f32 = 100.0;
    /// Fragments are purged past SCREEN_HEIGHT + this margin
    pub const FRAGMENT_MARGIN: f32 = 200.0;

    /// Fingertip must travel more than this many pixels in one frame to slice
    pub const SLICE_SPEED_THRESHOLD: f32 = 35.0;

    /// Starting lives; each missed fruit costs one
    pub const STARTING_LIVES: u32 = 30;
    /// Score penalty for detonating a bomb (floored at 0)
    pub const BOMB_PENALTY: u32 = 5;

    /// Screen shake duration after a bomb detonation, frames
    pub const SHAKE_FRAMES: u32 = 18;
    /// Shake offset is resampled each frame in [-AMPLITUDE, AMPLITUDE]²
    pub const SHAKE_AMPLITUDE: f32 = 10.0;

    /// Explosion overlay lifetime (1.0 s at 60 Hz)
    pub const EXPLOSION_DURATION_FRAMES: u32 = 60;
    /// Explosion ring grows to the larger screen dimension
    pub const EXPLOSION_MAX_RADIUS: f32 = 1280.0;
    /// Explosion overlay color (R, G, B)
    pub const EXPLOSION_COLOR: [u8; 3] = [255, 180, 50];
}

/// Convert a normalized [0,1]² fingertip sample to screen pixels
#[inline]
pub fn norm_to_screen(p: Vec2) -> Vec2 {
    Vec2::new(p.x * consts::SCREEN_WIDTH, p.y * consts::SCREEN_HEIGHT)
}
