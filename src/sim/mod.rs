//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical step per rendered frame
//! - Seeded RNG only, threaded explicitly through spawn and slice resolution
//! - Mark-then-compact entity removal (no mutation during iteration)
//! - No rendering, audio, or perception dependencies

pub mod collision;
pub mod effects;
pub mod gesture;
pub mod state;
pub mod tick;

pub use collision::{object_contains, overlapping};
pub use effects::{Explosion, Shake};
pub use gesture::{GestureSample, GestureTracker};
pub use state::{
    FragmentPiece, FruitSprites, GameEvent, GamePhase, GameState, HalfSprites, Projectile,
    ProjectileKind, SpriteCatalog, SpriteHandle,
};
pub use tick::{TickInput, tick};
