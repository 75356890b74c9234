//! Game state and core simulation types
//!
//! All state needed for deterministic replay lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{Explosion, Shake};
use super::gesture::GestureTracker;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Session ended (lives exhausted); terminal
    GameOver,
}

/// What a spawned object is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Fruit,
    Bomb,
}

/// Opaque handle to imagery owned by the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// Left/right halves of a fruit image, bisected along its vertical midline
/// by the asset layer at load time
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HalfSprites {
    pub left: SpriteHandle,
    pub right: SpriteHandle,
}

/// Whole image plus its precomputed halves for one fruit variety
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FruitSprites {
    pub whole: SpriteHandle,
    pub halves: HalfSprites,
}

/// Imagery available to the spawner. May be empty or partial; the engine
/// skips the corresponding draw intents rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteCatalog {
    pub fruits: Vec<FruitSprites>,
    pub bomb: Option<SpriteHandle>,
}

impl SpriteCatalog {
    /// Pick a random fruit variety, or `None` if no fruit imagery was loaded
    pub fn pick_fruit(&self, rng: &mut Pcg32) -> Option<FruitSprites> {
        if self.fruits.is_empty() {
            None
        } else {
            let idx = rng.random_range(0..self.fruits.len());
            Some(self.fruits[idx])
        }
    }
}

/// A spawned sliceable object (fruit or bomb)
///
/// Either alive (participates in collision + physics) or already marked for
/// removal; there is no half-sliced state. Slicing clears `alive` and spawns
/// two [`FragmentPiece`]s in the same resolution pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Per-instance gravity, pixels/frame²
    pub gravity: f32,
    pub alive: bool,
    pub sprite: Option<SpriteHandle>,
    /// Present for fruit only; bombs never fragment
    pub halves: Option<HalfSprites>,
}

impl Projectile {
    /// Advance one physics step; marks the projectile dead once it falls
    /// past the lower screen bound. Returns true if it died this step.
    pub fn advance(&mut self) -> bool {
        self.pos += self.vel;
        self.vel.y += self.gravity;
        if self.pos.y > SCREEN_HEIGHT + MISS_MARGIN {
            self.alive = false;
            return true;
        }
        false
    }
}

/// One half of a sliced fruit, with independent decaying physics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragmentPiece {
    pub sprite: Option<SpriteHandle>,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Accumulated rotation, degrees
    pub rotation: f32,
    /// Fixed angular rate, degrees/frame
    pub rot_rate: f32,
    /// Linearly decaying opacity; monotonically non-increasing
    pub alpha: u8,
}

impl FragmentPiece {
    /// Advance one physics step: integrate, rotate, fade
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.vel.y += FRAGMENT_GRAVITY;
        self.rotation += self.rot_rate;
        self.alpha = self.alpha.saturating_sub(2);
    }

    /// Fully faded or fallen below the screen
    pub fn expired(&self) -> bool {
        self.alpha == 0 || self.pos.y > SCREEN_HEIGHT + FRAGMENT_MARGIN
    }
}

/// Events produced by one simulation step, consumed by the audio/render
/// collaborator and the session driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fruit was sliced at the given position
    FruitSliced { pos: Vec2 },
    /// A bomb was hit while slicing
    BombDetonated { pos: Vec2 },
    /// A fruit fell past the bottom bound unsliced
    FruitMissed,
    /// Lives reached zero; the session is over
    GameOver { score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG threaded through spawn, fragment, and shake draws
    pub rng: Pcg32,
    /// Score; never goes negative (bomb penalty saturates at 0)
    pub score: u32,
    /// Remaining lives; decremented only by missed fruit
    pub lives: u32,
    /// Consecutive fruit slices with no intervening miss or bomb
    pub combo: u32,
    /// Logical clock: frames elapsed since session start
    pub frame: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Live sliceable objects
    pub projectiles: Vec<Projectile>,
    /// Post-slice fruit halves
    pub fragments: Vec<FragmentPiece>,
    /// Active explosion overlays
    pub explosions: Vec<Explosion>,
    /// Screen shake countdown + current offset
    pub shake: Shake,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    /// Fingertip velocity detector
    pub gesture: GestureTracker,
    /// Trail segment from the most recent gesture sample, for rendering
    pub trail: Option<(Vec2, Vec2)>,
    /// Imagery handles supplied by the embedder
    pub catalog: SpriteCatalog,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and no imagery
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(seed, SpriteCatalog::default())
    }

    /// Create a new session with imagery handles from the asset layer
    pub fn with_catalog(seed: u64, catalog: SpriteCatalog) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: STARTING_LIVES,
            combo: 0,
            frame: 0,
            phase: GamePhase::Playing,
            projectiles: Vec::new(),
            fragments: Vec::new(),
            explosions: Vec::new(),
            shake: Shake::default(),
            spawn_timer: 0,
            gesture: GestureTracker::default(),
            trail: None,
            catalog,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(7);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.combo, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.projectiles.is_empty());
        assert!(state.fragments.is_empty());
    }

    #[test]
    fn test_projectile_dies_past_lower_bound() {
        let mut p = Projectile {
            id: 1,
            kind: ProjectileKind::Fruit,
            pos: Vec2::new(400.0, SCREEN_HEIGHT + MISS_MARGIN - 1.0),
            vel: Vec2::new(0.0, 5.0),
            gravity: LAUNCH_GRAVITY,
            alive: true,
            sprite: None,
            halves: None,
        };
        assert!(p.advance());
        assert!(!p.alive);
    }

    #[test]
    fn test_fragment_fade_is_monotonic() {
        let mut f = FragmentPiece {
            sprite: None,
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(2.0, -8.0),
            rotation: 0.0,
            rot_rate: -3.0,
            alpha: 255,
        };
        let mut last = f.alpha;
        for _ in 0..200 {
            f.advance();
            assert!(f.alpha <= last);
            last = f.alpha;
        }
        assert_eq!(f.alpha, 0);
        assert!(f.expired());
    }

    #[test]
    fn test_empty_catalog_yields_no_sprite() {
        let catalog = SpriteCatalog::default();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(catalog.pick_fruit(&mut rng).is_none());
    }
}
