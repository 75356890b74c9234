//! Fixed-step simulation tick
//!
//! One call advances the session exactly one frame in a fixed order:
//! gesture sample → slice resolution → physics → effects → purge → spawn.
//! Slice resolution runs before physics, so a projectile sliced this frame
//! never also counts as missed. Removal is mark-then-compact: entities are
//! flagged during resolution and swept in a single retain pass.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::effects::Explosion;
use super::gesture::GestureSample;
use super::state::{FragmentPiece, GameEvent, GamePhase, GameState, Projectile, ProjectileKind};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Fingertip sample in normalized [0,1]² space, absent when no hand was
    /// detected this frame
    pub fingertip: Option<Vec2>,
}

/// Advance the game state by one frame, returning the events it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }
    state.frame += 1;

    // Gesture: convert the normalized sample to pixels and classify it
    let fingertip = input.fingertip.map(crate::norm_to_screen);
    let sample = state.gesture.ingest(fingertip);
    state.trail = sample.trail;

    // Slice resolution, before physics: slices preempt the missed check
    resolve_slices(state, &sample, &mut events);

    // Physics step for everything still live
    advance_projectiles(state, &mut events);
    for fragment in &mut state.fragments {
        fragment.advance();
    }

    // Effects run off the logical frame clock
    let frame = state.frame;
    state.explosions.retain(|e| e.active(frame));
    state.shake.step(&mut state.rng);

    // Single compaction pass after all events are resolved
    state.projectiles.retain(|p| p.alive);
    state.fragments.retain(|f| !f.expired());

    maybe_spawn(state);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over, final score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}

/// Resolve the current gesture against all live projectiles.
///
/// Every projectile whose box contains the fingertip is resolved
/// independently; there is no single-hit-per-frame limit.
fn resolve_slices(state: &mut GameState, sample: &GestureSample, events: &mut Vec<GameEvent>) {
    if !sample.slicing {
        return;
    }
    let Some(finger) = sample.pos else { return };

    for idx in collision::overlapping(&state.projectiles, finger) {
        let (kind, pos, halves) = {
            let p = &state.projectiles[idx];
            (p.kind, p.pos, p.halves)
        };

        match kind {
            ProjectileKind::Bomb => {
                state.explosions.push(Explosion::new(state.frame));
                state.score = state.score.saturating_sub(BOMB_PENALTY);
                state.combo = 0;
                state.shake.trigger();
                log::debug!("bomb detonated at {pos}");
                events.push(GameEvent::BombDetonated { pos });
            }
            ProjectileKind::Fruit => {
                // Halves diverge left-down and right-down, counter-rotating
                let quarter = OBJECT_SIZE / 4.0;
                let left = FragmentPiece {
                    sprite: halves.map(|h| h.left),
                    pos: Vec2::new(pos.x - quarter, pos.y),
                    vel: Vec2::new(
                        -state.rng.random_range(2.0..=6.0),
                        state.rng.random_range(-14.0..=-6.0),
                    ),
                    rotation: 0.0,
                    rot_rate: -state.rng.random_range(2.0..=6.0),
                    alpha: 255,
                };
                let right = FragmentPiece {
                    sprite: halves.map(|h| h.right),
                    pos: Vec2::new(pos.x + quarter, pos.y),
                    vel: Vec2::new(
                        state.rng.random_range(2.0..=6.0),
                        state.rng.random_range(-14.0..=-6.0),
                    ),
                    rotation: 0.0,
                    rot_rate: state.rng.random_range(2.0..=6.0),
                    alpha: 255,
                };
                state.fragments.push(left);
                state.fragments.push(right);
                state.score += 1;
                state.combo += 1;
                events.push(GameEvent::FruitSliced { pos });
            }
        }

        // Destroyed atomically; never observed half-sliced
        state.projectiles[idx].alive = false;
    }
}

/// Integrate live projectiles and apply the missed-fruit penalty.
///
/// Projectiles already resolved by a slice this frame are skipped entirely.
fn advance_projectiles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for p in &mut state.projectiles {
        if !p.alive {
            continue;
        }
        if p.advance() && p.kind == ProjectileKind::Fruit {
            state.lives = state.lives.saturating_sub(1);
            state.combo = 0;
            events.push(GameEvent::FruitMissed);
        }
    }
}

/// Spawn policy: once the interval counter elapses and the live-object cap
/// allows it, launch exactly one new projectile and reset the counter.
fn maybe_spawn(state: &mut GameState) {
    state.spawn_timer += 1;
    if state.spawn_timer > SPAWN_INTERVAL_FRAMES && state.projectiles.len() < MAX_LIVE_OBJECTS {
        spawn_projectile(state);
        state.spawn_timer = 0;
    }
}

/// Launch one projectile from just below the bottom edge. Always succeeds.
fn spawn_projectile(state: &mut GameState) {
    let kind = if state.rng.random_bool(BOMB_PROBABILITY) {
        ProjectileKind::Bomb
    } else {
        ProjectileKind::Fruit
    };

    let x = state
        .rng
        .random_range(SPAWN_MARGIN_X..=SCREEN_WIDTH - SPAWN_MARGIN_X);
    let vx = state.rng.random_range(-4.0..=4.0);
    let vy = state.rng.random_range(-23.0..=-15.0);

    let (sprite, halves) = match kind {
        ProjectileKind::Bomb => (state.catalog.bomb, None),
        ProjectileKind::Fruit => {
            let fruit = state.catalog.pick_fruit(&mut state.rng);
            (fruit.map(|f| f.whole), fruit.map(|f| f.halves))
        }
    };

    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        kind,
        pos: Vec2::new(x, SCREEN_HEIGHT + SPAWN_BELOW_OFFSET),
        vel: Vec2::new(vx, vy),
        gravity: LAUNCH_GRAVITY,
        alive: true,
        sprite,
        halves,
    });
}
