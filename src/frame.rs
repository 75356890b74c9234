//! Per-frame output intents
//!
//! The engine never draws or plays anything itself; it describes the frame as
//! a list of draw commands and audio cues for the rendering/audio
//! collaborator to consume. Entities with no sprite handle (asset failed to
//! load) are simply skipped, never an error.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::EXPLOSION_COLOR;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SpriteHandle};

/// One draw intent, in back-to-front order within the frame list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Full-screen background
    Background,
    /// Camera preview passthrough (top-right corner slot)
    CameraPreview,
    /// Fingertip trail segment from the previous to the current sample
    Trail { from: Vec2, to: Vec2 },
    /// A live projectile's image, centered on its position
    Sprite { handle: SpriteHandle, pos: Vec2 },
    /// A fragment's image, rotated and alpha-blended
    Fragment {
        handle: SpriteHandle,
        pos: Vec2,
        rotation: f32,
        alpha: u8,
    },
    /// Expanding explosion ring overlay
    ExplosionOverlay {
        radius: f32,
        alpha: u8,
        color: [u8; 3],
    },
    /// Score / lives / combo readout
    Hud { score: u32, lives: u32, combo: u32 },
}

/// Sound effect triggers for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// A fruit was sliced
    Slice,
    /// A bomb went off
    Explosion,
}

/// Everything the rendering/audio collaborator needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePacket {
    pub draws: Vec<DrawCommand>,
    pub sounds: Vec<AudioCue>,
    /// Whole-frame render offset from screen shake
    pub shake_offset: Vec2,
}

/// Compose the draw list and audio cues for the current state
pub fn compose(state: &GameState, events: &[GameEvent], settings: &Settings) -> FramePacket {
    let mut draws = Vec::with_capacity(
        4 + state.projectiles.len() + state.fragments.len() + state.explosions.len(),
    );

    draws.push(DrawCommand::Background);
    draws.push(DrawCommand::CameraPreview);

    if settings.trail {
        if let Some((from, to)) = state.trail {
            draws.push(DrawCommand::Trail { from, to });
        }
    }

    for p in &state.projectiles {
        // Missing imagery: skip the draw, keep playing
        if let Some(handle) = p.sprite {
            draws.push(DrawCommand::Sprite { handle, pos: p.pos });
        }
    }

    for f in &state.fragments {
        if let Some(handle) = f.sprite {
            draws.push(DrawCommand::Fragment {
                handle,
                pos: f.pos,
                rotation: f.rotation,
                alpha: f.alpha,
            });
        }
    }

    for ex in &state.explosions {
        draws.push(DrawCommand::ExplosionOverlay {
            radius: ex.radius(state.frame),
            alpha: ex.alpha(state.frame),
            color: EXPLOSION_COLOR,
        });
    }

    draws.push(DrawCommand::Hud {
        score: state.score,
        lives: state.lives,
        combo: state.combo,
    });

    // Muted players get no play intents at all
    let sounds = if settings.effective_sfx_volume() > 0.0 {
        audio_cues(events)
    } else {
        Vec::new()
    };

    let shake_offset = if settings.effective_screen_shake() {
        state.shake.offset
    } else {
        Vec2::ZERO
    };

    FramePacket {
        draws,
        sounds,
        shake_offset,
    }
}

/// Map this frame's events to sound triggers
pub fn audio_cues(events: &[GameEvent]) -> Vec<AudioCue> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::FruitSliced { .. } => Some(AudioCue::Slice),
            GameEvent::BombDetonated { .. } => Some(AudioCue::Explosion),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_compose_skips_missing_sprites() {
        // Default catalog is empty, so spawned projectiles carry no handles
        let mut state = GameState::new(11);
        let input = TickInput::default();
        for _ in 0..10 {
            tick(&mut state, &input);
        }
        assert!(!state.projectiles.is_empty());

        let packet = compose(&state, &[], &Settings::default());
        assert!(
            !packet
                .draws
                .iter()
                .any(|d| matches!(d, DrawCommand::Sprite { .. }))
        );
        // HUD is always present and last
        assert!(matches!(packet.draws.last(), Some(DrawCommand::Hud { .. })));
    }

    #[test]
    fn test_audio_cues_from_events() {
        let events = vec![
            GameEvent::FruitSliced { pos: Vec2::ZERO },
            GameEvent::FruitMissed,
            GameEvent::BombDetonated { pos: Vec2::ZERO },
        ];
        assert_eq!(audio_cues(&events), vec![AudioCue::Slice, AudioCue::Explosion]);
    }

    #[test]
    fn test_trail_preference_gates_trail_draw() {
        // Two fingertip frames leave a trail segment in the state
        let mut state = GameState::new(13);
        tick(&mut state, &TickInput { fingertip: Some(Vec2::new(0.2, 0.5)) });
        tick(&mut state, &TickInput { fingertip: Some(Vec2::new(0.4, 0.5)) });
        assert!(state.trail.is_some());

        let mut settings = Settings::default();
        let packet = compose(&state, &[], &settings);
        assert!(
            packet
                .draws
                .iter()
                .any(|d| matches!(d, DrawCommand::Trail { .. }))
        );

        settings.trail = false;
        let packet = compose(&state, &[], &settings);
        assert!(
            !packet
                .draws
                .iter()
                .any(|d| matches!(d, DrawCommand::Trail { .. }))
        );
    }

    #[test]
    fn test_muted_session_emits_no_sound_cues() {
        let state = GameState::new(14);
        let events = vec![GameEvent::FruitSliced { pos: Vec2::ZERO }];

        let mut settings = Settings::default();
        assert!(!compose(&state, &events, &settings).sounds.is_empty());

        settings.master_volume = 0.0;
        assert!(compose(&state, &events, &settings).sounds.is_empty());
    }

    #[test]
    fn test_reduced_motion_suppresses_shake_offset() {
        let mut state = GameState::new(12);
        state.shake.trigger();
        let input = TickInput::default();
        tick(&mut state, &input);
        assert_ne!(state.shake.offset, Vec2::ZERO);

        let mut settings = Settings::default();
        settings.reduced_motion = true;
        let packet = compose(&state, &[], &settings);
        assert_eq!(packet.shake_offset, Vec2::ZERO);
    }
}
