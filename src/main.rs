//! Slice Rush headless session driver
//!
//! Runs the simulation at the target frame rate with a synthetic fingertip
//! source and reports the final score at exit. Rendering and hand tracking
//! are external collaborators; this binary exercises the engine end to end
//! without them.

use std::time::{Duration, Instant};

use clap::Parser;

use slice_rush::consts::TARGET_FPS;
use slice_rush::frame;
use slice_rush::perception::{FingertipSource, NullSource, SweepSource};
use slice_rush::sim::{
    FruitSprites, GameEvent, GamePhase, GameState, HalfSprites, SpriteCatalog, SpriteHandle,
    TickInput, tick,
};
use slice_rush::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "slice-rush",
    about = "Headless driver for the fruit-slicing reflex engine"
)]
struct Args {
    /// Run seed; defaults to wall-clock milliseconds when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Frame budget before the session quits (the external quit signal)
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Drive the session with a synthetic sweeping fingertip
    #[arg(long)]
    demo: bool,

    /// Pace frames at the 60 Hz target instead of free-running
    #[arg(long)]
    realtime: bool,

    /// Print the final game state as JSON
    #[arg(long)]
    dump: bool,
}

fn wall_clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Stand-in handles for the imagery the asset layer would load
fn demo_catalog() -> SpriteCatalog {
    let fruits = (0..3)
        .map(|i| FruitSprites {
            whole: SpriteHandle(i * 3),
            halves: HalfSprites {
                left: SpriteHandle(i * 3 + 1),
                right: SpriteHandle(i * 3 + 2),
            },
        })
        .collect();
    SpriteCatalog {
        fruits,
        bomb: Some(SpriteHandle(9)),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let settings = Settings::load();
    // Materialize the settings file on first run so players can edit it
    settings.save();

    let seed = args.seed.unwrap_or_else(wall_clock_seed);
    log::info!(
        "Slice Rush starting: seed={}, frames={}, demo={}",
        seed,
        args.frames,
        args.demo
    );

    let mut state = GameState::with_catalog(seed, demo_catalog());
    let mut source: Box<dyn FingertipSource> = if args.demo {
        Box::new(SweepSource::default())
    } else {
        Box::new(NullSource)
    };

    let frame_budget = Duration::from_secs(1) / TARGET_FPS;
    let mut slices = 0u32;
    let mut detonations = 0u32;
    let mut fps_window = Instant::now();
    let mut fps_frames = 0u32;

    // One fixed logical step per frame until the quit budget or GameOver
    for _ in 0..args.frames {
        let frame_start = Instant::now();

        let fingertip = match source.sample() {
            Ok(sample) => sample,
            Err(e) => {
                // Unrecoverable input fault: end the session cleanly
                log::error!("Perception failed: {e}");
                break;
            }
        };

        let events = tick(&mut state, &TickInput { fingertip });
        let packet = frame::compose(&state, &events, &settings);

        for cue in &packet.sounds {
            match cue {
                frame::AudioCue::Slice => slices += 1,
                frame::AudioCue::Explosion => detonations += 1,
            }
        }

        if settings.show_fps {
            fps_frames += 1;
            if fps_window.elapsed() >= Duration::from_secs(1) {
                log::info!("fps: {fps_frames}");
                fps_frames = 0;
                fps_window = Instant::now();
            }
        }

        if events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            break;
        }

        if args.realtime {
            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            }
        }
    }

    log::info!(
        "Session over after {} frames: {} slices, {} detonations",
        state.frame,
        slices,
        detonations
    );
    if state.phase == GamePhase::GameOver {
        println!("Game Over. Final score: {}", state.score);
    } else {
        println!("Session ended. Final score: {}", state.score);
    }

    if args.dump {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to dump state: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_flags() {
        let args =
            Args::try_parse_from(["slice-rush", "--seed", "42", "--frames", "100", "--demo"])
                .unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.frames, 100);
        assert!(args.demo);
        assert!(!args.realtime);
        assert!(!args.dump);
    }

    #[test]
    fn test_args_reject_bad_values() {
        // A malformed seed must fail loudly, not fall back to wall-clock
        assert!(Args::try_parse_from(["slice-rush", "--seed", "abc"]).is_err());
        assert!(Args::try_parse_from(["slice-rush", "--frames", "-1"]).is_err());
        assert!(Args::try_parse_from(["slice-rush", "--bogus"]).is_err());
    }

    #[test]
    fn test_args_default_to_wall_clock_seed() {
        let args = Args::try_parse_from(["slice-rush"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.frames, 3600);
    }
}
