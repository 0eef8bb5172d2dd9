//! Skyclimb entry point
//!
//! Headless native runner: plays a seeded demo run on autopilot and prints the
//! final HUD as JSON. Usage: `skyclimb [seed] [seconds]`.

#[cfg(not(target_arch = "wasm32"))]
use skyclimb::Session;
#[cfg(not(target_arch = "wasm32"))]
use skyclimb::consts::SIM_DT;
#[cfg(not(target_arch = "wasm32"))]
use skyclimb::sim::GameEvent;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 42;
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SECONDS: u32 = 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", DEFAULT_SEED);
    let seconds = parse_arg(args.next(), "seconds", DEFAULT_SECONDS);
    log::info!("Skyclimb (native) demo: seed {}, {}s", seed, seconds);

    let mut session = Session::new(seed);
    session.set_autopilot(true);

    let frames = demo_frames(seconds);
    let mut continues = 0u32;
    for _ in 0..frames {
        session.update(SIM_DT);

        for event in session.drain_events() {
            match event {
                GameEvent::GameOver { height } => log::info!("Fell at {}m", height),
                GameEvent::PowerActivated => log::debug!("Autopilot used time slow"),
                _ => log::trace!("{:?}", event),
            }
        }

        if session.is_over() {
            if !session.hud().can_continue {
                break;
            }
            session.continue_from_checkpoint();
            continues += 1;
        }
    }

    log::info!(
        "Demo finished after {} ticks with {} continues",
        session.state().time_ticks,
        continues
    );

    match serde_json::to_string_pretty(&session.hud()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode HUD: {}", e),
    }
}

/// Frames to simulate for a demo of `seconds`, saturating on huge requests
#[cfg(not(target_arch = "wasm32"))]
fn demo_frames(seconds: u32) -> u32 {
    seconds
        .checked_mul(skyclimb::consts::TICKS_PER_SECOND)
        .unwrap_or_else(|| {
            log::warn!("Demo of {}s is too long, running {} frames", seconds, u32::MAX);
            u32::MAX
        })
}

/// Parse an optional positional argument, falling back to `default`
#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr + std::fmt::Display>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} {:?}, using {}", name, raw, default);
            default
        }),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; hosts drive `Session` directly
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_demo_frames() {
        assert_eq!(demo_frames(0), 0);
        assert_eq!(demo_frames(120), 120 * 60);
        assert_eq!(demo_frames(100_000_000), u32::MAX);
        assert_eq!(demo_frames(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_parse_arg_falls_back() {
        assert_eq!(parse_arg(None, "seed", 42u64), 42);
        assert_eq!(parse_arg(Some("7".into()), "seed", 42u64), 7);
        assert_eq!(parse_arg(Some("seven".into()), "seed", 42u64), 42);
        assert_eq!(parse_arg(Some("-1".into()), "seconds", 120u32), 120);
    }
}
