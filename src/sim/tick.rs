//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Order within a
//! tick: intents, player kinematics, platform field (landing, prune,
//! generate), camera and scoring, power timers.

use super::power::PowerTransition;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: move left (wins over right)
    pub move_left: bool,
    /// Held: move right
    pub move_right: bool,
    /// Edge-triggered jump
    pub jump: bool,
    /// Edge-triggered time slow
    pub activate_power: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - AI plays the game
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    let steered;
    let input = if input.autopilot {
        steered = state
            .autopilot
            .steer(&state.player, &state.field, &state.power);
        &steered
    } else {
        input
    };

    // Intents
    state.player.move_left = input.move_left;
    state.player.move_right = input.move_right;
    if input.jump && state.player.jump() {
        state.events.push(GameEvent::Jumped);
    }
    if input.activate_power && state.power.activate() {
        log::debug!("Time slow activated");
        state.events.push(GameEvent::PowerActivated);
    }

    // Kinematics (gravity is the only time-dilated motion)
    let fell = state
        .player
        .integrate(state.power.speed_multiplier, state.camera.y);

    // Platform field
    if let Some(platform_y) = state.field.resolve_collisions(&mut state.player) {
        state.events.push(GameEvent::Landed { platform_y });
    }
    state.field.prune(state.camera.y);
    state.field.generate_ahead(state.camera.y, &mut state.rng);

    // Camera and scoring
    state.camera.follow(state.player.pos.y);
    let height = state.camera.height_for(state.player.pos.y);
    state.player.record_height(height);
    if let Some(checkpoint) = state.checkpoints.observe(
        state.player.height_reached,
        state.player.pos.y,
        state.camera.y,
    ) {
        log::info!("Checkpoint reached at {}m!", checkpoint.height);
        state.events.push(GameEvent::CheckpointReached {
            height: checkpoint.height,
        });
    }

    // Power timers
    match state.power.advance() {
        Some(PowerTransition::Expired) => state.events.push(GameEvent::PowerExpired),
        Some(PowerTransition::Ready) => state.events.push(GameEvent::PowerReady),
        None => {}
    }

    state.time_ticks += 1;

    if fell {
        let height = state.player.height_reached;
        log::info!("Game over at {}m after {} ticks", height, state.time_ticks);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { height });
    }
}
