//! Host-side game loop driver
//!
//! Owns a `GameState`, latches input between frames and runs fixed-step ticks
//! from variable frame times.

use crate::consts::*;
use crate::sim::{GameEvent, GamePhase, GameState, HudView, Snapshot, TickInput, tick};

/// A running game plus the input and timing glue around it
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    /// Events gathered across ticks until the host drains them
    pending: Vec<GameEvent>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            accumulator: 0.0,
            input: TickInput::default(),
            pending: Vec::new(),
        }
    }

    /// Run as many fixed ticks as `elapsed_secs` covers. Returns the tick count.
    pub fn update(&mut self, elapsed_secs: f32) -> u32 {
        let dt = elapsed_secs.clamp(0.0, MAX_FRAME_TIME);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.pending.extend_from_slice(&self.state.events);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.jump = false;
            self.input.activate_power = false;
            self.input.pause = false;
        }

        substeps
    }

    pub fn set_move_left(&mut self, held: bool) {
        self.input.move_left = held;
    }

    pub fn set_move_right(&mut self, held: bool) {
        self.input.move_right = held;
    }

    pub fn press_jump(&mut self) {
        self.input.jump = true;
    }

    pub fn press_power(&mut self) {
        self.input.activate_power = true;
    }

    pub fn toggle_pause(&mut self) {
        self.input.pause = true;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// Latched input for the next tick
    pub fn input(&self) -> &TickInput {
        &self.input
    }

    /// Throw the run away and start over
    pub fn restart(&mut self, seed: u64) {
        log::info!("Restarting with seed {}", seed);
        let autopilot = self.input.autopilot;
        self.state = GameState::new(seed);
        self.accumulator = 0.0;
        self.input = TickInput {
            autopilot,
            ..TickInput::default()
        };
        self.pending.clear();
    }

    /// Respawn at the last checkpoint. Only meaningful once the run is over.
    ///
    /// Returns false (and leaves the run alone) while still playing.
    pub fn continue_from_checkpoint(&mut self) -> bool {
        if self.state.phase != GamePhase::GameOver {
            return false;
        }
        self.state.restore_checkpoint();
        self.accumulator = 0.0;
        self.input.jump = false;
        self.input.activate_power = false;
        self.input.pause = false;
        true
    }

    /// Take every event raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn hud(&self) -> HudView {
        self.state.hud()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }
}
