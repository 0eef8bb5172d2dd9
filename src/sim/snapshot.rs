//! Read-only views for the renderer and HUD
//!
//! Both are taken between ticks; nothing outside `tick` mutates the state.

use serde::Serialize;

use super::player::Player;
use super::power::{PowerState, PowerStatus};
use super::state::{GamePhase, GameState, Platform};

/// Everything the draw layer needs for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub platforms: &'a [Platform],
    pub camera_y: f32,
    pub power: &'a PowerState,
}

/// HUD values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudView {
    /// Score in meters
    pub height_reached: u32,
    /// Last checkpoint threshold (0 if none yet)
    pub checkpoint_height: u32,
    pub power_status: PowerStatus,
    /// Power bar fill in [0, 1]
    pub power_progress: f32,
    /// Seconds until the power is ready again
    pub cooldown_secs: u32,
    pub phase: GamePhase,
    /// Offer "continue from checkpoint" on the game over screen
    pub can_continue: bool,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            platforms: self.field.platforms(),
            camera_y: self.camera.y,
            power: &self.power,
        }
    }

    pub fn hud(&self) -> HudView {
        HudView {
            height_reached: self.player.height_reached,
            checkpoint_height: self.checkpoints.last_height(),
            power_status: self.power.status(),
            power_progress: self.power.progress(),
            cooldown_secs: self.power.cooldown_secs(),
            phase: self.phase,
            can_continue: self.can_continue(),
        }
    }
}
