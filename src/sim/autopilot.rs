//! Demo mode - the game plays itself
//!
//! A greedy climber: pick the next platform up while standing, walk toward it,
//! jump once it is within reach (or at the edge of the current platform) and
//! keep steering for that same platform until landing. Burns the time slow
//! power when a fall gets fast. It does not plan around gaps it cannot reach,
//! so it eventually falls.

use super::field::PlatformField;
use super::player::Player;
use super::power::PowerState;
use super::state::Platform;
use super::tick::TickInput;
use crate::consts::*;

/// Horizontal distance covered while rising from a jump
const JUMP_REACH: f32 = PLAYER_MAX_SPEED * (-PLAYER_JUMP_FORCE / GRAVITY);
/// Fall speed that triggers the power
const PANIC_FALL_SPEED: f32 = 12.0;

/// Demo AI memory: the platform picked at takeoff
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    target: Option<Platform>,
}

impl Autopilot {
    pub fn target(&self) -> Option<&Platform> {
        self.target.as_ref()
    }

    /// Build the intents for this tick
    pub fn steer(&mut self, player: &Player, field: &PlatformField, power: &PowerState) -> TickInput {
        let feet = player.pos.y + player.size.y;
        let center = player.bounds().center_x();
        let grounded = !player.is_jumping && player.vel.y == 0.0;

        if grounded || self.target.is_none() {
            self.target = next_step_up(field, feet).copied();
        }

        let mut input = TickInput::default();

        if let Some(target) = &self.target {
            let delta = target.rect.center_x() - center;
            if delta.abs() > PLAYER_MAX_SPEED {
                input.move_left = delta < 0.0;
                input.move_right = delta > 0.0;
            }

            if grounded {
                let leaving_support = support_under(field, player).is_some_and(|support| {
                    let next_center = center + delta.signum() * PLAYER_MAX_SPEED;
                    next_center < support.rect.left() || next_center > support.rect.right()
                });
                input.jump = delta.abs() < JUMP_REACH || leaving_support;
            }
        }

        if player.vel.y > PANIC_FALL_SPEED && power.is_ready() {
            input.activate_power = true;
        }

        input
    }
}

/// Lowest platform whose top is above the player's feet
fn next_step_up(field: &PlatformField, feet: f32) -> Option<&Platform> {
    // Ascending Y, so walk from the bottom up
    field.iter().rev().find(|p| p.y() < feet - 1.0)
}

/// Platform the player is standing on
fn support_under<'a>(field: &'a PlatformField, player: &Player) -> Option<&'a Platform> {
    let feet = player.pos.y + player.size.y;
    let bounds = player.bounds();
    field.iter().find(|p| {
        (p.y() - feet).abs() < 0.5 && bounds.left() < p.rect.right() && bounds.right() > p.rect.left()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameState, PlatformKind};

    fn two_step_state(x: f32) -> GameState {
        let mut state = GameState::new(1);
        state.field.clear();
        state.field.insert(Platform::start(CANVAS_HEIGHT - PLATFORM_HEIGHT));
        state.field.insert(Platform::new(x, 600.0, 100.0, PlatformKind::Normal));
        state.player.land_on(CANVAS_HEIGHT - PLATFORM_HEIGHT);
        state
    }

    #[test]
    fn test_walks_toward_next_platform() {
        let state = two_step_state(0.0);
        let mut pilot = Autopilot::default();

        let input = pilot.steer(&state.player, &state.field, &state.power);
        assert!(input.move_left);
        assert!(!input.move_right);
        // 250 units away on a full-width floor: too far to jump yet
        assert!(!input.jump);
        assert_eq!(pilot.target().map(Platform::y), Some(600.0));
    }

    #[test]
    fn test_jumps_when_under_target() {
        let state = two_step_state(250.0);
        let mut pilot = Autopilot::default();

        let input = pilot.steer(&state.player, &state.field, &state.power);
        assert!(!input.move_left && !input.move_right);
        assert!(input.jump);
        assert!(!input.autopilot);
    }

    #[test]
    fn test_jumps_at_platform_edge() {
        let mut state = GameState::new(1);
        state.field.clear();
        state.field.insert(Platform::new(250.0, 700.0, 100.0, PlatformKind::Normal));
        state.field.insert(Platform::new(0.0, 500.0, 80.0, PlatformKind::Normal));
        state.player.land_on(700.0);
        // Center at 255: the next step left crosses the support's left edge
        state.player.pos.x = 230.0;

        let mut pilot = Autopilot::default();
        let input = pilot.steer(&state.player, &state.field, &state.power);
        assert!(input.move_left);
        assert!(input.jump);
    }

    #[test]
    fn test_keeps_target_while_airborne() {
        let mut state = two_step_state(250.0);
        let mut pilot = Autopilot::default();
        pilot.steer(&state.player, &state.field, &state.power);

        // Rise above the target platform: a higher one must not steal focus
        state.field.insert(Platform::new(500.0, 450.0, 100.0, PlatformKind::Normal));
        state.player.is_jumping = true;
        state.player.vel.y = -2.0;
        state.player.pos.y = 500.0;

        let input = pilot.steer(&state.player, &state.field, &state.power);
        assert_eq!(pilot.target().map(Platform::y), Some(600.0));
        assert!(!input.move_right);
        assert!(!input.jump);
    }

    #[test]
    fn test_panics_into_time_slow() {
        let mut state = GameState::new(1);
        state.player.is_jumping = true;
        state.player.vel.y = 20.0;
        let mut pilot = Autopilot::default();
        assert!(pilot.steer(&state.player, &state.field, &state.power).activate_power);

        state.power.activate();
        assert!(!pilot.steer(&state.player, &state.field, &state.power).activate_power);
    }
}
