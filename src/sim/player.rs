//! Player entity and kinematics
//!
//! No acceleration model: horizontal velocity switches instantly between
//! `-MAX_SPEED`, `0` and `+MAX_SPEED`. Only gravity is affected by time slow.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Pose used by the renderer to pick a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerPose {
    #[default]
    Idle,
    Jumping,
}

/// The climber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world coordinates (y grows downward)
    pub pos: Vec2,
    /// Velocity in world units per tick
    pub vel: Vec2,
    pub size: Vec2,
    /// Airborne from a jump (blocks re-triggering until the next landing)
    pub is_jumping: bool,
    pub pose: PlayerPose,
    /// Best height in meters; never decreases
    pub height_reached: u32,
    /// Held horizontal intents
    pub move_left: bool,
    pub move_right: bool,
}

impl Player {
    /// Create a player horizontally centered with its top edge at `y`
    pub fn new(y: f32) -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0 - PLAYER_WIDTH / 2.0, y),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            is_jumping: false,
            pose: PlayerPose::Idle,
            height_reached: 0,
            move_left: false,
            move_right: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Start a jump. Ignored while already airborne from a jump (no double jump).
    ///
    /// Returns true if the jump fired.
    pub fn jump(&mut self) -> bool {
        if self.is_jumping {
            return false;
        }
        self.vel.y = PLAYER_JUMP_FORCE;
        self.is_jumping = true;
        self.pose = PlayerPose::Jumping;
        true
    }

    /// Advance one tick: intents, gravity, integration, bounds clamp.
    ///
    /// Returns true if the player has fallen past the fall threshold below
    /// the camera (game over).
    pub fn integrate(&mut self, speed_multiplier: f32, camera_y: f32) -> bool {
        self.vel.x = if self.move_left {
            -PLAYER_MAX_SPEED
        } else if self.move_right {
            PLAYER_MAX_SPEED
        } else {
            0.0
        };
        self.pos.x += self.vel.x;

        self.vel.y += GRAVITY * speed_multiplier;
        self.pos.y += self.vel.y;

        self.pos.x = self.pos.x.clamp(0.0, CANVAS_WIDTH - self.size.x);

        self.pos.y - camera_y > FALL_THRESHOLD
    }

    /// Stand on a surface whose top edge is at `surface_y`
    pub fn land_on(&mut self, surface_y: f32) {
        self.pos.y = surface_y - self.size.y;
        self.vel.y = 0.0;
        self.is_jumping = false;
        self.pose = PlayerPose::Idle;
    }

    /// Record a new height, keeping the best
    pub fn record_height(&mut self, height: u32) {
        self.height_reached = self.height_reached.max(height);
    }

    /// Falling (moving down the screen)
    #[inline]
    pub fn is_falling(&self) -> bool {
        self.vel.y > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_centered() {
        let player = Player::new(700.0);
        assert_eq!(player.pos.x, 275.0);
        assert_eq!(player.pos.y, 700.0);
        assert_eq!(player.pose, PlayerPose::Idle);
        assert!(!player.is_jumping);
    }

    #[test]
    fn test_horizontal_intents() {
        let mut player = Player::new(0.0);
        player.move_right = true;
        player.integrate(1.0, 0.0);
        assert_eq!(player.vel.x, PLAYER_MAX_SPEED);
        assert_eq!(player.pos.x, 281.0);

        // Left wins when both are held
        player.move_left = true;
        player.integrate(1.0, 0.0);
        assert_eq!(player.vel.x, -PLAYER_MAX_SPEED);
        assert_eq!(player.pos.x, 275.0);

        // Neither held: instant stop
        player.move_left = false;
        player.move_right = false;
        player.integrate(1.0, 0.0);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.pos.x, 275.0);
    }

    #[test]
    fn test_gravity_scaled_by_multiplier() {
        let mut player = Player::new(0.0);
        player.integrate(1.0, 0.0);
        assert!((player.vel.y - GRAVITY).abs() < 1e-6);

        let mut slowed = Player::new(0.0);
        slowed.integrate(TIME_SLOW_FACTOR, 0.0);
        assert!((slowed.vel.y - GRAVITY * TIME_SLOW_FACTOR).abs() < 1e-6);
        assert!((slowed.pos.y - GRAVITY * TIME_SLOW_FACTOR).abs() < 1e-6);
    }

    #[test]
    fn test_clamped_to_canvas() {
        let mut player = Player::new(0.0);
        player.pos.x = 2.0;
        player.move_left = true;
        player.integrate(1.0, 0.0);
        assert_eq!(player.pos.x, 0.0);

        player.move_left = false;
        player.move_right = true;
        player.pos.x = CANVAS_WIDTH - PLAYER_WIDTH - 1.0;
        player.integrate(1.0, 0.0);
        assert_eq!(player.pos.x, CANVAS_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = Player::new(700.0);
        assert!(player.jump());
        assert_eq!(player.vel.y, PLAYER_JUMP_FORCE);
        assert_eq!(player.pose, PlayerPose::Jumping);

        // No double jump
        player.integrate(1.0, 0.0);
        let vy = player.vel.y;
        assert!(!player.jump());
        assert_eq!(player.vel.y, vy);

        player.land_on(780.0);
        assert!(player.jump());
    }

    #[test]
    fn test_fall_threshold_relative_to_camera() {
        let mut player = Player::new(FALL_THRESHOLD - 0.5);
        assert!(player.integrate(1.0, 0.0));

        // Same screen position, camera scrolled up 1000 units
        let mut player = Player::new(FALL_THRESHOLD - 1000.5);
        assert!(player.integrate(1.0, -1000.0));

        let mut player = Player::new(-200.0);
        assert!(!player.integrate(1.0, -1000.0));
    }

    #[test]
    fn test_height_is_monotonic() {
        let mut player = Player::new(0.0);
        player.record_height(50);
        player.record_height(20);
        assert_eq!(player.height_reached, 50);
    }
}
