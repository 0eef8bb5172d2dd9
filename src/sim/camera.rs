//! Vertical follow camera and height scoring
//!
//! The camera only ever scrolls up. Score is derived from how far the top of
//! the viewport has climbed plus the player's height within the viewport.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// World Y mapped to the top of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    pub y: f32,
}

impl Camera {
    pub fn at(y: f32) -> Self {
        Self { y }
    }

    /// Convert a world Y to a viewport Y
    #[inline]
    pub fn to_screen(&self, world_y: f32) -> f32 {
        world_y - self.y
    }

    /// Scroll up so the player never rises above the scroll threshold
    ///
    /// Returns true if the camera moved.
    pub fn follow(&mut self, player_y: f32) -> bool {
        if self.to_screen(player_y) < CAMERA_SCROLL_THRESHOLD {
            self.y = player_y - CAMERA_SCROLL_THRESHOLD;
            true
        } else {
            false
        }
    }

    /// Height in meters for a player whose top edge is at `player_y`
    pub fn height_for(&self, player_y: f32) -> u32 {
        let units = self.y.abs() + (CANVAS_HEIGHT - self.to_screen(player_y));
        (units / UNITS_PER_METER).floor().max(0.0) as u32
    }
}
