//! Checkpoint tracking
//!
//! One checkpoint slot per run, kept in memory only. Every time the score
//! passes the next multiple of `CHECKPOINT_INTERVAL` the slot is overwritten
//! with the current player and camera heights. The world itself is not
//! stored: restore reseeds platforms from those two values.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Saved respawn point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Player top edge (world Y)
    pub player_y: f32,
    /// Camera (world Y)
    pub camera_y: f32,
    /// Score threshold that triggered this checkpoint
    pub height: u32,
}

/// Tracks the next threshold and the latest checkpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckpointManager {
    last_height: u32,
    latest: Option<Checkpoint>,
}

impl CheckpointManager {
    /// Threshold of the most recent checkpoint (0 before the first)
    pub fn last_height(&self) -> u32 {
        self.last_height
    }

    pub fn latest(&self) -> Option<&Checkpoint> {
        self.latest.as_ref()
    }

    /// Score needed for the next checkpoint
    pub fn next_height(&self) -> u32 {
        self.last_height + CHECKPOINT_INTERVAL
    }

    /// Check the current score against the next threshold
    ///
    /// Advances by exactly one interval per call, even if the score skipped
    /// several; repeated calls on later ticks catch up.
    pub fn observe(&mut self, height: u32, player_y: f32, camera_y: f32) -> Option<Checkpoint> {
        if height < self.next_height() {
            return None;
        }

        self.last_height = self.next_height();
        let checkpoint = Checkpoint {
            player_y,
            camera_y,
            height: self.last_height,
        };
        self.latest = Some(checkpoint);
        Some(checkpoint)
    }

    #[cfg(test)]
    pub(crate) fn force(&mut self, checkpoint: Checkpoint) {
        self.last_height = checkpoint.height;
        self.latest = Some(checkpoint);
    }
}
