//! Time slow power
//!
//! Cycles READY -> ACTIVE -> COOLDOWN -> READY. While active the speed
//! multiplier drops to `TIME_SLOW_FACTOR`; only gravity reads it, so the
//! power slows falling but not horizontal control.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Display state for the power indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerStatus {
    Ready,
    Active,
    Cooldown,
}

/// Transition produced by a tick of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerTransition {
    /// Active window ran out, cooldown started
    Expired,
    /// Cooldown finished
    Ready,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerState {
    pub active: bool,
    /// Active ticks remaining
    pub timer: u32,
    /// Cooldown ticks remaining
    pub cooldown_timer: u32,
    /// Gravity scale
    pub speed_multiplier: f32,
}

impl Default for PowerState {
    fn default() -> Self {
        Self {
            active: false,
            timer: 0,
            cooldown_timer: 0,
            speed_multiplier: 1.0,
        }
    }
}

impl PowerState {
    pub fn status(&self) -> PowerStatus {
        if self.active {
            PowerStatus::Active
        } else if self.cooldown_timer > 0 {
            PowerStatus::Cooldown
        } else {
            PowerStatus::Ready
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status() == PowerStatus::Ready
    }

    /// Start slowing time. No-op unless ready.
    ///
    /// Returns true if the power fired.
    pub fn activate(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.active = true;
        self.timer = TIME_SLOW_DURATION;
        self.speed_multiplier = TIME_SLOW_FACTOR;
        true
    }

    /// Advance the timers by one tick
    pub fn advance(&mut self) -> Option<PowerTransition> {
        if self.active {
            self.timer = self.timer.saturating_sub(1);
            if self.timer == 0 {
                self.active = false;
                self.cooldown_timer = TIME_SLOW_COOLDOWN;
                self.speed_multiplier = 1.0;
                return Some(PowerTransition::Expired);
            }
        } else if self.cooldown_timer > 0 {
            self.cooldown_timer -= 1;
            if self.cooldown_timer == 0 {
                return Some(PowerTransition::Ready);
            }
        }
        None
    }

    /// Bar fill in [0, 1]: remaining active time, or cooldown progress
    pub fn progress(&self) -> f32 {
        match self.status() {
            PowerStatus::Active => self.timer as f32 / TIME_SLOW_DURATION as f32,
            PowerStatus::Cooldown => 1.0 - self.cooldown_timer as f32 / TIME_SLOW_COOLDOWN as f32,
            PowerStatus::Ready => 1.0,
        }
    }

    /// Whole seconds of cooldown left, rounded up
    pub fn cooldown_secs(&self) -> u32 {
        self.cooldown_timer.div_ceil(TICKS_PER_SECOND)
    }
}
