//! Skyclimb - An endless vertical platformer: climb upward, don't fall
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platform generation, scoring, power)
//! - `session`: Fixed-timestep driver that feeds host intents into the simulation

pub mod session;
pub mod sim;

pub use session::Session;

/// Game configuration constants
///
/// All physics values are per tick at the nominal 60 Hz frame rate.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the rate the physics was tuned for)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Viewport dimensions (world units)
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 800.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Spawn height above the bottom of the viewport
    pub const PLAYER_SPAWN_OFFSET: f32 = 100.0;
    pub const GRAVITY: f32 = 0.8;
    pub const PLAYER_MAX_SPEED: f32 = 6.0;
    /// Upward impulse (negative = up)
    pub const PLAYER_JUMP_FORCE: f32 = -16.0;

    /// Platform generation ranges
    pub const PLATFORM_GAP_MIN: f32 = 100.0;
    pub const PLATFORM_GAP_MAX: f32 = 250.0;
    pub const PLATFORM_WIDTH_MIN: f32 = 80.0;
    pub const PLATFORM_WIDTH_MAX: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Minimum horizontal distance kept between stacked platforms
    pub const PLATFORM_HORIZONTAL_BUFFER: f32 = 50.0;
    /// Extra vertical reach of the anti-clustering check beyond the minimum gap
    pub const CLUSTER_VERTICAL_SLACK: f32 = 50.0;
    /// Platforms this far below the viewport bottom are dropped
    pub const PRUNE_MARGIN: f32 = 50.0;
    /// Platforms regenerated above the viewport bottom on checkpoint restore
    pub const RESTORE_PLATFORM_COUNT: usize = 20;

    /// Camera scrolls once the player rises above 40% of the viewport
    pub const CAMERA_SCROLL_THRESHOLD: f32 = CANVAS_HEIGHT * 0.4;
    /// How far below the viewport top the player may fall before game over
    pub const FALL_THRESHOLD: f32 = CANVAS_HEIGHT + 100.0;
    /// World units per score "meter"
    pub const UNITS_PER_METER: f32 = 10.0;

    /// Time slow power (ticks)
    pub const TIME_SLOW_DURATION: u32 = 180;
    pub const TIME_SLOW_COOLDOWN: u32 = 600;
    /// Gravity scale while time slow is active
    pub const TIME_SLOW_FACTOR: f32 = 0.4;
    /// Ticks per displayed second
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Score distance between checkpoints (meters)
    pub const CHECKPOINT_INTERVAL: u32 = 1000;
}
