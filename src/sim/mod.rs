//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Platforms kept in ascending-Y order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod checkpoint;
pub mod collision;
pub mod field;
pub mod generator;
pub mod player;
pub mod power;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use camera::Camera;
pub use checkpoint::{Checkpoint, CheckpointManager};
pub use collision::{Rect, overlaps};
pub use field::PlatformField;
pub use generator::{generate_at, next_gap};
pub use player::{Player, PlayerPose};
pub use power::{PowerState, PowerStatus, PowerTransition};
pub use snapshot::{HudView, Snapshot};
pub use state::{GameEvent, GamePhase, GameState, Platform, PlatformKind};
pub use tick::{TickInput, tick};
