//! Game state and core simulation types
//!
//! `GameState` owns everything one run needs; `tick` is the only thing that
//! advances it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::autopilot::Autopilot;
use super::camera::Camera;
use super::checkpoint::CheckpointManager;
use super::collision::Rect;
use super::field::PlatformField;
use super::player::Player;
use super::power::PowerState;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player fell; only restart or checkpoint restore leave this phase
    GameOver,
}

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Full-width floor (run start and checkpoint respawn)
    Start,
    #[default]
    Normal,
}

/// A platform (value entity: no identity beyond its rectangle)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, width, PLATFORM_HEIGHT),
            kind,
        }
    }

    /// Full-width start platform with its top edge at `y`
    pub fn start(y: f32) -> Self {
        Self::new(0.0, y, CANVAS_WIDTH, PlatformKind::Start)
    }

    /// World Y of the top edge
    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.pos.y
    }

    /// Y relative to the top of the viewport
    #[inline]
    pub fn screen_y(&self, camera_y: f32) -> f32 {
        self.rect.pos.y - camera_y
    }
}

/// Things that happened during the last tick (for audio/UI feedback)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed { platform_y: f32 },
    CheckpointReached { height: u32 },
    PowerActivated,
    PowerExpired,
    PowerReady,
    GameOver { height: u32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Live platforms, ascending Y
    pub field: PlatformField,
    pub camera: Camera,
    pub checkpoints: CheckpointManager,
    /// Time slow power
    pub power: PowerState,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    /// Demo mode memory
    #[serde(skip)]
    pub(crate) autopilot: Autopilot,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let camera = Camera::default();

        let mut field = PlatformField::new();
        field.insert(Platform::start(CANVAS_HEIGHT - PLATFORM_HEIGHT));
        field.generate_ahead(camera.y, &mut rng);

        log::info!("New run with seed {} ({} platforms)", seed, field.len());

        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::new(CANVAS_HEIGHT - PLAYER_SPAWN_OFFSET),
            field,
            camera,
            checkpoints: CheckpointManager::default(),
            power: PowerState::default(),
            events: Vec::new(),
            rng,
            autopilot: Autopilot::default(),
        }
    }

    /// Whether a checkpoint is available to continue from
    pub fn can_continue(&self) -> bool {
        self.checkpoints.last_height() > 0 && self.checkpoints.latest().is_some()
    }

    /// Respawn at the latest checkpoint, or start over if there is none
    ///
    /// The world is reseeded from the saved player/camera heights rather than
    /// replayed: the player is re-centered, platforms are regenerated upward
    /// from the bottom of the restored viewport and a full-width floor is
    /// placed under it.
    pub fn restore_checkpoint(&mut self) {
        let Some(checkpoint) = self.checkpoints.latest().copied() else {
            log::warn!("No checkpoint saved, starting a new run");
            *self = Self::new(self.seed);
            return;
        };

        let mut player = Player::new(checkpoint.player_y);
        player.height_reached = self.checkpoints.last_height();
        self.player = player;

        self.camera = Camera::at(checkpoint.camera_y);

        let viewport_bottom = self.camera.y + CANVAS_HEIGHT;
        self.field
            .regenerate(viewport_bottom, RESTORE_PLATFORM_COUNT, &mut self.rng);
        self.field
            .insert(Platform::start(viewport_bottom - PLATFORM_HEIGHT));

        self.power = PowerState::default();
        self.autopilot = Autopilot::default();
        self.time_ticks = 0;
        self.events.clear();
        self.phase = GamePhase::Playing;

        log::info!(
            "Restored checkpoint at {}m (camera y {})",
            checkpoint.height,
            checkpoint.camera_y
        );
    }
}
