//! The live platform set
//!
//! Platforms are kept sorted by ascending Y (highest first) at all times, so
//! the frontier is always `platforms[0]`. Each tick the field resolves
//! landings, drops platforms that scrolled out below the viewport and builds
//! new ones far enough above the camera that they never pop into view.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::generator::{generate_at, next_gap};
use super::player::Player;
use super::state::Platform;
use crate::consts::*;

/// How far above the camera the frontier must be built
pub const LOOKAHEAD: f32 = 2.0 * PLATFORM_GAP_MAX;

/// Ordered platform container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformField {
    platforms: Vec<Platform>,
}

impl PlatformField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Platforms in ascending Y order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Platform> {
        self.platforms.iter()
    }

    /// The frontier (smallest Y)
    pub fn highest(&self) -> Option<&Platform> {
        self.platforms.first()
    }

    /// The platform furthest down (largest Y)
    pub fn lowest(&self) -> Option<&Platform> {
        self.platforms.last()
    }

    pub fn clear(&mut self) {
        self.platforms.clear();
    }

    /// Insert a platform at its sorted position
    pub fn insert(&mut self, platform: Platform) {
        let idx = self.platforms.partition_point(|p| p.y() <= platform.y());
        self.platforms.insert(idx, platform);
    }

    pub fn is_sorted(&self) -> bool {
        self.platforms.windows(2).all(|w| w[0].y() <= w[1].y())
    }

    /// Y of the frontier, or a point just below the viewport when empty
    pub fn frontier_y(&self, camera_y: f32) -> f32 {
        self.highest()
            .map(Platform::y)
            .unwrap_or(camera_y + CANVAS_HEIGHT + 100.0)
    }

    /// Land the player on any platform it is falling into
    ///
    /// Only a falling player lands; moving upward passes through platforms.
    /// Platforms are checked in order and landing zeroes the fall speed, so the
    /// first (highest) overlapping platform wins.
    ///
    /// Returns the top Y of the platform landed on.
    pub fn resolve_collisions(&self, player: &mut Player) -> Option<f32> {
        let mut landed = None;
        for platform in &self.platforms {
            if player.is_falling() && overlaps(&player.bounds(), &platform.rect) {
                player.land_on(platform.y());
                landed = Some(platform.y());
            }
        }
        landed
    }

    /// Drop platforms that scrolled well below the viewport
    ///
    /// Returns the number removed.
    pub fn prune(&mut self, camera_y: f32) -> usize {
        let before = self.platforms.len();
        self.platforms
            .retain(|p| p.screen_y(camera_y) <= CANVAS_HEIGHT + PRUNE_MARGIN);
        let removed = before - self.platforms.len();
        if removed > 0 {
            log::debug!("Pruned {} platforms ({} live)", removed, self.platforms.len());
        }
        removed
    }

    /// Build platforms upward until the frontier is `LOOKAHEAD` above the camera
    ///
    /// Terminates because every step raises the frontier by at least
    /// `PLATFORM_GAP_MIN`. Returns the number of platforms added.
    pub fn generate_ahead<R: Rng>(&mut self, camera_y: f32, rng: &mut R) -> usize {
        let mut frontier = self.frontier_y(camera_y);
        let mut added = 0;

        while frontier - camera_y > -LOOKAHEAD {
            let y = frontier - next_gap(rng);
            let platform = generate_at(y, &self.platforms, rng);
            self.insert(platform);
            frontier = y;
            added += 1;
        }

        if added > 0 {
            log::debug!("Generated {} platforms, frontier at y {}", added, frontier);
        }
        added
    }

    /// Replace the whole set with `count` platforms stacked upward from `bottom_y`
    pub fn regenerate<R: Rng>(&mut self, bottom_y: f32, count: usize, rng: &mut R) {
        self.platforms.clear();
        let mut y = bottom_y;
        for _ in 0..count {
            y -= next_gap(rng);
            let platform = generate_at(y, &self.platforms, rng);
            self.insert(platform);
        }
    }
}
