//! Procedural platform placement
//!
//! Platforms get a random width and x position. When a new platform would
//! sit almost directly above the current highest one, its x is re-rolled
//! within one half of the canvas to spread the climb sideways. This is a
//! best-effort spread, not a reachability guarantee.

use rand::Rng;

use super::state::{Platform, PlatformKind};
use crate::consts::*;

/// Draw a vertical gap between consecutive platforms
pub fn next_gap<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(PLATFORM_GAP_MIN..=PLATFORM_GAP_MAX)
}

/// Generate a normal platform with its top edge at `y`
///
/// `existing` is only used to find the highest platform for the
/// anti-clustering check; the y coordinate is never adjusted.
pub fn generate_at<R: Rng>(y: f32, existing: &[Platform], rng: &mut R) -> Platform {
    let width = rng.random_range(PLATFORM_WIDTH_MIN..=PLATFORM_WIDTH_MAX);
    let mut x = rng.random_range(0.0..=CANVAS_WIDTH - width);

    if let Some(highest) = highest_of(existing) {
        if is_clustered(x, width, y, highest) {
            let left_half = x + width / 2.0 < CANVAS_WIDTH / 2.0;
            x = reroll_in_half(left_half, width, rng);
        }
    }

    Platform::new(x, y, width, PlatformKind::Normal)
}

/// The platform with the smallest y (highest in the world)
fn highest_of(platforms: &[Platform]) -> Option<&Platform> {
    platforms.iter().min_by(|a, b| a.y().total_cmp(&b.y()))
}

/// Horizontally close to `highest` AND only a short hop above it
fn is_clustered(x: f32, width: f32, y: f32, highest: &Platform) -> bool {
    let center_new = x + width / 2.0;
    let center_highest = highest.rect.center_x();
    let avg_width = (width + highest.rect.size.x) / 2.0;

    (center_new - center_highest).abs() < PLATFORM_HORIZONTAL_BUFFER + avg_width / 2.0
        && (y - highest.y()).abs() < PLATFORM_GAP_MIN + CLUSTER_VERTICAL_SLACK
}

fn reroll_in_half<R: Rng>(left_half: bool, width: f32, rng: &mut R) -> f32 {
    let half = CANVAS_WIDTH / 2.0;
    let span = (half - width).max(0.0);
    let x = if left_half {
        rng.random_range(0.0..=span)
    } else {
        half + rng.random_range(0.0..=span)
    };
    x.clamp(0.0, CANVAS_WIDTH - width)
}
