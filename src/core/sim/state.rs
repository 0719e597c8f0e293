//=========================================================================
// Game State
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{INITIAL_PLAYER_X, PLAYER_MARGIN};
use crate::core::config::PhysicsConfig;

//=== GameState ===========================================================

/// Complete simulation state of one view.
///
/// A `Copy` value: each frame produces a fresh one, so no caller ever
/// observes a half-updated state.
///
/// Vertical axis: `player_y` is a percentage-of-viewport-height offset
/// where `ground_y` is the resting value and smaller values are higher on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    /// Horizontal world position, within `[50, world_width - 50]`.
    pub player_x: f64,

    /// Vertical offset, never below the ground (never above `ground_y`).
    pub player_y: f64,

    /// Vertical speed; zero when grounded.
    pub velocity_y: f64,

    /// True from jump initiation until ground contact.
    pub is_jumping: bool,

    /// True only for a frame in which a horizontal key was held.
    pub is_running: bool,

    /// Last horizontal direction.
    pub facing_right: bool,

    /// Horizontal scroll offset, within `[0, max(0, world - viewport)]`.
    pub camera_x: f64,
}

impl GameState {
    /// State at mount: grounded at x = 150, facing right, camera at 0.
    ///
    /// In worlds narrower than 200 the start position is pulled inside the
    /// player bounds.
    pub fn initial(physics: &PhysicsConfig) -> Self {
        let max_x = (physics.world_width - PLAYER_MARGIN).max(PLAYER_MARGIN);

        Self {
            player_x: INITIAL_PLAYER_X.clamp(PLAYER_MARGIN, max_x),
            player_y: physics.ground_y,
            velocity_y: 0.0,
            is_jumping: false,
            is_running: false,
            facing_right: true,
            camera_x: 0.0,
        }
    }

    /// Returns `true` when standing on the ground plane.
    pub fn is_grounded(&self) -> bool {
        !self.is_jumping
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
