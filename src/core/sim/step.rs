//=========================================================================
// Simulation Step
//=========================================================================
//
// One frame of player physics.
//
// Order (fixed):
//   1. Horizontal movement (left, then right; right wins facing on ties)
//   2. Jump initiation (grounded only, no double jump)
//   3. Vertical integration (semi-implicit Euler) + ground contact
//   4. Camera derivation from the updated player X
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{camera, GameState, PLAYER_MARGIN};
use crate::core::config::PhysicsConfig;
use crate::core::input::{HeldKeys, Token};

//=== step() ==============================================================

/// Produces the next state from the previous one.
///
/// `viewport_width` must already be resolved (see
/// [`camera::resolve_viewport_width`]).
pub fn step(
    previous: &GameState,
    held: &HeldKeys,
    viewport_width: f64,
    physics: &PhysicsConfig,
) -> GameState {
    let mut next = *previous;
    next.is_running = false;

    //--- 1. Horizontal movement -------------------------------------------
    if held.is_held(Token::Left) {
        next.player_x = (next.player_x - physics.move_speed).max(PLAYER_MARGIN);
        next.facing_right = false;
        next.is_running = true;
    }
    if held.is_held(Token::Right) {
        next.player_x = (next.player_x + physics.move_speed).min(physics.world_width - PLAYER_MARGIN);
        next.facing_right = true;
        next.is_running = true;
    }

    //--- 2. Jump initiation -----------------------------------------------
    if held.is_held(Token::Jump) && !next.is_jumping {
        next.velocity_y = physics.jump_force;
        next.is_jumping = true;
    }

    //--- 3. Vertical integration ------------------------------------------
    if next.is_jumping {
        next.velocity_y += physics.gravity;
        next.player_y += next.velocity_y;

        if next.player_y >= physics.ground_y {
            next.player_y = physics.ground_y;
            next.velocity_y = 0.0;
            next.is_jumping = false;
        }
    }

    //--- 4. Camera ----------------------------------------------------------
    next.camera_x = camera::follow(next.player_x, viewport_width, physics.world_width);

    next
}

//=========================================================================
// Unit Tests
//=========================================================================
