//=========================================================================
// Simulation
//=========================================================================
//
// Per-frame player physics and camera derivation.
//
// Architecture:
//   (GameState, &HeldKeys, viewport) → step() → GameState
//                                         └─► camera::follow()
//
// Everything here is a pure function of its inputs. The caller owns the
// state and replaces it with the returned value.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
mod state;
mod step;

//=== Public API ==========================================================

pub use camera::{follow, max_camera_x, resolve_viewport_width};
pub use state::GameState;
pub use step::step;

//=== Constants ===========================================================

/// Distance the player keeps from either world edge.
pub const PLAYER_MARGIN: f64 = 50.0;

/// Player X at mount.
pub const INITIAL_PLAYER_X: f64 = 150.0;

/// Viewport width used when the surface has not been measured.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 800.0;
