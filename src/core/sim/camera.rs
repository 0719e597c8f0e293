//=========================================================================
// Camera Model
//=========================================================================
//
// Follow camera: keeps the player about one third from the left edge,
// clamped to the world. No smoothing, the camera snaps each frame.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::FALLBACK_VIEWPORT_WIDTH;

//=== Viewport ============================================================

/// Returns the measured width, or the fallback when there is no usable
/// measurement (absent, zero, negative or non-finite).
pub fn resolve_viewport_width(measured: Option<f64>) -> f64 {
    match measured {
        Some(width) if width.is_finite() && width > 0.0 => width,
        _ => FALLBACK_VIEWPORT_WIDTH,
    }
}

//=== Camera ==============================================================

/// Largest reachable camera offset. Zero when the viewport is at least as
/// wide as the world.
pub fn max_camera_x(world_width: f64, viewport_width: f64) -> f64 {
    (world_width - viewport_width).max(0.0)
}

/// Camera offset for a player position.
pub fn follow(player_x: f64, viewport_width: f64, world_width: f64) -> f64 {
    let target = player_x - viewport_width / 3.0;
    target.clamp(0.0, max_camera_x(world_width, viewport_width))
}

//=========================================================================
// Unit Tests
//=========================================================================
