//=========================================================================
// Parallax Layers
//=========================================================================
//
// Maps the camera offset to per-layer horizontal shifts.
//
//   offset = -camera_x * speed        speed ∈ [0, 1]
//
// Slow layers read as distant. The ground layer uses speed 1 and moves
// exactly with the camera. Layers hold no per-frame state.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::config::ConfigError;

//=== ParallaxLayer =======================================================

/// One repeating background layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub name: &'static str,

    /// Texture painted (and tiled) by the rendering collaborator.
    pub asset: &'static str,

    speed: f64,
}

impl ParallaxLayer {
    /// Creates a layer, rejecting speeds outside `[0, 1]`.
    pub fn new(name: &'static str, asset: &'static str, speed: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&speed) {
            return Err(ConfigError::Invalid {
                field: "speed",
                reason: format!("layer '{}' speed must be within [0, 1], got {}", name, speed),
            });
        }
        Ok(Self { name, asset, speed })
    }

    /// Background set shared by both presets, farthest first.
    pub fn defaults() -> Vec<Self> {
        const fn layer(name: &'static str, asset: &'static str, speed: f64) -> ParallaxLayer {
            ParallaxLayer { name, asset, speed }
        }

        vec![
            layer("sky", "backgrounds/sky.png", 0.1),
            layer("mountains", "backgrounds/mountains.png", 0.25),
            layer("hills", "backgrounds/hills.png", 0.4),
            layer("trees", "backgrounds/trees.png", 0.7),
            layer("ground", "backgrounds/ground.png", 1.0),
        ]
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Horizontal shift of this layer for a camera offset.
    pub fn offset(&self, camera_x: f64) -> f64 {
        layer_offset(camera_x, self.speed)
    }

    /// Minimum tile width that covers every reachable camera offset
    /// without exposing an edge.
    pub fn required_span(&self, viewport_width: f64, max_camera_x: f64) -> f64 {
        viewport_width + max_camera_x * self.speed
    }
}

//=== layer_offset() ======================================================

/// `-camera_x * speed`.
pub fn layer_offset(camera_x: f64, speed: f64) -> f64 {
    -camera_x * speed
}

//=== LayerPlacement ======================================================

/// Per-frame placement of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPlacement {
    pub name: &'static str,
    pub asset: &'static str,
    pub offset: f64,
    pub span: f64,
}

/// Places every layer for the current camera.
pub fn place_layers(
    layers: &[ParallaxLayer],
    camera_x: f64,
    viewport_width: f64,
    max_camera_x: f64,
) -> Vec<LayerPlacement> {
    layers
        .iter()
        .map(|layer| LayerPlacement {
            name: layer.name,
            asset: layer.asset,
            offset: layer.offset(camera_x),
            span: layer.required_span(viewport_width, max_camera_x),
        })
        .collect()
}

//=========================================================================
// Unit Tests
//=========================================================================
