//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use parallax_runner::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Configuration
pub use crate::core::config::{ConfigError, GameConfig, PhysicsConfig, WorldPreset};

// Game view and simulation
pub use crate::core::game::GameView;
pub use crate::core::sim::GameState;

// Input
pub use crate::core::input::{InputEvent, KeyBindings, KeyCode, Token};

// Rendering seam
pub use crate::core::render::{ChannelSink, FrameSink, LogSink, RenderFrame};
