//=========================================================================
// Parallax Runner: Library Root
//
// A 2D side-scroller core: held-key sampling, per-frame player physics,
// a follow camera clamped to the world and parallax/landmark placement
// for an external painter.
//
// Typical usage:
// ```no_run
// use parallax_runner::core::config::GameConfig;
// use parallax_runner::EngineBuilder;
//
// fn main() -> Result<(), parallax_runner::PlatformError> {
//     EngineBuilder::new(GameConfig::default()).build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent game: input, simulation, render
// placement, configuration and the logic-thread orchestrator. It can be
// driven directly through `core::game::GameView` without a window.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` is the winit window and event loop; `engine` wires it to the
// core thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
