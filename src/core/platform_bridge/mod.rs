//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the winit platform layer with the core thread.
//
// The platform only ever talks to the core through `PlatformEvent`, so the
// core owns the game view outright and never shares it across threads.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side event collection and ordering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, FrameUpdate, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
