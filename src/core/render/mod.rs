//=========================================================================
// Render Output
//
// Turns a simulation state into placement data for an external painter.
//
// Components:
// - `parallax`: per-layer offsets from the camera
// - `landmark`: world-space decorations culled to the viewport
// - `frame`: the per-frame bundle and the `FrameSink` seam
//
//=========================================================================

//=== Submodules ==========================================================

mod frame;
mod landmark;
mod parallax;

//=== Public API ==========================================================

pub use frame::{ChannelSink, FrameSink, LogSink, RenderFrame};
pub use landmark::{place_landmarks, Landmark, LandmarkPlacement, CULL_MARGIN};
pub use parallax::{layer_offset, place_layers, LayerPlacement, ParallaxLayer};
