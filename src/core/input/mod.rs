//=========================================================================
// Input System
//
// Everything between a physical key transition and the set of held motion
// tokens read by the simulation.
//
// Components:
// - `event`: portable key/focus events produced by the platform
// - `token`: logical motion tokens (left, right, jump)
// - `bindings`: physical key → token table
// - `sampler`: HeldKeys owner with focus gating
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod bindings;
mod sampler;
mod token;

//=== Public API ==========================================================

pub use bindings::KeyBindings;
pub use event::{InputEvent, KeyCode};
pub use sampler::{HeldKeys, InputSampler};
pub use token::Token;
