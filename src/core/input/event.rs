//=========================================================================
// Input Event Types
//
// Defines the engine-side representation of low-level view input.
//
// This module abstracts away platform-specific input (e.g. Winit) into a
// small, portable vocabulary consumed by the input sampler.
//
// Responsibilities:
// - Represent physical keys in a layout-independent way
// - Carry key transitions and focus transitions in one ordered stream
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputSampler (HeldKeys)
//         ↓
//    Simulation Step
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// `KeyA` is the same key with or without Shift. This is what makes the
/// recognized-key table case-insensitive.
///
/// Only keys the view can bind are listed. Everything else arrives as
/// `Unidentified` and is filtered at the platform boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys used by the default WASD layout.
    KeyA,
    KeyD,
    KeyS,
    KeyW,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Escape key
    Escape,

    /// Fallback for keys the platform reports but the engine does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Key and focus transitions share one stream so their relative order is
/// preserved across the thread boundary: a key pressed right after the
/// window regains focus must be seen after the focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// The view gained (`true`) or lost (`false`) input focus.
    FocusChanged { focused: bool },

    /// Unrecognized or unsupported event. Ignored by the sampler.
    Unidentified,
}

impl InputEvent {
    /// Returns the key carried by a key transition, if any.
    pub fn key(&self) -> Option<KeyCode> {
        match self {
            Self::KeyDown { key } | Self::KeyUp { key } => Some(*key),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
