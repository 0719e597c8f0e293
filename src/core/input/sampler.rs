//=========================================================================
// Input Sampler
//=========================================================================
//
// Tracks the set of held motion tokens for one view.
//
// Architecture:
//   InputEvent → process_event() → KeyBindings → HeldKeys (HashSet) → query
//
// Rules:
// - KeyDown adds a token only while the view has focus
// - KeyUp always applies, focused or not (no stuck keys after blur)
// - A token stays held while any of its bound keys is still down
// - Repeated KeyDown is idempotent (set semantics)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{
    bindings::KeyBindings,
    event::{InputEvent, KeyCode},
    token::Token,
};

//=== HeldKeys ============================================================

/// Set of currently held tokens.
///
/// Written only by [`InputSampler`]; the simulation step receives a shared
/// reference and can only query it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    tokens: HashSet<Token>,
}

impl HeldKeys {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while `token` is held.
    pub fn is_held(&self, token: Token) -> bool {
        self.tokens.contains(&token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Iterates held tokens (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub(crate) fn insert(&mut self, token: Token) -> bool {
        self.tokens.insert(token)
    }

    pub(crate) fn remove(&mut self, token: Token) -> bool {
        self.tokens.remove(&token)
    }
}

impl FromIterator<Token> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

//=== InputSampler ========================================================

/// Owns HeldKeys, the key binding table and the view's focus flag.
///
/// Created empty and unfocused when the view mounts; dropped with it.
#[derive(Debug, Clone)]
pub struct InputSampler {
    held: HeldKeys,

    /// Physical keys currently down that map to a token.
    pressed: HashSet<KeyCode>,

    bindings: KeyBindings,
    focused: bool,
}

impl InputSampler {
    /// Creates a sampler with the default bindings.
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::default())
    }

    /// Creates a sampler with a custom binding table.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            held: HeldKeys::new(),
            pressed: HashSet::new(),
            bindings,
            focused: false,
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Applies an ordered batch of events.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Applies one event.
    ///
    /// Returns `true` when the event was consumed: a recognized key pressed
    /// while focused. The host should then suppress its default handling
    /// for that key.
    pub fn process_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown { key } => {
                if !self.focused {
                    return false;
                }
                match self.bindings.token_for(key) {
                    Some(token) => {
                        self.pressed.insert(key);
                        if self.held.insert(token) {
                            trace!(target: "game", "Held {}", token);
                        }
                        true
                    }
                    None => false,
                }
            }

            InputEvent::KeyUp { key } => {
                if let Some(token) = self.bindings.token_for(key) {
                    self.pressed.remove(&key);

                    let alias_down = self
                        .pressed
                        .iter()
                        .any(|&other| self.bindings.token_for(other) == Some(token));

                    if !alias_down && self.held.remove(token) {
                        trace!(target: "game", "Released {}", token);
                    }
                }
                false
            }

            InputEvent::FocusChanged { focused } => {
                if self.focused != focused {
                    debug!(target: "game", "View focus: {}", focused);
                    self.focused = focused;
                }
                false
            }

            InputEvent::Unidentified => false,
        }
    }

    //--- Query API --------------------------------------------------------

    /// Read-only view of the held tokens.
    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    /// Returns `true` while the view has input focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
