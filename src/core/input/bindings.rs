//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical keys to motion tokens.
//
// Architecture:
//   KeyCode → HashMap → Token
//
// Several keys may map to the same token (arrows and WASD). A key maps to
// at most one token; rebinding a key replaces its previous token.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{event::KeyCode, token::Token};

//=== KeyBindings =========================================================

/// Physical key → token table used by the input sampler.
///
/// `KeyBindings::default()` holds the recognized keys:
///
/// | token   | keys                        |
/// |---------|-----------------------------|
/// | `Left`  | `ArrowLeft`, `A`            |
/// | `Right` | `ArrowRight`, `D`           |
/// | `Jump`  | `ArrowUp`, `W`, `Space`     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Token>,
}

impl KeyBindings {
    /// Creates an empty table (no key is recognized).
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a token, replacing any previous binding for that key.
    pub fn bind(&mut self, key: KeyCode, token: Token) {
        if let Some(previous) = self.bindings.insert(key, token) {
            if previous != token {
                debug!(target: "game", "Rebound {:?}: {} -> {}", key, previous, token);
            }
        }
    }

    /// Removes the binding for a key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Removes every key bound to `token`.
    pub fn unbind_token(&mut self, token: Token) {
        self.bindings.retain(|_, bound| *bound != token);
    }

    //--- Lookup -----------------------------------------------------------

    /// Resolves a key to its token.
    pub fn token_for(&self, key: KeyCode) -> Option<Token> {
        self.bindings.get(&key).copied()
    }

    /// Returns every key currently bound to `token`.
    pub fn keys_for(&self, token: Token) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == token)
            .map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::ArrowLeft, Token::Left);
        bindings.bind(KeyCode::KeyA, Token::Left);

        bindings.bind(KeyCode::ArrowRight, Token::Right);
        bindings.bind(KeyCode::KeyD, Token::Right);

        bindings.bind(KeyCode::ArrowUp, Token::Jump);
        bindings.bind(KeyCode::KeyW, Token::Jump);
        bindings.bind(KeyCode::Space, Token::Jump);

        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Default Table
    //=====================================================================

    #[test]
    fn defaults_cover_arrows_and_wasd() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.token_for(KeyCode::ArrowLeft), Some(Token::Left));
        assert_eq!(bindings.token_for(KeyCode::KeyA), Some(Token::Left));
        assert_eq!(bindings.token_for(KeyCode::ArrowRight), Some(Token::Right));
        assert_eq!(bindings.token_for(KeyCode::KeyD), Some(Token::Right));
        assert_eq!(bindings.token_for(KeyCode::ArrowUp), Some(Token::Jump));
        assert_eq!(bindings.token_for(KeyCode::KeyW), Some(Token::Jump));
        assert_eq!(bindings.token_for(KeyCode::Space), Some(Token::Jump));
        assert_eq!(bindings.len(), 7);
    }

    #[test]
    fn defaults_ignore_unrelated_keys() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.token_for(KeyCode::KeyS), None);
        assert_eq!(bindings.token_for(KeyCode::ArrowDown), None);
        assert_eq!(bindings.token_for(KeyCode::Escape), None);
        assert_eq!(bindings.token_for(KeyCode::Unidentified), None);
    }

    //=====================================================================
    // Rebinding
    //=====================================================================

    #[test]
    fn bind_replaces_previous_token() {
        let mut bindings = KeyBindings::default();
        bindings.bind(KeyCode::Space, Token::Right);

        assert_eq!(bindings.token_for(KeyCode::Space), Some(Token::Right));
        assert_eq!(bindings.len(), 7);
    }

    #[test]
    fn unbind_token_removes_all_its_keys() {
        let mut bindings = KeyBindings::default();
        bindings.unbind_token(Token::Jump);

        assert_eq!(bindings.keys_for(Token::Jump).count(), 0);
        assert_eq!(bindings.token_for(KeyCode::KeyA), Some(Token::Left));
    }

    #[test]
    fn unbind_single_key() {
        let mut bindings = KeyBindings::default();
        bindings.unbind(KeyCode::KeyW);

        assert_eq!(bindings.token_for(KeyCode::KeyW), None);
        assert_eq!(bindings.keys_for(Token::Jump).count(), 2);
    }

    #[test]
    fn empty_table_recognizes_nothing() {
        let bindings = KeyBindings::empty();
        assert!(bindings.is_empty());
        assert_eq!(bindings.token_for(KeyCode::ArrowLeft), None);
    }
}
