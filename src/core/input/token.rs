//=========================================================================
// Motion Tokens
//=========================================================================
//
// Logical direction/action tokens stored in HeldKeys.
//
// The simulation never sees physical keys. It only asks whether a token
// is currently held.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Token ===============================================================

/// Logical motion or action token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Move toward lower world X.
    Left,

    /// Move toward higher world X.
    Right,

    /// Start a jump (only while grounded).
    Jump,
}

impl Token {
    /// Every token, in evaluation order of the simulation step.
    pub const ALL: [Token; 3] = [Token::Left, Token::Right, Token::Jump];

    /// Lowercase name, as shown in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Jump => "jump",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
