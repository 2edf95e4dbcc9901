//! Dice error types

use thiserror::Error;

/// Result type for dice operations
pub type DiceResult<T> = std::result::Result<T, DiceError>;

/// Errors that can occur while parsing dice notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Text does not have the shape `[count]d<sides>[+|-modifier]`
    #[error("Invalid dice notation: '{0}'")]
    InvalidNotation(String),

    /// A die needs at least one side
    #[error("Dice must have at least one side: '{0}'")]
    NoSides(String),

    /// More dice than a single roll may throw
    #[error("Too many dice in '{notation}' (max {max})")]
    TooManyDice { notation: String, max: u32 },

    /// A digit run does not fit its numeric type
    #[error("Number out of range in dice notation: '{0}'")]
    OutOfRange(String),
}
