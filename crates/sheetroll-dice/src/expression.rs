//! Dice expressions and rolling

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{DiceError, DiceResult};
use crate::token::{scan_token, DiceToken};

/// Maximum number of dice a single expression may roll
pub const MAX_DICE: u32 = 1000;

/// A validated dice expression: `count` dice with `sides` faces, plus `modifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceExpression {
    pub count: u32,
    pub sides: u32,
    pub modifier: i64,
}

/// Result of rolling a [`DiceExpression`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// Individual die faces, in roll order
    pub faces: Vec<u32>,
    /// Modifier that was added to the faces
    pub modifier: i64,
    /// Sum of the faces plus the modifier
    pub total: i64,
}

impl DiceExpression {
    /// Create a dice expression, checking the limits
    pub fn new(count: u32, sides: u32, modifier: i64) -> DiceResult<Self> {
        let expr = Self {
            count,
            sides,
            modifier,
        };
        if sides == 0 {
            return Err(DiceError::NoSides(expr.to_string()));
        }
        if count > MAX_DICE {
            return Err(DiceError::TooManyDice {
                notation: expr.to_string(),
                max: MAX_DICE,
            });
        }
        Ok(expr)
    }

    /// Parse dice notation; the whole text must be a single dice token
    ///
    /// # Example
    /// ```rust
    /// use sheetroll_dice::DiceExpression;
    ///
    /// let dice = DiceExpression::parse("2d6+3").unwrap();
    /// assert_eq!((dice.count, dice.sides, dice.modifier), (2, 6, 3));
    ///
    /// let dice = DiceExpression::parse("d20").unwrap();
    /// assert_eq!((dice.count, dice.sides, dice.modifier), (1, 20, 0));
    ///
    /// assert!(DiceExpression::parse("2dx").is_err());
    /// ```
    pub fn parse(text: &str) -> DiceResult<Self> {
        let token = scan_token(text)
            .filter(|token| token.len == text.len())
            .ok_or_else(|| DiceError::InvalidNotation(text.to_string()))?;

        Self::from_token(&token)
    }

    /// Convert a scanned token into an expression
    pub fn from_token(token: &DiceToken<'_>) -> DiceResult<Self> {
        let out_of_range = || {
            let mut notation = String::new();
            if let Some(count) = token.count {
                notation.push_str(count);
            }
            notation.push('d');
            notation.push_str(token.sides);
            if let Some(modifier) = token.modifier {
                notation.push_str(modifier);
            }
            DiceError::OutOfRange(notation)
        };

        let count = match token.count {
            Some(digits) => digits.parse::<u32>().map_err(|_| out_of_range())?,
            None => 1,
        };
        let sides = token.sides.parse::<u32>().map_err(|_| out_of_range())?;
        let modifier = match token.modifier {
            Some(signed) => signed.parse::<i64>().map_err(|_| out_of_range())?,
            None => 0,
        };

        Self::new(count, sides, modifier)
    }

    /// Roll the dice using the given random source
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> RollOutcome {
        let faces: Vec<u32> = (0..self.count)
            .map(|_| rng.gen_range(1..=self.sides))
            .collect();
        let sum: i64 = faces.iter().map(|&face| i64::from(face)).sum();

        RollOutcome {
            faces,
            modifier: self.modifier,
            total: sum.saturating_add(self.modifier),
        }
    }

    /// Smallest possible total
    pub fn min_total(&self) -> i64 {
        i64::from(self.count).saturating_add(self.modifier)
    }

    /// Largest possible total
    pub fn max_total(&self) -> i64 {
        (i64::from(self.count) * i64::from(self.sides)).saturating_add(self.modifier)
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse and roll dice notation in one step
pub fn roll<R: Rng + ?Sized>(notation: &str, rng: &mut R) -> DiceResult<RollOutcome> {
    Ok(DiceExpression::parse(notation)?.roll(rng))
}
