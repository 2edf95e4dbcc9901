//! # sheetroll-dice
//!
//! Dice notation for sheetroll.
//!
//! This crate provides:
//! - A tokenizer for a single dice token (`2d6+3`, `d20`, `4d8-1`)
//! - [`DiceExpression`], the validated form of a token, and its roller
//! - [`find_dice`], which locates the first dice-shaped substring in free text
//!
//! ## Example
//!
//! ```rust
//! use sheetroll_dice::{find_dice, DiceExpression};
//!
//! let formula = "2 * (1d4) + 1";
//! let found = find_dice(formula).unwrap();
//! assert_eq!(found.as_str(), "1d4");
//!
//! let dice = DiceExpression::parse(found.as_str()).unwrap();
//! let outcome = dice.roll(&mut rand::thread_rng());
//! assert!((1..=4).contains(&outcome.total));
//! ```

mod error;
mod expression;
mod scan;
mod token;

pub use error::{DiceError, DiceResult};
pub use expression::{roll, DiceExpression, RollOutcome, MAX_DICE};
pub use scan::{find_dice, DiceMatch};
pub use token::{scan_token, DiceToken};
