//! Formula lookup and dice substitution
//!
//! A formula row has the command name in its first column and an arithmetic formula in
//! its third. The formula may contain one dice token (`1d20+5`); the first such token
//! is rolled and replaced by the rolled number before the formula is evaluated. Any
//! later dice tokens are left as they are, which makes the evaluator reject them.

use rand::Rng;
use sheetroll_dice::{find_dice, DiceError, DiceExpression};
use sheetroll_formula::{evaluate_str, FormulaError};
use sheetroll_sheets::SheetRow;
use thiserror::Error;

/// Column holding the command name
pub const NAME_COLUMN: usize = 0;

/// Column holding the formula
pub const FORMULA_COLUMN: usize = 2;

/// A formula after dice substitution and evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFormula {
    /// Formula text with the dice token replaced by its rolled value
    pub formula: String,
    /// Rolled value, if the formula contained dice
    pub roll: Option<i64>,
    /// Evaluated result
    pub result: f64,
}

/// Errors from looking up and resolving a formula
#[derive(Debug, Error)]
pub enum LookupError {
    /// No row has the requested command in its first column
    #[error("Command '{command}' not found")]
    CommandNotFound { command: String },

    /// The formula's dice token cannot be rolled
    #[error("Invalid dice notation in formula '{formula}': {source}")]
    InvalidDiceNotation {
        formula: String,
        #[source]
        source: DiceError,
    },

    /// The substituted formula cannot be evaluated
    #[error("Error in formula '{formula}': {source}")]
    FormulaEvaluation {
        formula: String,
        #[source]
        source: FormulaError,
    },
}

/// Find the raw formula for a command
///
/// Returns the third field of the first row that has at least three fields and whose
/// first field, trimmed, equals `command` ignoring case.
pub fn find_formula<'a>(rows: &'a [SheetRow], command: &str) -> Option<&'a str> {
    let wanted = command.to_lowercase();

    rows.iter()
        .filter(|row| row.len() > FORMULA_COLUMN)
        .find(|row| {
            row.field(NAME_COLUMN)
                .map_or(false, |name| name.trim().to_lowercase() == wanted)
        })
        .and_then(|row| row.field(FORMULA_COLUMN))
}

/// Roll the first dice token in `raw` (if any), substitute it, and evaluate
pub fn resolve_formula<R: Rng + ?Sized>(
    raw: &str,
    rng: &mut R,
) -> Result<ResolvedFormula, LookupError> {
    let (formula, roll) = match find_dice(raw) {
        Some(found) => {
            let dice = DiceExpression::parse(found.as_str()).map_err(|source| {
                LookupError::InvalidDiceNotation {
                    formula: raw.to_string(),
                    source,
                }
            })?;
            let outcome = dice.roll(rng);
            tracing::debug!(
                "Rolled {dice}: faces {:?} total {}",
                outcome.faces,
                outcome.total
            );
            (
                found.replace_with(&outcome.total.to_string()),
                Some(outcome.total),
            )
        }
        None => (raw.to_string(), None),
    };

    let result = evaluate_str(&formula).map_err(|source| LookupError::FormulaEvaluation {
        formula: formula.clone(),
        source,
    })?;

    Ok(ResolvedFormula {
        formula,
        roll,
        result,
    })
}

/// Look up a command's formula in `rows` and resolve it
pub fn lookup_and_resolve<R: Rng + ?Sized>(
    rows: &[SheetRow],
    command: &str,
    rng: &mut R,
) -> Result<ResolvedFormula, LookupError> {
    let raw = find_formula(rows, command).ok_or_else(|| LookupError::CommandNotFound {
        command: command.to_string(),
    })?;

    resolve_formula(raw, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rows(data: &[&[&str]]) -> Vec<SheetRow> {
        data.iter().map(|fields| fields.iter().copied().collect()).collect()
    }

    fn attack_sheet() -> Vec<SheetRow> {
        rows(&[&["Attack", "", "1d6+2"], &["Defend", "", "3"]])
    }

    #[test]
    fn test_find_formula_ignores_case() {
        let sheet = attack_sheet();
        assert_eq!(find_formula(&sheet, "attack"), Some("1d6+2"));
        assert_eq!(find_formula(&sheet, "DEFEND"), Some("3"));
    }

    #[test]
    fn test_find_formula_trims_name_column() {
        let sheet = rows(&[&["  Heal ", "", "2d4"]]);
        assert_eq!(find_formula(&sheet, "heal"), Some("2d4"));
    }

    #[test]
    fn test_find_formula_skips_short_rows() {
        let sheet = rows(&[&["Attack", "note"], &["Attack", "", "5"]]);
        assert_eq!(find_formula(&sheet, "Attack"), Some("5"));
    }

    #[test]
    fn test_find_formula_first_match_wins() {
        let sheet = rows(&[&["Attack", "", "1"], &["attack", "", "2"]]);
        assert_eq!(find_formula(&sheet, "ATTACK"), Some("1"));
    }

    #[test]
    fn test_dice_only_formula_evaluates_to_roll() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let resolved = lookup_and_resolve(&attack_sheet(), "attack", &mut rng).unwrap();
            let roll = resolved.roll.unwrap();
            assert!((3..=8).contains(&roll), "rolled {roll}");
            assert_eq!(resolved.result, roll as f64);
            assert_eq!(resolved.formula, roll.to_string());
        }
    }

    #[test]
    fn test_dice_inside_arithmetic() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let resolved = resolve_formula("2 * (1d4) + 1", &mut rng).unwrap();
            let r = resolved.roll.unwrap();
            assert!((1..=4).contains(&r));
            assert_eq!(resolved.formula, format!("2 * ({r}) + 1"));
            assert_eq!(resolved.result, (2 * r + 1) as f64);
        }
    }

    #[test]
    fn test_formula_without_dice() {
        let mut rng = StdRng::seed_from_u64(0);
        let resolved = lookup_and_resolve(&attack_sheet(), "Defend", &mut rng).unwrap();
        assert_eq!(
            resolved,
            ResolvedFormula {
                formula: "3".into(),
                roll: None,
                result: 3.0,
            }
        );
    }

    #[test]
    fn test_only_first_dice_token_substituted() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = resolve_formula("1d6 + 1d8", &mut rng).unwrap_err();
        match err {
            LookupError::FormulaEvaluation { formula, .. } => {
                assert!(formula.ends_with(" + 1d8"), "got {formula}");
            }
            other => panic!("expected evaluation error, got {other:?}"),
        }
    }

    #[test]
    fn test_command_not_found() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = lookup_and_resolve(&attack_sheet(), "Flee", &mut rng).unwrap_err();
        assert!(matches!(err, LookupError::CommandNotFound { command } if command == "Flee"));
    }

    #[test]
    fn test_invalid_dice_aborts_before_evaluation() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = resolve_formula("1d0 + 2", &mut rng).unwrap_err();
        match err {
            LookupError::InvalidDiceNotation { formula, source } => {
                assert_eq!(formula, "1d0 + 2");
                assert_eq!(source, DiceError::NoSides("1d0".into()));
            }
            other => panic!("expected dice error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_formula() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = resolve_formula("2 + ", &mut rng).unwrap_err();
        assert!(matches!(
            err,
            LookupError::FormulaEvaluation {
                source: FormulaError::Parse(_),
                ..
            }
        ));
    }

    #[test]
    fn test_deeply_nested_formula_is_reported() {
        let mut rng = StdRng::seed_from_u64(0);
        let raw = format!("{}1d6{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = resolve_formula(&raw, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            LookupError::FormulaEvaluation {
                source: FormulaError::Parse(_),
                ..
            }
        ));
    }

    #[test]
    fn test_negative_roll_substitutes_cleanly() {
        let mut rng = StdRng::seed_from_u64(9);
        let resolved = resolve_formula("10 - 1d1-5", &mut rng).unwrap();
        assert_eq!(resolved.roll, Some(-4));
        assert_eq!(resolved.formula, "10 - -4");
        assert_eq!(resolved.result, 14.0);
    }
}
