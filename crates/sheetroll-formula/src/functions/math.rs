//! Math functions

use crate::error::{FormulaError, FormulaResult};

/// ABS(x)
pub fn fn_abs(args: &[f64]) -> FormulaResult<f64> {
    Ok(args[0].abs())
}

/// SQRT(x) - x must not be negative
pub fn fn_sqrt(args: &[f64]) -> FormulaResult<f64> {
    let n = args[0];
    if n < 0.0 {
        return Err(FormulaError::Evaluation(format!(
            "Square root of negative number {n}"
        )));
    }
    Ok(n.sqrt())
}

/// FLOOR(x) - largest integer not greater than x
pub fn fn_floor(args: &[f64]) -> FormulaResult<f64> {
    Ok(args[0].floor())
}

/// CEILING(x) - smallest integer not less than x
pub fn fn_ceiling(args: &[f64]) -> FormulaResult<f64> {
    Ok(args[0].ceil())
}

/// ROUND(x, [digits]) - rounds half away from zero
pub fn fn_round(args: &[f64]) -> FormulaResult<f64> {
    let n = args[0];
    let digits = args.get(1).copied().unwrap_or(0.0).trunc();

    let factor = 10f64.powi(digits as i32);
    if factor == 0.0 || !factor.is_finite() {
        return Ok(n);
    }
    Ok((n * factor).round() / factor)
}

/// MIN(x, ...)
pub fn fn_min(args: &[f64]) -> FormulaResult<f64> {
    Ok(args.iter().copied().fold(f64::INFINITY, f64::min))
}

/// MAX(x, ...)
pub fn fn_max(args: &[f64]) -> FormulaResult<f64> {
    Ok(args.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// MOD(x, y) - remainder with the sign of the divisor
pub fn fn_mod(args: &[f64]) -> FormulaResult<f64> {
    let (n, d) = (args[0], args[1]);
    if d == 0.0 {
        return Err(FormulaError::DivisionByZero);
    }
    Ok(n - d * (n / d).floor())
}
