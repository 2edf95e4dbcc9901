//! Expression evaluator
//!
//! Evaluates expression ASTs to produce numbers.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::FunctionRegistry;
use crate::parser::parse_expression;
use std::sync::OnceLock;

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

fn get_function_registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Names of the functions formulas may call, sorted
pub fn function_names() -> Vec<&'static str> {
    get_function_registry().names()
}

/// Significant digits used when displaying non-integral results
const DISPLAY_DIGITS: i32 = 15;

/// Parse and evaluate an expression string
///
/// # Example
/// ```rust
/// use sheetroll_formula::evaluate_str;
///
/// assert_eq!(evaluate_str("2 * 4 + 1").unwrap(), 9.0);
/// assert_eq!(evaluate_str("2 ** 3").unwrap(), 8.0);
/// assert!(evaluate_str("2 + ").is_err());
/// ```
pub fn evaluate_str(text: &str) -> FormulaResult<f64> {
    let ast = parse_expression(text)?;
    evaluate(&ast)
}

/// Evaluate an expression
pub fn evaluate(expr: &Expr) -> FormulaResult<f64> {
    let value = match expr {
        Expr::Number(n) => *n,
        Expr::Name(name) => resolve_name(name)?,
        Expr::BinaryOp { op, left, right } => evaluate_binary_op(*op, left, right)?,
        Expr::UnaryOp { op, operand } => evaluate_unary_op(*op, operand)?,
        Expr::Function { name, args } => evaluate_function(name, args)?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::Evaluation(
            "Result is not a finite number".into(),
        ))
    }
}

/// Resolve a named constant
fn resolve_name(name: &str) -> FormulaResult<f64> {
    match name.to_lowercase().as_str() {
        "pi" => Ok(std::f64::consts::PI),
        "e" => Ok(std::f64::consts::E),
        _ => Err(FormulaError::UnknownName(name.to_string())),
    }
}

/// Evaluate a binary operation
fn evaluate_binary_op(op: BinaryOperator, left: &Expr, right: &Expr) -> FormulaResult<f64> {
    let l = evaluate(left)?;
    let r = evaluate(right)?;

    match op {
        BinaryOperator::Add => Ok(l + r),
        BinaryOperator::Subtract => Ok(l - r),
        BinaryOperator::Multiply => Ok(l * r),
        BinaryOperator::Divide => {
            if r == 0.0 {
                Err(FormulaError::DivisionByZero)
            } else {
                Ok(l / r)
            }
        }
        BinaryOperator::Power => {
            if l == 0.0 && r < 0.0 {
                return Err(FormulaError::DivisionByZero);
            }
            let result = l.powf(r);
            if result.is_nan() {
                Err(FormulaError::Evaluation(format!(
                    "{l} ^ {r} is not a real number"
                )))
            } else {
                Ok(result)
            }
        }
    }
}

/// Evaluate a unary operation
fn evaluate_unary_op(op: UnaryOperator, operand: &Expr) -> FormulaResult<f64> {
    let n = evaluate(operand)?;

    match op {
        UnaryOperator::Negate => Ok(-n),
    }
}

/// Evaluate a function call
fn evaluate_function(name: &str, args: &[Expr]) -> FormulaResult<f64> {
    let registry = get_function_registry();

    let func = registry
        .get(name)
        .ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))?;

    // Check argument count
    if args.len() < func.min_args {
        return Err(FormulaError::ArgumentCount {
            function: name.to_string(),
            expected: format!("at least {}", func.min_args),
            actual: args.len(),
        });
    }

    if let Some(max) = func.max_args {
        if args.len() > max {
            return Err(FormulaError::ArgumentCount {
                function: name.to_string(),
                expected: format!("at most {}", max),
                actual: args.len(),
            });
        }
    }

    // Evaluate arguments
    let mut evaluated_args = Vec::with_capacity(args.len());
    for arg in args {
        evaluated_args.push(evaluate(arg)?);
    }

    (func.implementation)(&evaluated_args)
}

/// Format a result for display
///
/// Integral values print without a fractional part; other values print with up to
/// 15 significant digits and no trailing zeros.
///
/// # Example
/// ```rust
/// use sheetroll_formula::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// ```
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }

    let magnitude = n.abs().log10().floor() as i32;
    if !(-5..15).contains(&magnitude) {
        return format!("{:e}", n);
    }

    let decimals = (DISPLAY_DIGITS - 1 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, n);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
