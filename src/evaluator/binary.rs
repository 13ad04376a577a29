use crate::{
    error::EvalError,
    evaluator::{
        atom::eval_atom,
        core::EvalResult,
        cursor::Cursor,
        token::{AddOp, MulOp, additive_op, comparison_op, multiplicative_op},
    },
    util::num::checked_pow,
};

/// Evaluates an additive expression, the loosest-binding level.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// The fold is strictly left-associative: `a - b - c` computes `(a-b)-c`.
/// Additive arithmetic wraps on overflow; only exponentiation is checked.
///
/// # Errors
/// Propagates any error from a sub-rule unchanged.
pub(crate) fn eval_expression(cursor: Cursor<'_>) -> EvalResult<(i64, Cursor<'_>)> {
    let (mut acc, mut cursor) = eval_term(cursor)?;

    while let Some((op, rest)) = additive_op(cursor) {
        let (rhs, rest) = eval_term(rest)?;
        acc = match op {
            AddOp::Add => acc.wrapping_add(rhs),
            AddOp::Sub => acc.wrapping_sub(rhs),
        };
        cursor = rest;
    }

    Ok((acc, cursor))
}

/// Evaluates a multiplicative term.
///
/// Grammar: `term := comparison (("*" | "/") comparison)*`
///
/// Left-associative: `a / b / c` computes `(a/b)/c`. Division truncates
/// toward zero; a zero divisor aborts the whole evaluation with
/// `DivisionByZero`, never just the sub-expression.
///
/// # Errors
/// - `EvalError::DivisionByZero` for a zero divisor.
/// - Propagates any error from a sub-rule unchanged.
pub(crate) fn eval_term(cursor: Cursor<'_>) -> EvalResult<(i64, Cursor<'_>)> {
    let (mut acc, mut cursor) = eval_comparison(cursor)?;

    while let Some((op, rest)) = multiplicative_op(cursor) {
        let (rhs, rest) = eval_comparison(rest)?;
        acc = match op {
            MulOp::Mul => acc.wrapping_mul(rhs),
            MulOp::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                acc.wrapping_div(rhs)
            },
        };
        cursor = rest;
    }

    Ok((acc, cursor))
}

/// Evaluates a chain of comparisons.
///
/// Grammar: `comparison := exponent (cmp_op exponent)*`
///
/// Comparisons bind tighter than `*` and `/` in this grammar. Each
/// comparison yields `0` or `1`, which becomes the left operand of the next
/// comparison token, so `1 < 2 == 1` evaluates `1 < 2` to `1` and then
/// `1 == 1` to `1`.
///
/// # Errors
/// - `EvalError::InvalidComparisonOperator` for a lone `=` or `!` in
///   operator position.
/// - Propagates any error from a sub-rule unchanged.
pub(crate) fn eval_comparison(cursor: Cursor<'_>) -> EvalResult<(i64, Cursor<'_>)> {
    let (mut acc, mut cursor) = eval_exponent(cursor)?;

    while let Some((op, rest)) = comparison_op(cursor)? {
        let (rhs, rest) = eval_exponent(rest)?;
        acc = op.apply(acc, rhs);
        cursor = rest;
    }

    Ok((acc, cursor))
}

/// Evaluates an exponentiation expression.
///
/// Grammar: `exponent := atom ("^" exponent)?`
///
/// Right-associative via recursion on the right-hand side, so `2^3^2`
/// computes `2^(3^2)` = `512`. The power itself goes through
/// [`checked_pow`]: negative exponents and out-of-range results are
/// reported, never silently wrapped. The recursion counts against the same
/// nesting-depth limit as parenthesized groups.
///
/// # Errors
/// - `EvalError::Exponentiation` for a negative exponent or an overflowing
///   result.
/// - Propagates any error from a sub-rule unchanged.
pub(crate) fn eval_exponent(cursor: Cursor<'_>) -> EvalResult<(i64, Cursor<'_>)> {
    let (base, cursor) = eval_atom(cursor)?;

    let cursor = cursor.skip_whitespace();
    match cursor.eat('^') {
        Some(rest) => {
            let (exponent, rest) = eval_exponent(rest.descend()?)?;
            Ok((checked_pow(base, exponent)?, rest.ascend()))
        },
        None => Ok((base, cursor)),
    }
}
