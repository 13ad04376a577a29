use crate::{
    error::EvalError,
    evaluator::{binary::eval_expression, core::EvalResult, cursor::Cursor},
};

/// Evaluates an atom, the tightest-binding level of the grammar.
///
/// Grammar: `atom := "(" expression ")" | number`
///
/// A parenthesized group recurses into the full expression rule under one
/// extra nesting level; anything else must be a signed integer literal.
///
/// # Errors
/// - `MissingClosingParenthesis` when a `(` group is not closed by `)`.
/// - `Syntax` when neither a group nor a numeral starts here, or the
///   nesting-depth limit is exceeded.
/// - Propagates any error from the enclosed expression unchanged.
pub(crate) fn eval_atom(cursor: Cursor<'_>) -> EvalResult<(i64, Cursor<'_>)> {
    let cursor = cursor.skip_whitespace();

    match cursor.eat('(') {
        Some(open) => {
            let (value, inner) = eval_expression(open.descend()?)?;
            let inner = inner.skip_whitespace();
            match inner.eat(')') {
                Some(closed) => Ok((value, closed.ascend())),
                None => Err(EvalError::MissingClosingParenthesis),
            }
        },
        None => scan_number(cursor),
    }
}

/// Scans a signed integer literal.
///
/// Grammar: `number := ("+" | "-")? digit+`
///
/// The optional sign must be immediately adjacent to the digits: `-3` is a
/// negative literal, while `- 3` fails here and is never reinterpreted as a
/// unary operator. Leading whitespace before the whole numeral is skipped
/// like every other rule.
///
/// # Errors
/// Returns `EvalError::Syntax` when no digit follows the (optional) sign or
/// when the literal does not fit an `i64`.
pub(crate) fn scan_number(cursor: Cursor<'_>) -> EvalResult<(i64, Cursor<'_>)> {
    let start = cursor.skip_whitespace();

    let mut cursor = match start.peek() {
        Some('+' | '-') => start.advance(),
        _ => start,
    };

    if !cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        return Err(EvalError::Syntax);
    }
    while cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        cursor = cursor.advance();
    }

    let value = cursor.span_from(&start)
                      .parse::<i64>()
                      .map_err(|_| EvalError::Syntax)?;
    Ok((value, cursor))
}
