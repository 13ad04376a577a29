use crate::{
    error::EvalError,
    evaluator::{binary::eval_expression, cursor::Cursor},
};

/// Result type used by the evaluator.
///
/// All grammar rules return either a value of type `T` or an [`EvalError`]
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Maximum parenthesis/exponent nesting depth accepted by the evaluator.
///
/// Recursion depth is otherwise bounded only by input length, so deeply
/// nested input is rejected with a syntax error before it can exhaust the
/// native stack.
pub const MAX_NESTING_DEPTH: u32 = 128;

/// Evaluates one statement line and returns its value.
///
/// This is the public entry point of the grammar engine. The input is an
/// arbitrary line of text without an embedded line terminator; leading,
/// trailing and internal whitespace are insignificant everywhere except
/// between a literal's sign and its digits. Evaluation is a single
/// recursive-descent pass that validates syntax and computes the value at
/// the same time; there is no token stream and no intermediate tree.
///
/// Grammar: `statement := expression ";"` with nothing but whitespace
/// permitted after the `;`.
///
/// The call has no side effects and no hidden state: re-evaluating the same
/// line always yields the identical result.
///
/// # Errors
/// The first error detected anywhere in the descent is returned unchanged:
/// - `EvalError::MissingSemicolon` when a well-formed expression is not
///   terminated by `;`.
/// - `EvalError::TrailingCharacters` when non-whitespace follows the `;`.
/// - Any error produced by an enclosed rule, such as
///   `EvalError::DivisionByZero` or the generic `EvalError::Syntax`.
///
/// # Example
/// ```
/// use semicalc::{EvalError, evaluate};
///
/// assert_eq!(evaluate("10 - 3 - 2;"), Ok(5));
/// assert_eq!(evaluate("2^3^2;"), Ok(512));
/// assert_eq!(evaluate("1 + 2"), Err(EvalError::MissingSemicolon));
/// assert_eq!(evaluate("5 / 0;"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(line: &str) -> EvalResult<i64> {
    let (value, cursor) = eval_statement(Cursor::new(line))?;

    let cursor = cursor.skip_whitespace();
    if cursor.at_end() {
        Ok(value)
    } else {
        Err(EvalError::TrailingCharacters)
    }
}

/// Evaluates the top-level statement rule.
///
/// Parses a full expression, then requires the terminating `;`. Anything
/// other than `;` after a complete expression means the statement was never
/// terminated; failures inside the expression itself keep their own kinds.
fn eval_statement(cursor: Cursor<'_>) -> EvalResult<(i64, Cursor<'_>)> {
    let (value, cursor) = eval_expression(cursor)?;

    let cursor = cursor.skip_whitespace();
    match cursor.eat(';') {
        Some(rest) => Ok((value, rest)),
        None => Err(EvalError::MissingSemicolon),
    }
}
