use crate::{error::EvalError, evaluator::cursor::Cursor};

/// An additive operator token: `+` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    /// `+`
    Add,
    /// `-`
    Sub,
}

/// A multiplicative operator token: `*` or `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// A comparison operator token.
///
/// Comparison tokens are recognized with two-character lookahead and a
/// one-character fallback (`<=` before `<`, `>=` before `>`). The scanner
/// returns the token as an owned value on the stack; no scratch buffer
/// outlives the call, so concurrent evaluations can never observe each
/// other's operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl CmpOp {
    /// Applies the comparison to two operands.
    ///
    /// Booleans are represented as `0`/`1` so a chain's result feeds the
    /// next comparison as an ordinary integer operand.
    ///
    /// # Example
    /// ```
    /// use semicalc::evaluator::token::CmpOp;
    ///
    /// assert_eq!(CmpOp::Less.apply(1, 2), 1);
    /// assert_eq!(CmpOp::NotEqual.apply(3, 3), 0);
    /// ```
    #[must_use]
    pub fn apply(self, left: i64, right: i64) -> i64 {
        let holds = match self {
            Self::Less => left < right,
            Self::Greater => left > right,
            Self::LessEqual => left <= right,
            Self::GreaterEqual => left >= right,
            Self::Equal => left == right,
            Self::NotEqual => left != right,
        };
        i64::from(holds)
    }
}

/// Scans an additive operator at the cursor.
///
/// Skips leading whitespace, then returns the token and the advanced cursor
/// when the next character is `+` or `-`, or `None` (leaving the input for
/// the enclosing rule) otherwise.
#[must_use]
pub fn additive_op(cursor: Cursor<'_>) -> Option<(AddOp, Cursor<'_>)> {
    let cursor = cursor.skip_whitespace();
    match cursor.peek() {
        Some('+') => Some((AddOp::Add, cursor.advance())),
        Some('-') => Some((AddOp::Sub, cursor.advance())),
        _ => None,
    }
}

/// Scans a multiplicative operator at the cursor.
///
/// Skips leading whitespace, then returns the token and the advanced cursor
/// when the next character is `*` or `/`, or `None` otherwise.
#[must_use]
pub fn multiplicative_op(cursor: Cursor<'_>) -> Option<(MulOp, Cursor<'_>)> {
    let cursor = cursor.skip_whitespace();
    match cursor.peek() {
        Some('*') => Some((MulOp::Mul, cursor.advance())),
        Some('/') => Some((MulOp::Div, cursor.advance())),
        _ => None,
    }
}

/// Scans a comparison operator at the cursor.
///
/// Recognizes `<`, `>`, `<=`, `>=`, `==` and `!=` with two-character
/// lookahead. A character that cannot start a comparison operator yields
/// `Ok(None)` so the comparison fold can end its chain.
///
/// # Errors
/// A lone `=` or `!` in operator position is a malformed comparison
/// operator and yields `EvalError::InvalidComparisonOperator`.
pub fn comparison_op(cursor: Cursor<'_>) -> Result<Option<(CmpOp, Cursor<'_>)>, EvalError> {
    let cursor = cursor.skip_whitespace();
    let second = cursor.peek_second();

    let (op, len) = match cursor.peek() {
        Some('<') if second == Some('=') => (CmpOp::LessEqual, 2),
        Some('<') => (CmpOp::Less, 1),
        Some('>') if second == Some('=') => (CmpOp::GreaterEqual, 2),
        Some('>') => (CmpOp::Greater, 1),
        Some('=') if second == Some('=') => (CmpOp::Equal, 2),
        Some('!') if second == Some('=') => (CmpOp::NotEqual, 2),
        Some('=' | '!') => return Err(EvalError::InvalidComparisonOperator),
        _ => return Ok(None),
    };

    let mut cursor = cursor;
    for _ in 0..len {
        cursor = cursor.advance();
    }
    Ok(Some((op, cursor)))
}
