/// Represents every way an evaluation can fail.
///
/// Each variant is a distinguished error kind that callers can branch on to
/// produce kind-specific diagnostics. The first failure detected anywhere in
/// the recursive descent becomes the final result; enclosing rules pass it
/// up unchanged without recovery or resynchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Generic unparsable input: a rule could not match its required first
    /// token (for example, a numeral rule that sees no digits).
    Syntax,
    /// The expression was well formed but not terminated by `;`.
    MissingSemicolon,
    /// An opening `(` was never matched by a closing `)`.
    MissingClosingParenthesis,
    /// A `/` was applied with a zero divisor.
    DivisionByZero,
    /// A `^` was applied with a negative exponent, or the power result fell
    /// outside the representable signed integer range.
    Exponentiation,
    /// A comparison operator started with `=` or `!` but was not completed
    /// by a second `=`. Well-formed input never triggers any other path to
    /// this kind.
    InvalidComparisonOperator,
    /// Non-whitespace content followed the terminating `;`.
    TrailingCharacters,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => write!(f, "Syntax Error"),

            Self::MissingSemicolon => {
                write!(f, "Syntax Error: Expected ';' at the end of the statement.")
            },

            Self::MissingClosingParenthesis => {
                write!(f, "Syntax Error: Expected closing parenthesis ')' but none found.")
            },

            Self::DivisionByZero => write!(f, "Runtime Error: Division by zero."),

            Self::Exponentiation => write!(f,
                                           "Runtime Error: Exponent must be non-negative and the result must fit a 64-bit integer."),

            Self::InvalidComparisonOperator => {
                write!(f, "Syntax Error: Invalid comparison operator.")
            },

            Self::TrailingCharacters => {
                write!(f, "Syntax Error: Unexpected characters after the terminating ';'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
