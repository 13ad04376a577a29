/// Core evaluation entry points and shared definitions.
///
/// Declares the `EvalResult` alias, the nesting-depth limit, the public
/// `evaluate` function and the top-level statement rule that requires the
/// terminating `;`.
pub mod core;

/// The input cursor threaded through every grammar rule.
///
/// An immutable remaining-input view plus a position, advanced only by the
/// rule currently consuming a token and returned to the caller alongside
/// each rule's value.
pub mod cursor;

/// Binary grammar rules.
///
/// Implements the left-associative additive, multiplicative and comparison
/// folds and the right-associative exponentiation rule, each corresponding
/// to one precedence level.
pub mod binary;

/// Atomic grammar rules.
///
/// Handles parenthesized groups and signed integer literals, the
/// tightest-binding level of the grammar.
pub mod atom;

/// Operator-token recognition.
///
/// Peeks and consumes operator tokens directly at the cursor, with
/// two-character lookahead for comparison operators; there is no separate
/// tokenization pass.
pub mod token;
