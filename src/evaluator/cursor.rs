use crate::{error::EvalError, evaluator::core::MAX_NESTING_DEPTH};

/// An immutable view into the remaining unconsumed input.
///
/// A `Cursor` pairs the full input line with a byte position and the current
/// parenthesis/exponent nesting depth. Every grammar rule receives a cursor
/// by value and returns the advanced cursor alongside its computed value, so
/// the position only ever moves forward and no rule can observe another
/// rule's scratch state. Exactly one cursor chain is live per evaluation;
/// concurrent evaluations of different lines never share anything.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text:  &'a str,
    pos:   usize,
    depth: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `text` with zero nesting
    /// depth.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text, pos: 0, depth: 0 }
    }

    /// Returns the byte offset of the next unconsumed character.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the whole input has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Returns the next unconsumed character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Returns the character after the next one, for two-character operator
    /// lookahead such as `<=` and `==`.
    #[must_use]
    pub fn peek_second(&self) -> Option<char> {
        let mut chars = self.text[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes one character and returns the advanced cursor.
    ///
    /// Calling this at the end of input returns the cursor unchanged; rules
    /// always peek before they advance.
    #[must_use]
    pub fn advance(self) -> Self {
        match self.peek() {
            Some(c) => Self { pos: self.pos + c.len_utf8(),
                              ..self },
            None => self,
        }
    }

    /// Consumes `expected` if it is the next character.
    ///
    /// Returns the advanced cursor on a match and `None` otherwise, leaving
    /// the original cursor untouched for the caller to continue with.
    #[must_use]
    pub fn eat(self, expected: char) -> Option<Self> {
        match self.peek() {
            Some(c) if c == expected => Some(self.advance()),
            _ => None,
        }
    }

    /// Skips past any leading whitespace.
    ///
    /// Every grammar rule calls this before matching its first token;
    /// whitespace is insignificant everywhere except between a literal's
    /// sign and its digits.
    #[must_use]
    pub fn skip_whitespace(mut self) -> Self {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self = self.advance();
        }
        self
    }

    /// Returns the text consumed between `start` and this cursor.
    ///
    /// Used by the numeral scanner to hand the matched digits to the integer
    /// parser in one slice.
    #[must_use]
    pub fn span_from(&self, start: &Self) -> &'a str {
        &self.text[start.pos..self.pos]
    }

    /// Enters one nesting level (a parenthesized group or the right-hand
    /// side of `^`).
    ///
    /// # Errors
    /// Returns `EvalError::Syntax` when the nesting depth would exceed
    /// [`MAX_NESTING_DEPTH`], so pathological inputs fail cleanly instead of
    /// exhausting the native stack.
    pub const fn descend(self) -> Result<Self, EvalError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(EvalError::Syntax);
        }
        Ok(Self { text:  self.text,
                  pos:   self.pos,
                  depth: self.depth + 1, })
    }

    /// Leaves one nesting level after the recursive sub-rule returned.
    #[must_use]
    pub const fn ascend(self) -> Self {
        Self { text:  self.text,
               pos:   self.pos,
               depth: self.depth.saturating_sub(1), }
    }
}
