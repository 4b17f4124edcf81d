use std::env;

/// A cursor over the captured argument vector.
///
/// The vector is immutable once captured; only the cursor moves. Reads past the end are not
/// errors - they report `None` indefinitely.
pub(crate) struct ArgumentReader {
    tokens: Vec<String>,
    cursor: usize,
}

impl ArgumentReader {
    /// Capture the process argument vector.
    pub(crate) fn capture() -> Self {
        Self::new(env::args().collect())
    }

    /// Wrap an injected vector.
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// The token at the cursor, without advancing.
    pub(crate) fn peek(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// The token at the cursor, advancing past it.
    pub(crate) fn next(&mut self) -> Option<&str> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    /// The tokens at and after the cursor.
    pub(crate) fn remaining(&self) -> &[String] {
        &self.tokens[self.cursor..]
    }
}
