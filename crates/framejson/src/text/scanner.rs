//! Character scanner with one-char lookahead and position tracking.

use super::error::{ParseError, TextPosition};

/// A cursor over the input characters.
///
/// Keeps the line/column position every [`ParseError`] reports. One
/// scanner serves one parse; instances are not reused.
pub(crate) struct Scanner {
    chars: Vec<char>,
    x: usize,
    line: u32,
    column: u32,
}

impl Scanner {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            x: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn position(&self) -> TextPosition {
        TextPosition {
            line: self.line,
            column: self.column,
        }
    }

    pub(crate) fn can_read(&self) -> bool {
        self.x < self.chars.len()
    }

    /// The next character, without consuming it.
    pub(crate) fn peek(&self) -> Result<char, ParseError> {
        self.chars
            .get(self.x)
            .copied()
            .ok_or(ParseError::UnexpectedEndOfText(self.position()))
    }

    /// Consumes and returns the next character.
    pub(crate) fn read(&mut self) -> Result<char, ParseError> {
        let c = self.peek()?;
        self.x += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(c)
    }

    /// Consumes the next character, requiring it to be `expected`.
    pub(crate) fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        let position = self.position();
        if self.read()? != expected {
            return Err(ParseError::InvalidOrUnexpectedCharacter(position));
        }
        Ok(())
    }

    /// Consumes an exact keyword such as `true` or `null`.
    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        for expected in keyword.chars() {
            self.expect(expected)?;
        }
        Ok(())
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.get(self.x) {
            if !c.is_whitespace() {
                break;
            }
            let c = *c;
            self.x += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_line_and_column() {
        let mut scanner = Scanner::new("ab\ncd");
        scanner.read().unwrap();
        scanner.read().unwrap();
        assert_eq!(scanner.position(), TextPosition { line: 1, column: 3 });
        scanner.read().unwrap(); // the newline
        assert_eq!(scanner.position(), TextPosition { line: 2, column: 1 });
    }

    #[test]
    fn peek_does_not_consume() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.peek().unwrap(), 'x');
        assert_eq!(scanner.read().unwrap(), 'x');
        assert!(matches!(
            scanner.read(),
            Err(ParseError::UnexpectedEndOfText(_))
        ));
    }

    #[test]
    fn expect_keyword_rejects_mismatch() {
        let mut scanner = Scanner::new("true");
        scanner.expect_keyword("true").unwrap();

        let mut scanner = Scanner::new("nuLl");
        assert!(matches!(
            scanner.expect_keyword("null"),
            Err(ParseError::InvalidOrUnexpectedCharacter(_))
        ));
    }
}
