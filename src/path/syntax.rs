use crate::errors::{Error, Result};

const COMMAND_CHARS: &str = "MmLlHhVvZzCcSsQqTtAa";

/// A single lexical item of SVG path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

/// Character cursor over path data.
///
/// Used both as a lazy `Iterator` of [`Token`]s and, via [`PathSyntax`], as a
/// context-driven reader by the interpreter.
///
/// The `Token` stream is a purely lexical view: it has no notion of which
/// operand comes next, so it can't split arc flags from following numbers.
/// `a1 1 0 00.5.5` yields `0`, `0.5`, `0.5` after the radii, while
/// [`PathParser`](super::PathParser) reads the flags with
/// [`PathSyntax::read_flag`] and gets `0`, `0`, `.5`, `.5`.
pub struct SvgPathSyntax {
    data: Vec<char>,
    index: usize,
}

impl SvgPathSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    /// Restart tokenization from the beginning of the data.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Whether the last non-whitespace character consumed was a comma.
    pub(crate) fn preceded_by_comma(&self) -> bool {
        self.data[..self.index.min(self.data.len())]
            .iter()
            .rev()
            .find(|c| !c.is_ascii_whitespace())
            == Some(&',')
    }

    fn next_token(&mut self) -> Result<Token> {
        self.check_not_end()?;
        if self.at_command()? {
            Ok(Token::Command(self.read_command()?))
        } else {
            Ok(Token::Number(self.read_number()?))
        }
    }
}

impl PathSyntax for SvgPathSyntax {
    fn at_command(&self) -> Result<bool> {
        self.check_not_end()?;
        let c = self
            .current()
            .ok_or_else(|| Error::Path("no data".to_string()))?;
        Ok(COMMAND_CHARS.contains(c))
    }

    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn at_end(&self) -> bool {
        self.index >= self.data.len()
    }

    fn offset(&self) -> usize {
        self.index
    }
}

impl Iterator for SvgPathSyntax {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.at_end() {
            return None;
        }
        let token = self.next_token();
        if token.is_err() {
            // don't keep producing errors from the same position
            self.index = self.data.len();
        }
        Some(token)
    }
}

pub trait PathSyntax {
    fn at_command(&self) -> Result<bool>;
    fn current(&self) -> Option<char>;
    fn advance(&mut self);
    fn at_end(&self) -> bool;
    fn offset(&self) -> usize;

    fn check_not_end(&self) -> Result<()> {
        if self.at_end() {
            Err(Error::Path("ran out of data".to_string()))
        } else {
            Ok(())
        }
    }

    fn unexpected(&self) -> Error {
        match self.current() {
            Some(ch) => Error::Path(format!(
                "unexpected character '{ch}' at offset {}",
                self.offset()
            )),
            None => Error::Path("ran out of data".to_string()),
        }
    }

    fn skip_whitespace(&mut self) {
        // SVG definition of whitespace is 0x20, 0x9, 0xA, 0xD. Rust's is_ascii_whitespace()
        // also includes 0xC, but is close enough and convenient.
        while self.current().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_whitespace();
        if self.current() == Some(',') {
            self.advance();
            self.skip_whitespace();
        }
    }

    /// Read a single-character arc flag.
    ///
    /// Per the grammar for `a`/`A`, flags need not be separated from
    /// whatever follows them, e.g. `a1 1 0 00.5.5`.
    fn read_flag(&mut self) -> Result<bool> {
        self.check_not_end()?;
        let res = match self.current() {
            Some('0') => false,
            Some(c) if c.is_ascii_digit() => true,
            _ => return Err(self.unexpected()),
        };
        self.advance();
        self.skip_wsp_comma();
        Ok(res)
    }

    fn read_number(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let mut mult = 1.;
        match self.current() {
            Some('-') => {
                mult = -1.;
                self.advance();
            }
            Some('+') => {
                self.advance();
            }
            _ => {}
        };
        Ok(mult * self.read_non_negative()?)
    }

    fn read_non_negative(&mut self) -> Result<f64> {
        self.check_not_end()?;
        let start = self.offset();
        let mut s = String::new();
        let mut dot_valid = true;
        let mut exp_valid = true;
        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    s.push(ch);
                    self.advance();
                }
                '.' if dot_valid => {
                    s.push(ch);
                    self.advance();
                    dot_valid = false;
                }
                'e' | 'E' if exp_valid && s.contains(|c: char| c.is_ascii_digit()) => {
                    s.push(ch);
                    self.advance();
                    // include sign character if present
                    if let Some(sign @ ('-' | '+')) = self.current() {
                        s.push(sign);
                        self.advance();
                    }
                    exp_valid = false;
                    dot_valid = false;
                }
                _ => break,
            }
        }
        if s.is_empty() {
            return Err(self.unexpected());
        }
        let value: f64 = s
            .parse()
            .map_err(|e| Error::Path(format!("invalid number '{s}' at offset {start}: {e}")))?;
        if !value.is_finite() {
            return Err(Error::Path(format!(
                "number '{s}' at offset {start} is out of range"
            )));
        }
        self.skip_wsp_comma();
        Ok(value)
    }

    fn read_command(&mut self) -> Result<char> {
        if self.at_command()? {
            let command = self.current().ok_or_else(|| self.unexpected())?;
            self.advance();
            self.skip_whitespace();
            Ok(command)
        } else {
            Err(self.unexpected())
        }
    }
}
