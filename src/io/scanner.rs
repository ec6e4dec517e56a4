// src/io/scanner.rs

use std::any::type_name;
use std::io::BufRead;
use std::str::FromStr;
use crate::core::{KitError, Result};

/// Whitespace-separated token reader over any buffered source.
///
/// Tokens may span any number of lines; the reader pulls one line at a time.
pub struct Scanner<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Reads and parses the next token. Exhausted input is [`KitError::UnexpectedEof`].
    pub fn next<T: FromStr>(&mut self) -> Result<T> {
        self.next_opt()?.ok_or(KitError::UnexpectedEof)
    }

    /// Like [`Scanner::next`] but yields `Ok(None)` at a clean end of input.
    pub fn next_opt<T: FromStr>(&mut self) -> Result<Option<T>> {
        let token = match self.next_token()? {
            Some(token) => token,
            None => return Ok(None),
        };
        match token.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(KitError::Parse {
                token,
                target: type_name::<T>(),
            }),
        }
    }

    pub fn next_vec<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>> {
        (0..n).map(|_| self.next()).collect()
    }

    pub fn next_pair<A: FromStr, B: FromStr>(&mut self) -> Result<(A, B)> {
        let a = self.next()?;
        let b = self.next()?;
        Ok((a, b))
    }

    /// Rest of the current line if it still holds tokens, otherwise the next line.
    /// The line terminator is stripped.
    pub fn next_line(&mut self) -> Result<String> {
        let rest = &self.line[self.pos..];
        if !rest.trim().is_empty() {
            let line = rest.trim_start().trim_end_matches(['\r', '\n']).to_string();
            self.pos = self.line.len();
            return Ok(line);
        }
        if !self.fill_line()? {
            return Err(KitError::UnexpectedEof);
        }
        let line = self.line.trim_end_matches(['\r', '\n']).to_string();
        self.pos = self.line.len();
        Ok(line)
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let start = rest.len() - rest.trim_start().len();
            let rest = &rest[start..];
            if !rest.is_empty() {
                let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                let token = rest[..len].to_string();
                self.pos += start + len;
                return Ok(Some(token));
            }
            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    // false at end of input
    fn fill_line(&mut self) -> Result<bool> {
        self.line.clear();
        self.pos = 0;
        let read = self.reader.read_line(&mut self.line)?;
        Ok(read > 0)
    }
}
