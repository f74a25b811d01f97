/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Line and token oriented reading of whitespace separated text files.
//!
//! All benchmark formats handled by this crate are plain text files with
//! whitespace separated numbers. The [`LineReader`] keeps track of the line
//! number so that errors can point to the offending record.

use crate::error::{Error, Format, Result};

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::str::{FromStr, SplitWhitespace};

use tracing::trace;

/// A reader returning the non-empty lines of a stream as [`Tokens`].
pub struct LineReader<R: Read> {
    io: BufReader<R>,
    format: Format,
    comment: Option<char>,

    line: String,
    line_number: usize,
}

impl<R: Read> LineReader<R> {
    /// Create a reader for a file of the given format.
    pub fn new(reader: R, format: Format) -> Self {
        LineReader {
            io: BufReader::new(reader),
            format,
            comment: None,
            line: String::new(),
            line_number: 0,
        }
    }

    /// Create a reader that skips all lines starting with `comment`.
    pub fn with_comments(reader: R, format: Format, comment: char) -> Self {
        LineReader {
            comment: Some(comment),
            ..LineReader::new(reader, format)
        }
    }

    /// The format this reader reads.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The number of the last line that has been read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Create a format error pointing to the current line.
    pub fn error(&self, msg: String) -> Error {
        Error::Format {
            format: self.format,
            line: self.line_number,
            msg,
        }
    }

    /// Read the next non-empty, non-comment line.
    ///
    /// Returns `Ok(None)` at the end of the stream.
    pub fn read_line(&mut self) -> Result<Option<Tokens<'_>>> {
        let line = &mut self.line;
        loop {
            line.clear();
            if self.io.read_line(line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let start = line.len() - line.trim_start().len();
            if start == line.len() {
                continue;
            }
            if let Some(c) = self.comment {
                if line[start..].starts_with(c) {
                    continue;
                }
            }
            return Ok(Some(Tokens {
                it: line[start..].split_whitespace(),
                line: self.line_number,
                format: self.format,
            }));
        }
    }

    /// Read the next non-empty line, failing at the end of the stream.
    ///
    /// The parameter `what` describes the expected record in the error message.
    pub fn expect_line(&mut self, what: &str) -> Result<Tokens<'_>> {
        let line_number = self.line_number;
        let format = self.format;
        self.read_line()?.ok_or_else(|| Error::Format {
            format,
            line: line_number,
            msg: format!("unexpected end of file, expected {}", what),
        })
    }

    /// Skip the next physical line regardless of its content.
    pub fn skip_line(&mut self) -> Result<()> {
        self.line.clear();
        if self.io.read_line(&mut self.line)? == 0 {
            return Err(self.error("unexpected end of file, expected header line".to_string()));
        }
        self.line_number += 1;
        Ok(())
    }

    /// Read exactly `count` numbers that may be spread over several lines.
    pub fn read_numbers<T>(&mut self, count: usize, what: &str) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut nums = Vec::with_capacity(count);
        while nums.len() < count {
            let mut toks = self.expect_line(what)?;
            while nums.len() < count {
                match toks.next() {
                    Some(tok) => nums.push(toks.parse(tok)?),
                    None => break,
                }
            }
            toks.end()?;
        }
        Ok(nums)
    }

    /// Read a row of `width` numbers that may be wrapped over several lines.
    ///
    /// The row starts on the next non-empty line. As long as fewer than
    /// `width` values have been read the row is continued on the next line,
    /// but at most `budget` times. If the row is still incomplete after that
    /// (or the stream ends) a [`Error::Truncated`] error is returned. A row
    /// with more than `width` values is a format error.
    pub fn read_row<T>(&mut self, width: usize, budget: usize) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut row: Vec<T> = Vec::with_capacity(width);
        let mut continuations = 0;
        loop {
            let more = match self.read_line()? {
                Some(mut toks) => {
                    toks.append_numbers(&mut row)?;
                    true
                }
                None => false,
            };

            if !more {
                return Err(Error::Truncated {
                    format: self.format,
                    line: self.line_number,
                    expected: width,
                    found: row.len(),
                });
            }
            if row.len() >= width {
                break;
            }
            if continuations == budget {
                return Err(Error::Truncated {
                    format: self.format,
                    line: self.line_number,
                    expected: width,
                    found: row.len(),
                });
            }
            continuations += 1;
            trace!(line = self.line_number, found = row.len(), width, "row continues on next line");
        }

        if row.len() > width {
            return Err(self.error(format!("row has {} values, expected {}", row.len(), width)));
        }

        Ok(row)
    }
}

/// Iterates over the tokens in a line.
pub struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    pub line: usize,
    format: Format,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.it.next()
    }
}

impl<'a> Tokens<'a> {
    /// Create a format error pointing to this line.
    pub fn error(&self, msg: String) -> Error {
        Error::Format {
            format: self.format,
            line: self.line,
            msg,
        }
    }

    fn parse<T>(&self, tok: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        tok.parse()
            .map_err(|e| self.error(format!("invalid number '{}': {}", tok, e)))
    }

    /// Return an error if the next token is not the given token.
    pub fn expect(&mut self, tok: &str) -> Result<()> {
        let nxt = self.str()?;
        if nxt == tok {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}', got '{}'", tok, nxt)))
        }
    }

    /// Returns the next token as `&str`.
    pub fn str(&mut self) -> Result<&'a str> {
        let line = self.line;
        let format = self.format;
        self.it.next().ok_or_else(|| Error::Format {
            format,
            line,
            msg: "expected token".to_string(),
        })
    }

    /// Returns the next token converted to a number.
    pub fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.it.next() {
            Some(tok) => self.parse(tok),
            None => Err(self.error("expected number".to_string())),
        }
    }

    /// Returns the next token as a 1-based node number converted to a 0-based index.
    ///
    /// The node number must be in `1..=n`.
    pub fn node(&mut self, n: usize) -> Result<usize> {
        let u: usize = self.number()?;
        if u < 1 || u > n {
            return Err(self.error(format!("invalid node id {} (must be in 1..{})", u, n)));
        }
        Ok(u - 1)
    }

    /// Skips `n` tokens whose values are ignored.
    pub fn skip_tokens(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.str()?;
        }
        Ok(())
    }

    /// Converts all remaining tokens to numbers and appends them to `nums`.
    pub fn append_numbers<T>(&mut self, nums: &mut Vec<T>) -> Result<()>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        while let Some(tok) = self.it.next() {
            nums.push(self.parse(tok)?);
        }
        Ok(())
    }

    /// Ensures that there is no next token.
    pub fn end(&mut self) -> Result<()> {
        if let Some(s) = self.it.next() {
            Err(self.error(format!("unexpected token at end of line: {}", s)))
        } else {
            Ok(())
        }
    }
}
