//! Parser for formatted attribute strings
//!
//! Grammar: whitespace-separated `name="value"` tokens. A value may contain
//! spaces but never a literal `"`. Repeated names within one string have
//! their values space-joined, so `class="a" class="b"` yields `class -> "a b"`.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Error, ErrorKind, Pos, Result};

/// Byte cursor with line/column tracking
#[derive(Clone, Debug)]
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else if !is_continuation(b) {
                self.col += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.current() {
            if b.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    const fn pos(&self) -> usize {
        self.pos
    }

    // Delimiters are ASCII, so `start..pos` always lands on char boundaries.
    fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}

const fn is_continuation(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}

const fn is_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && b != b'=' && b != b'"'
}

/// Parse a formatted attribute string into name -> joined value
pub fn parse_attribute_string(input: &str) -> Result<IndexMap<String, String>> {
    let mut cursor = Cursor::new(input);
    let mut attrs: IndexMap<String, String> = IndexMap::new();

    loop {
        cursor.skip_whitespace();
        if cursor.current().is_none() {
            break;
        }

        let (name, value) = parse_pair(&mut cursor).inspect_err(|err| {
            debug!(%err, input, "rejected attribute string");
        })?;

        match attrs.get_mut(name) {
            Some(existing) => {
                if !existing.is_empty() && !value.is_empty() {
                    existing.push(' ');
                }
                existing.push_str(value);
            }
            None => {
                attrs.insert(name.to_string(), value.to_string());
            }
        }
    }

    Ok(attrs)
}

fn parse_pair<'a>(cursor: &mut Cursor<'a>) -> Result<(&'a str, &'a str)> {
    let start = cursor.pos();
    while let Some(b) = cursor.current() {
        if is_name_byte(b) {
            cursor.advance();
        } else {
            break;
        }
    }
    let name = cursor.slice_from(start);
    if name.is_empty() {
        return Err(Error::at(ErrorKind::ExpectedName, cursor.position()));
    }

    cursor.skip_whitespace();
    if !cursor.consume(b'=') {
        return Err(Error::at(
            ErrorKind::ExpectedEquals {
                name: name.to_string(),
            },
            cursor.position(),
        ));
    }
    cursor.skip_whitespace();
    if !cursor.consume(b'"') {
        return Err(Error::at(
            ErrorKind::ExpectedQuote {
                name: name.to_string(),
            },
            cursor.position(),
        ));
    }

    let open = cursor.position();
    let value_start = cursor.pos();
    while let Some(b) = cursor.current() {
        if b == b'"' {
            let value = cursor.slice_from(value_start);
            cursor.advance();
            return Ok((name, value));
        }
        cursor.advance();
    }

    Err(Error::at(
        ErrorKind::UnterminatedValue {
            name: name.to_string(),
        },
        open,
    ))
}
