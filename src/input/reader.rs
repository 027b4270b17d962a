//! Whitespace-delimited integer tokenizer over any `BufRead`.

use std::collections::VecDeque;
use std::io::BufRead;

use super::{InputError, IntSource};

/// Reads integers lazily, one line at a time.
///
/// A line is only pulled from the underlying reader when every token from
/// the previous line has been used. Lines are split as raw bytes and only the
/// token being consumed is decoded, so trailing data after the last needed
/// integer is never parsed, whatever its encoding.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    consumed: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            consumed: 0,
        }
    }

    /// Next raw token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Vec<u8>>, InputError> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|t| !t.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
        Ok(self.pending.pop_front())
    }
}

impl<R: BufRead> IntSource for TokenReader<R> {
    fn next_int(&mut self) -> Result<i64, InputError> {
        let position = self.consumed + 1;
        let raw = self
            .next_token()?
            .ok_or(InputError::Exhausted { position })?;

        let token = match String::from_utf8(raw) {
            Ok(token) => token,
            Err(e) => {
                return Err(InputError::Malformed {
                    position,
                    token: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                    source: None,
                });
            }
        };
        tracing::trace!(position, token = %token, "read token");

        let value = token
            .parse::<i64>()
            .map_err(|e| InputError::Malformed {
                position,
                token,
                source: Some(e),
            })?;
        self.consumed = position;
        Ok(value)
    }

    fn consumed(&self) -> usize {
        self.consumed
    }
}
