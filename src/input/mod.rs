//! Input sources: where the integers come from.
//!
//! The core logic only sees the [`IntSource`] trait, so it can be driven by
//! stdin, a file, or an in-memory sequence in tests.

pub mod reader;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use reader::TokenReader;

/// Errors while pulling an integer from a source.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input ended before integer #{position} could be read")]
    Exhausted { position: usize },

    /// `source` is `None` when the token is not valid UTF-8.
    #[error("integer #{position} is malformed: {token:?}")]
    Malformed {
        position: usize,
        token: String,
        source: Option<ParseIntError>,
    },

    #[error("failed to open input file {path}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

/// A sequential supplier of integers.
pub trait IntSource {
    /// Take the next integer, in order.
    fn next_int(&mut self) -> Result<i64, InputError>;

    /// How many integers have been taken so far.
    fn consumed(&self) -> usize;
}

/// [`IntSource`] over an in-memory sequence.
#[derive(Debug)]
pub struct IterSource<I> {
    values: I,
    consumed: usize,
}

impl<I: Iterator<Item = i64>> IterSource<I> {
    pub fn new(values: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            values: values.into_iter(),
            consumed: 0,
        }
    }
}

impl<I: Iterator<Item = i64>> IntSource for IterSource<I> {
    fn next_int(&mut self) -> Result<i64, InputError> {
        let value = self.values.next().ok_or(InputError::Exhausted {
            position: self.consumed + 1,
        })?;
        self.consumed += 1;
        Ok(value)
    }

    fn consumed(&self) -> usize {
        self.consumed
    }
}

/// Open the input named on the command line.
///
/// `None` or `-` means stdin.
pub fn open(path: Option<&Path>) -> Result<TokenReader<Box<dyn BufRead>>, InputError> {
    let reader: Box<dyn BufRead> = match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).map_err(|source| InputError::Open {
                path: p.to_path_buf(),
                source,
            })?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    };
    Ok(TokenReader::new(reader))
}
