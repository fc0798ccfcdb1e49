//! Parsing integer lists from arguments, files, and stdin.

use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

/// Error raised while reading the input list.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A token was not a valid `i32`.
    #[error("invalid integer `{token}` at position {position}")]
    Parse {
        /// Offending token.
        token: String,
        /// One-based index of the token.
        position: usize,
    },

    /// The input source could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Parse whitespace- or comma-separated integers.
///
/// Empty text yields an empty list.
pub fn parse_numbers(text: &str) -> Result<Vec<i32>, InputError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i32>().map_err(|_| InputError::Parse {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

/// Parse integers given as separate command-line arguments.
pub fn parse_args(args: &[String]) -> Result<Vec<i32>, InputError> {
    parse_numbers(&args.join(" "))
}

/// Read and parse integers from a file.
pub fn read_file(path: &Path) -> Result<Vec<i32>, InputError> {
    debug!(path = %path.display(), "reading input file");
    let text = std::fs::read_to_string(path)?;
    parse_numbers(&text)
}

/// Read and parse integers from a reader such as stdin.
pub fn read_from(mut reader: impl Read) -> Result<Vec<i32>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_numbers(&text)
}
