use std::{fs, path::Path};

use crate::error::Error;

/// Characters that always form a word of their own, even without surrounding
/// whitespace.
const DELIMITERS: [char; 8] = ['(', ')', '+', '-', '*', '/', '%', '^'];

/// A non-blank line of a program together with its position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// The 1-based line number in the original text.
    pub number: usize,
    /// The line with trailing whitespace removed.
    pub text:   String,
}

/// Reads a program file and returns its non-blank lines.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read.
pub fn read_program<P: AsRef<Path>>(path: P) -> Result<Vec<SourceLine>, Error> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(),
                                                                       source })?;
    Ok(program_lines(&source))
}

/// Splits program text into lines, dropping blank and whitespace-only lines
/// and trimming trailing whitespace from the rest.
///
/// # Example
/// ```
/// use catlang::source::program_lines;
///
/// let lines = program_lines("x = 1   \r\n\n   \ny = x\n");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text, "x = 1");
/// assert_eq!(lines[1].number, 4);
/// ```
#[must_use]
pub fn program_lines(source: &str) -> Vec<SourceLine> {
    source.lines()
          .enumerate()
          .filter_map(|(i, raw)| {
              let text = raw.trim_end();
              (!text.is_empty()).then(|| SourceLine { number: i + 1,
                                                      text:   text.to_string(), })
          })
          .collect()
}

/// Splits an expression into words.
///
/// Words are separated by whitespace, and each parenthesis or operator symbol
/// is a word by itself. No returned word is empty.
///
/// # Example
/// ```
/// use catlang::source::split_words;
///
/// assert_eq!(split_words("(2 + 3) * 4"), ["(", "2", "+", "3", ")", "*", "4"]);
/// assert_eq!(split_words("rate^2"), ["rate", "^", "2"]);
/// assert!(split_words("   ").is_empty());
/// ```
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for chunk in text.split_whitespace() {
        let mut start = 0;
        for (i, c) in chunk.char_indices() {
            if DELIMITERS.contains(&c) {
                if start < i {
                    words.push(&chunk[start..i]);
                }
                let end = i + c.len_utf8();
                words.push(&chunk[i..end]);
                start = end;
            }
        }
        if start < chunk.len() {
            words.push(&chunk[start..]);
        }
    }

    words
}
