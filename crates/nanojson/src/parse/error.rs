//! Syntax errors reported by the parser.

use thiserror::Error;

/// What went wrong while reading JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    #[error("invalid number")]
    InvalidNumber,
    #[error("number out of range")]
    NumberOutOfRange,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("invalid unicode escape")]
    InvalidUnicode,
    #[error("control character in string")]
    ControlCharacter,
    #[error("trailing characters after value")]
    TrailingCharacters,
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimit(usize),
    #[error("invalid UTF-8")]
    InvalidUtf8,
}

/// A syntax error with its location in the input.
///
/// `offset` is a byte offset; `line` and `column` are 1-based, with the column
/// counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
    line: usize,
    column: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let before = &input[..offset];
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1);
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        // Count UTF-8 lead bytes so multi-byte characters occupy one column.
        let column = before[line_start..]
            .iter()
            .filter(|&&b| (b & 0b1100_0000) != 0b1000_0000)
            .count()
            + 1;
        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}
