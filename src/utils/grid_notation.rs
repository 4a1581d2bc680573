//! Grid-coordinate notation helpers.
//!
//! Converts between cell indices and `a1`..`c3` coordinates, with columns
//! `a`-`c` left to right and rows `1`-`3` top to bottom (`a1` is cell 0).

use std::error::Error;
use std::fmt;

use crate::game_state::oxo_rules::CELL_COUNT;
use crate::game_state::oxo_types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    MalformedCoordinate(String),
    OutOfBounds(Cell),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::MalformedCoordinate(text) => {
                write!(f, "malformed cell coordinate '{text}'")
            }
            NotationError::OutOfBounds(cell) => write!(f, "cell index {cell} is out of bounds"),
        }
    }
}

impl Error for NotationError {}

/// Parse a coordinate like `b2` into a cell index.
pub fn parse_cell(text: &str) -> Result<Cell, NotationError> {
    let lower = text.trim().to_ascii_lowercase();
    let mut chars = lower.chars();

    let (col, row) = match (chars.next(), chars.next(), chars.next()) {
        (Some(col @ 'a'..='c'), Some(row @ '1'..='3'), None) => {
            (col as u8 - b'a', row as u8 - b'1')
        }
        _ => return Err(NotationError::MalformedCoordinate(text.to_owned())),
    };

    Ok(row * 3 + col)
}

/// Format a cell index as a coordinate like `b2`.
pub fn format_cell(cell: Cell) -> Result<String, NotationError> {
    if cell >= CELL_COUNT {
        return Err(NotationError::OutOfBounds(cell));
    }
    let col = char::from(b'a' + cell % 3);
    let row = char::from(b'1' + cell / 3);
    Ok(format!("{col}{row}"))
}
