use std::num::NonZeroU8;
use std::path::Path;
use std::{fs, io};

use thiserror::Error;

use crate::board::{Board, HEIGHT, NUM_CELLS, WIDTH};

/// Errors raised at the puzzle-loading boundary. The search core never sees
/// malformed input; everything is rejected here.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] io::Error),

    #[error("expected 9 puzzle lines, found {found}")]
    WrongLineCount { found: usize },

    #[error("line {line}: expected 9 characters, found {found}")]
    WrongLineLength { line: usize, found: usize },

    #[error("line {line}, column {column}: invalid character {found:?}, expected '1'-'9' or '.'")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },
}

/// Reads and parses a puzzle file: exactly 9 lines of exactly 9 characters,
/// each a digit '1'-'9' or '.' for an empty cell.
pub fn load_board(path: &Path) -> Result<Board, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_board(&text)
}

/// Parses puzzle text in the strict file format. The returned board has no
/// candidates computed yet, see [Board::initialize_candidates].
pub fn parse_board(text: &str) -> Result<Board, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != HEIGHT {
        return Err(LoadError::WrongLineCount { found: lines.len() });
    }

    let mut values = [None; NUM_CELLS];
    for (y, line) in lines.iter().enumerate() {
        let length = line.chars().count();
        if length != WIDTH {
            return Err(LoadError::WrongLineLength {
                line: y + 1,
                found: length,
            });
        }
        for (x, character) in line.chars().enumerate() {
            match character {
                '.' => {}
                '1'..='9' => {
                    values[Board::index(x, y)] = NonZeroU8::new(character as u8 - b'0');
                }
                other => {
                    return Err(LoadError::InvalidCharacter {
                        line: y + 1,
                        column: x + 1,
                        found: other,
                    });
                }
            }
        }
    }

    let board = Board::from_values(values);
    log::debug!("parsed puzzle with {} givens", NUM_CELLS - board.num_empty());
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
274685319
183749265
965123874
618534792
492817653
357962481
839256147
541378926
7264915.8";

    #[test]
    fn parses_values_and_blanks() {
        let board = parse_board(VALID).unwrap();
        assert_eq!(NonZeroU8::new(2), board.value(0, 0));
        assert_eq!(NonZeroU8::new(9), board.value(8, 0));
        assert_eq!(None, board.value(7, 8));
        assert_eq!(1, board.num_empty());
    }

    #[test]
    fn accepts_a_trailing_newline() {
        let text = format!("{VALID}\n");
        assert!(parse_board(&text).is_ok());
    }

    #[test]
    fn rejects_wrong_line_count() {
        let truncated: String = VALID.lines().take(8).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            parse_board(&truncated),
            Err(LoadError::WrongLineCount { found: 8 })
        ));

        let extended = format!("{VALID}\n.........");
        assert!(matches!(
            parse_board(&extended),
            Err(LoadError::WrongLineCount { found: 10 })
        ));
    }

    #[test]
    fn rejects_wrong_line_length() {
        let text = VALID.replacen("183749265", "18374926", 1);
        assert!(matches!(
            parse_board(&text),
            Err(LoadError::WrongLineLength { line: 2, found: 8 })
        ));
    }

    #[test]
    fn rejects_invalid_characters() {
        let text = VALID.replacen('4', "0", 1);
        assert!(matches!(
            parse_board(&text),
            Err(LoadError::InvalidCharacter {
                line: 1,
                column: 3,
                found: '0'
            })
        ));

        let text = VALID.replacen('.', "_", 1);
        assert!(matches!(
            parse_board(&text),
            Err(LoadError::InvalidCharacter { line: 9, .. })
        ));
    }

    #[test]
    fn missing_file_propagates_the_io_error() {
        let result = load_board(Path::new("does/not/exist.sudoku"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
