use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::engine::{Board, Row, Score, MAX_EXPONENT};

/// Transport form of a board: `rows[y][x]` exponents (0 = empty) and score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializedBoard {
    pub rows: Vec<Vec<u32>>,
    /// Absent in the input means 0.
    #[serde(default)]
    pub score: Score,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedBoardError {
    #[error("board has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("board is {rows}x{cols}, expected a square grid")]
    NotSquare { rows: usize, cols: usize },
    #[error("cell ({x}, {y}) holds exponent {value}, maximum is {max}", max = MAX_EXPONENT)]
    ValueTooLarge { x: usize, y: usize, value: u32 },
    #[error("engine config rejected for this board: {0}")]
    InvalidConfig(String),
}

#[derive(thiserror::Error, Debug)]
pub enum SerializationError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed board: {0}")]
    Malformed(#[from] MalformedBoardError),
}

impl SerializedBoard {
    /// Check that rows form a non-empty square grid of representable exponents.
    pub fn validate(&self) -> Result<(), MalformedBoardError> {
        let cols = self.rows.first().map_or(0, Vec::len);
        if self.rows.is_empty() || cols == 0 {
            return Err(MalformedBoardError::Empty);
        }
        for (y, row) in self.rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MalformedBoardError::Ragged {
                    row: y,
                    expected: cols,
                    found: row.len(),
                });
            }
            if let Some(x) = row.iter().position(|&v| v > MAX_EXPONENT) {
                return Err(MalformedBoardError::ValueTooLarge { x, y, value: row[x] });
            }
        }
        if self.rows.len() != cols {
            return Err(MalformedBoardError::NotSquare { rows: self.rows.len(), cols });
        }
        Ok(())
    }
}

impl Board {
    /// Snapshot this board into its transport form.
    pub fn serialize(&self) -> SerializedBoard {
        SerializedBoard { rows: self.cells(), score: self.score() }
    }

    /// Rebuild a board with the default configuration.
    ///
    /// ```
    /// use lib2048::engine::Board;
    /// use lib2048::serialization::SerializedBoard;
    ///
    /// let ser = SerializedBoard { rows: vec![vec![1, 0], vec![0, 2]], score: 4 };
    /// let b = Board::deserialize(&ser).unwrap();
    /// assert_eq!(b.serialize(), ser);
    /// ```
    pub fn deserialize(ser: &SerializedBoard) -> Result<Board, MalformedBoardError> {
        Self::deserialize_with(ser, &EngineConfig::default())
    }

    /// Rebuild a board, taking `win_value` and `initial_populate_count` from
    /// `cfg`. The grid size always comes from `ser`, so only `win_value` is
    /// checked here; extra starting tiles that do not fit are simply skipped
    /// by `reset`.
    pub fn deserialize_with(
        ser: &SerializedBoard,
        cfg: &EngineConfig,
    ) -> Result<Board, MalformedBoardError> {
        ser.validate()?;
        cfg.validate_win_value().map_err(|e| MalformedBoardError::InvalidConfig(e.to_string()))?;
        let rows = ser.rows.iter().map(|r| Row::from_values(r)).collect();
        Ok(Board::from_rows(rows, ser.score, cfg))
    }
}

impl From<&Board> for SerializedBoard {
    fn from(b: &Board) -> Self {
        b.serialize()
    }
}

impl TryFrom<&SerializedBoard> for Board {
    type Error = MalformedBoardError;

    fn try_from(ser: &SerializedBoard) -> Result<Self, Self::Error> {
        Board::deserialize(ser)
    }
}

/// Encode a serialized board as JSON text.
pub fn to_json(ser: &SerializedBoard) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(ser)?)
}

/// Decode and validate a board from JSON text.
pub fn from_json(s: &str) -> Result<Board, SerializationError> {
    let ser: SerializedBoard = serde_json::from_str(s)?;
    Ok(Board::deserialize(&ser)?)
}
