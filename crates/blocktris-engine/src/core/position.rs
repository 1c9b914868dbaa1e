use serde::{Deserialize, Serialize};

/// A `(row, column)` pair.
///
/// Depending on context this is either an absolute grid cell or an offset
/// relative to a block's origin. Rows grow downward and columns grow to the
/// right; both are signed because a block's origin may sit above the grid
/// (the I-block spawns at row -1).
///
/// # Example
///
/// ```
/// use blocktris_engine::Position;
///
/// let origin = Position::new(0, 3);
/// let tile = Position::new(1, 2);
/// assert_eq!(origin + tile, Position::new(1, 5));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Add,
)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns this position shifted by the given deltas.
    #[must_use]
    pub const fn offset_by(self, rows: i32, columns: i32) -> Self {
        Self::new(self.row + rows, self.column + columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_componentwise() {
        let sum = Position::new(-1, 3) + Position::new(1, 2);
        assert_eq!(sum, Position::new(0, 5));
    }

    #[test]
    fn test_offset_by() {
        let pos = Position::new(4, 4).offset_by(-2, 3);
        assert_eq!(pos, Position::new(2, 7));
    }

    #[test]
    fn test_serialization_format() {
        let pos = Position::new(-1, 3);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"row":-1,"column":3}"#);

        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
