use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::{Array2, ArrayView2, ArrayViewMut2, Axis};
use serde::{Deserialize, Serialize};

use crate::*;

/// Slides the non-empty tiles of `line` to the front, merging equal neighbours once, and pads
/// the rest with empty cells.
///
/// Returns the score gained, the sum of every merged tile.
pub fn compress_left(line: &mut [TileValue]) -> Score {
    let tiles: Vec<TileValue> = line.iter().copied().filter(|&v| v != EMPTY_TILE).collect();
    let mut gained: Score = 0;
    let mut read = 0;
    let mut write = 0;

    while read < tiles.len() {
        let value = tiles[read];
        let merged = tiles
            .get(read + 1)
            .and_then(|&next| merged_value(value, next));
        if let Some(merged) = merged {
            line[write] = merged;
            gained += Score::from(merged);
            // both operands are consumed, the merged tile is never looked at again
            read += 2;
        } else {
            line[write] = value;
            read += 1;
        }
        write += 1;
    }
    line[write..].fill(EMPTY_TILE);

    gained
}

/// Square grid of tiles, indexed by `(row, col)`.
///
/// Serialized as a list of rows; deserializing goes through [`Board::from_rows`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<TileValue>>", into = "Vec<Vec<TileValue>>")]
pub struct Board {
    cells: Array2<TileValue>,
}

impl Board {
    /// An all-empty `size` x `size` board.
    pub fn new(size: Coord) -> Self {
        let size = usize::from(size);
        Self {
            cells: Array2::zeros((size, size)),
        }
    }

    /// Builds a board from explicit rows, validating shape and tile values.
    pub fn from_rows<R: AsRef<[TileValue]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 || size > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut values = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::InvalidBoardShape);
            }
            if let Some(&value) = row.iter().find(|&&value| !is_valid_tile(value)) {
                return Err(GameError::InvalidTile(value));
            }
            values.extend_from_slice(row);
        }

        let cells =
            Array2::from_shape_vec((size, size), values).map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        let size = self.size();
        mult(size, size)
    }

    pub fn get(&self, coords: Coord2) -> Option<TileValue> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Read-only view of the whole grid.
    pub fn cells(&self) -> ArrayView2<'_, TileValue> {
        self.cells.view()
    }

    pub fn to_rows(&self) -> Vec<Vec<TileValue>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn empty_count(&self) -> CellCount {
        self.cells.iter().filter(|&&value| value == EMPTY_TILE).count() as CellCount
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != EMPTY_TILE)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == EMPTY_TILE)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn highest_tile(&self) -> TileValue {
        self.cells.iter().copied().max().unwrap_or(EMPTY_TILE)
    }

    /// Sum of all tiles, unchanged by any move.
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// True when the board is full and no two orthogonal neighbours can merge, so no move can
    /// change it.
    pub fn is_terminal(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        let horizontal = self
            .cells
            .windows((1, 2))
            .into_iter()
            .any(|pair| merged_value(pair[[0, 0]], pair[[0, 1]]).is_some());
        let vertical = self
            .cells
            .windows((2, 1))
            .into_iter()
            .any(|pair| merged_value(pair[[0, 0]], pair[[1, 0]]).is_some());

        !(horizontal || vertical)
    }

    /// The board after sliding towards `direction`, with the score that move gains.
    pub fn shift(&self, direction: Direction) -> (Self, Score) {
        let mut shifted = self.clone();
        let gained = shifted.shift_in_place(direction);
        (shifted, gained)
    }

    pub(crate) fn shift_in_place(&mut self, direction: Direction) -> Score {
        let mut gained: Score = 0;
        let mut line = Vec::with_capacity(self.cells.ncols());
        let mut oriented = self.oriented_mut(direction);

        for mut lane in oriented.axis_iter_mut(Axis(0)) {
            line.clear();
            line.extend(lane.iter().copied());
            gained += compress_left(&mut line);
            for (cell, &value) in lane.iter_mut().zip(&line) {
                *cell = value;
            }
        }

        gained
    }

    pub(crate) fn place(&mut self, coords: Coord2, value: TileValue) {
        self.cells[coords.to_nd_index()] = value;
    }

    /// View whose rows compress to the left for `direction`.
    ///
    /// Vertical moves transpose and moves towards the far edge reverse each lane. Writes go
    /// straight through to the original axes.
    fn oriented_mut(&mut self, direction: Direction) -> ArrayViewMut2<'_, TileValue> {
        let mut view = self.cells.view_mut();
        if direction.is_vertical() {
            view.swap_axes(0, 1);
        }
        if direction.is_reversed() {
            view.invert_axis(Axis(1));
        }
        view
    }
}

impl TryFrom<Vec<Vec<TileValue>>> for Board {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<TileValue>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<TileValue>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl Index<Coord2> for Board {
    type Output = TileValue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .highest_tile()
            .checked_ilog10()
            .map_or(1, |digits| digits as usize + 1);

        for row in self.cells.rows() {
            for (col, &value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if value == EMPTY_TILE {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
