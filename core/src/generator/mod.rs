use crate::*;
pub use random::*;

mod random;

/// Source of the randomness used when a tile spawns.
///
/// Kept separate from the engine so that tests and replays can drive spawns
/// deterministically.
pub trait TileSpawner {
    /// Picks an index in `0..empty_cells`, counting empty cells in row-major order.
    fn pick_cell(&mut self, empty_cells: CellCount) -> CellCount;

    /// Picks the value of the new tile.
    fn pick_value(&mut self) -> TileValue;
}

#[cfg(test)]
pub(crate) use scripted::ScriptedSpawner;

#[cfg(test)]
mod scripted {
    use alloc::collections::VecDeque;

    use super::*;

    /// Replays fixed `(cell index, value)` picks, then falls back to the first cell with a 2.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct ScriptedSpawner {
        picks: VecDeque<(CellCount, TileValue)>,
    }

    impl ScriptedSpawner {
        pub(crate) fn new(picks: &[(CellCount, TileValue)]) -> Self {
            Self {
                picks: picks.iter().copied().collect(),
            }
        }
    }

    impl TileSpawner for ScriptedSpawner {
        fn pick_cell(&mut self, empty_cells: CellCount) -> CellCount {
            let index = self.picks.front().map_or(0, |&(index, _)| index);
            index.min(empty_cells - 1)
        }

        fn pick_value(&mut self) -> TileValue {
            self.picks.pop_front().map_or(COMMON_SPAWN, |(_, value)| value)
        }
    }
}
