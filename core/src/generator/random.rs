use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Spawn policy of the classic game: a uniformly chosen empty cell, holding a 2 most of the time
/// and a 4 otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomTileSpawner<R = SmallRng> {
    rng: R,
}

impl RandomTileSpawner {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomTileSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileSpawner for RandomTileSpawner<R> {
    fn pick_cell(&mut self, empty_cells: CellCount) -> CellCount {
        self.rng.random_range(0..empty_cells)
    }

    fn pick_value(&mut self) -> TileValue {
        if self.rng.random_bool(RARE_SPAWN_PROBABILITY) {
            RARE_SPAWN
        } else {
            COMMON_SPAWN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_picks() {
        let mut a = RandomTileSpawner::from_seed(7);
        let mut b = RandomTileSpawner::from_seed(7);

        for _ in 0..100 {
            assert_eq!(a.pick_cell(16), b.pick_cell(16));
            assert_eq!(a.pick_value(), b.pick_value());
        }
    }

    #[test]
    fn picked_cell_is_in_range() {
        let mut spawner = RandomTileSpawner::from_seed(1);

        for empty_cells in 1..=16 {
            for _ in 0..50 {
                assert!(spawner.pick_cell(empty_cells) < empty_cells);
            }
        }
    }

    #[test]
    fn one_empty_cell_is_always_picked() {
        let mut spawner = RandomTileSpawner::from_seed(99);

        for _ in 0..100 {
            assert_eq!(spawner.pick_cell(1), 0);
        }
    }

    #[test]
    fn values_are_mostly_twos() {
        let mut spawner = RandomTileSpawner::from_seed(2048);
        let mut fours = 0;

        for _ in 0..10_000 {
            match spawner.pick_value() {
                RARE_SPAWN => fours += 1,
                COMMON_SPAWN => {}
                other => panic!("unexpected spawn value {other}"),
            }
        }

        assert!((800..1200).contains(&fours), "got {fours} fours");
    }

    #[test]
    fn cells_are_picked_uniformly() {
        let mut spawner = RandomTileSpawner::from_seed(3);
        let mut hits = [0u32; 4];

        for _ in 0..4_000 {
            hits[usize::from(spawner.pick_cell(4))] += 1;
        }

        for count in hits {
            assert!((800..1200).contains(&count), "got {hits:?}");
        }
    }
}
