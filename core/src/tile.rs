use crate::TileValue;

/// Value of an empty cell.
pub const EMPTY_TILE: TileValue = 0;

/// Value of the usual freshly spawned tile.
pub const COMMON_SPAWN: TileValue = 2;

/// Value of the less frequent spawned tile.
pub const RARE_SPAWN: TileValue = 4;

/// Chance that a spawned tile is [`RARE_SPAWN`] instead of [`COMMON_SPAWN`].
pub const RARE_SPAWN_PROBABILITY: f64 = 0.1;

/// Largest tile a board can hold. It no longer merges, since its double does not fit.
pub const MAX_TILE: TileValue = 1 << (TileValue::BITS - 1);

/// Whether `value` may appear on a board: empty, or `2^k` with `k >= 1` up to [`MAX_TILE`].
pub const fn is_valid_tile(value: TileValue) -> bool {
    value == EMPTY_TILE || (value >= 2 && value.is_power_of_two())
}

/// The tile produced by merging `a` with `b`, if they merge at all.
pub const fn merged_value(a: TileValue, b: TileValue) -> Option<TileValue> {
    if a == EMPTY_TILE || a != b {
        return None;
    }
    a.checked_mul(2)
}
