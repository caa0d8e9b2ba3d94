use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Direction the tiles slide towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Moves along columns, so the grid is transposed before compressing.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Moves towards the high end of a lane, so lanes are reversed before compressing.
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(key) = s.parse::<char>() {
            return key.try_into();
        }

        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::InvalidDirection)
    }
}

impl TryFrom<char> for Direction {
    type Error = GameError;

    /// Accepts WASD keys, plus `u`, `l` and `r` (`d` is taken by WASD).
    fn try_from(key: char) -> Result<Self> {
        use Direction::*;

        match key.to_ascii_lowercase() {
            'w' | 'u' => Ok(Up),
            's' => Ok(Down),
            'a' | 'l' => Ok(Left),
            'd' | 'r' => Ok(Right),
            _ => Err(GameError::InvalidDirection),
        }
    }
}
