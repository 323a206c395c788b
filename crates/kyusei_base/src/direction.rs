//! The eight compass directions of the star boards.
//!
//! Index order is the board order used by every 8-position layout:
//! 0 = North, then clockwise to 7 = North-West. The centre palace has no
//! index and is represented by `Option::None` wherever a direction may be
//! absent.

use serde::Serialize;

/// One of the eight board directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// All 8 directions in board order (index 0 = North).
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

/// Name of the centre palace, which has no board index.
pub const CENTER_NAME: &str = "中央";

/// Heavenly-path (天道) direction for each Qi-month index.
pub const TENDO: [Direction; 12] = [
    Direction::South,
    Direction::SouthWest,
    Direction::North,
    Direction::West,
    Direction::NorthWest,
    Direction::East,
    Direction::North,
    Direction::NorthEast,
    Direction::South,
    Direction::East,
    Direction::SouthEast,
    Direction::West,
];

impl Direction {
    /// 0-based board index (North=0 .. North-West=7).
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
        }
    }

    /// Direction at a board index, wrapping modulo 8.
    pub const fn from_index(index: usize) -> Self {
        ALL_DIRECTIONS[index % 8]
    }

    /// The diametrically opposite direction.
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// Board-style name (北, 東北, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "北",
            Self::NorthEast => "東北",
            Self::East => "東",
            Self::SouthEast => "東南",
            Self::South => "南",
            Self::SouthWest => "西南",
            Self::West => "西",
            Self::NorthWest => "西北",
        }
    }

    /// Compass-style name (北, 北東, ...), as used by the quick check.
    pub const fn compass_name(self) -> &'static str {
        match self {
            Self::North => "北",
            Self::NorthEast => "北東",
            Self::East => "東",
            Self::SouthEast => "南東",
            Self::South => "南",
            Self::SouthWest => "南西",
            Self::West => "西",
            Self::NorthWest => "北西",
        }
    }
}

/// Heavenly-path direction for a Qi-month index (wrapping modulo 12).
pub const fn tendo(month_index: usize) -> Direction {
    TENDO[month_index % 12]
}
