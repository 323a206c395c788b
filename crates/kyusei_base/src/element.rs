//! Five elements (五行) and their production cycle.
//!
//! Only the production (相生) relation is needed: wood feeds fire, fire
//! feeds earth, earth feeds metal, metal feeds water, water feeds wood.

use serde::Serialize;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gogyou {
    Moku,
    Ka,
    Do,
    Kin,
    Sui,
}

/// All 5 elements in production order (wood first).
pub const ALL_GOGYOU: [Gogyou; 5] = [
    Gogyou::Moku,
    Gogyou::Ka,
    Gogyou::Do,
    Gogyou::Kin,
    Gogyou::Sui,
];

impl Gogyou {
    /// Single-character name (木, 火, 土, 金, 水).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Moku => "木",
            Self::Ka => "火",
            Self::Do => "土",
            Self::Kin => "金",
            Self::Sui => "水",
        }
    }

    /// 0-based index in production order.
    pub const fn index(self) -> usize {
        match self {
            Self::Moku => 0,
            Self::Ka => 1,
            Self::Do => 2,
            Self::Kin => 3,
            Self::Sui => 4,
        }
    }

    /// Element that produces this one (生気).
    pub const fn produced_by(self) -> Self {
        ALL_GOGYOU[(self.index() + 4) % 5]
    }

    /// Element this one produces (退気).
    pub const fn produces(self) -> Self {
        ALL_GOGYOU[(self.index() + 1) % 5]
    }

    /// Star indices (1..=9) belonging to this element.
    pub const fn members(self) -> &'static [u8] {
        match self {
            Self::Moku => &[3, 4],
            Self::Ka => &[9],
            Self::Do => &[2, 5, 8],
            Self::Kin => &[6, 7],
            Self::Sui => &[1],
        }
    }
}
