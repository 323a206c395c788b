//! The nine stars (九星) and their fixed board layouts.
//!
//! Each star, placed in the centre palace, flies the other eight onto the
//! compass directions in a fixed order (`kiban8`, board index order
//! N, NE, E, SE, S, SW, W, NW). Two further reference layouts, the
//! post-heaven (後天定位) and pre-heaven (先天定位) arrangements, have no
//! element or direction of their own and only serve as lookup tables.

use serde::Serialize;

use crate::direction::Direction;
use crate::element::Gogyou;

/// Value of the centre star, never a lucky star.
pub const CENTER_STAR: u8 = 5;

/// Post-heaven arrangement: the star that naturally sits in each direction.
pub const KOUTEN_JOUI: [u8; 8] = [1, 8, 3, 4, 9, 2, 7, 6];

/// Pre-heaven arrangement.
pub const SENTEN_JOUI: [u8; 8] = [2, 3, 9, 7, 6, 4, 1, 8];

/// Maps each of the 12 branch slots of a board to its 8-direction slot.
pub const KIBAN12_PATTERN: [usize; 12] = [0, 1, 1, 2, 3, 3, 4, 5, 5, 6, 7, 7];

/// Text used when a star list is empty.
pub const EMPTY_STAR_TEXT: &str = "ー";

/// One of the nine stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Kyusei {
    Ippaku,
    Jikoku,
    Sanpeki,
    Shiroku,
    Goou,
    Roppaku,
    Shichiseki,
    Happaku,
    Kyushi,
}

/// All 9 stars in index order (一白 = 1 .. 九紫 = 9).
pub const ALL_KYUSEI: [Kyusei; 9] = [
    Kyusei::Ippaku,
    Kyusei::Jikoku,
    Kyusei::Sanpeki,
    Kyusei::Shiroku,
    Kyusei::Goou,
    Kyusei::Roppaku,
    Kyusei::Shichiseki,
    Kyusei::Happaku,
    Kyusei::Kyushi,
];

const KYUSEI_NAMES: [&str; 9] = [
    "一白水星",
    "二黒土星",
    "三碧木星",
    "四緑木星",
    "五黄土星",
    "六白金星",
    "七赤金星",
    "八白土星",
    "九紫火星",
];

const KYUSEI_READINGS: [&str; 9] = [
    "いっぱくすいせい",
    "じこくどせい",
    "さんぺきもくせい",
    "しろくもくせい",
    "ごおうどせい",
    "ろっぱくきんせい",
    "しちせききんせい",
    "はっぱくどせい",
    "きゅうしかせい",
];

const KIBAN8: [[u8; 8]; 9] = [
    [6, 4, 8, 9, 5, 7, 3, 2],
    [7, 5, 9, 1, 6, 8, 4, 3],
    [8, 6, 1, 2, 7, 9, 5, 4],
    [9, 7, 2, 3, 8, 1, 6, 5],
    [1, 8, 3, 4, 9, 2, 7, 6],
    [2, 9, 4, 5, 1, 3, 8, 7],
    [3, 1, 5, 6, 2, 4, 9, 8],
    [4, 2, 6, 7, 3, 5, 1, 9],
    [5, 3, 7, 8, 4, 6, 2, 1],
];

impl Kyusei {
    /// 1-based star index (一白=1 .. 九紫=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ippaku => 1,
            Self::Jikoku => 2,
            Self::Sanpeki => 3,
            Self::Shiroku => 4,
            Self::Goou => 5,
            Self::Roppaku => 6,
            Self::Shichiseki => 7,
            Self::Happaku => 8,
            Self::Kyushi => 9,
        }
    }

    /// Star for a 1-based index; `None` outside 1..=9.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index >= 1 && index <= 9 {
            Some(ALL_KYUSEI[index as usize - 1])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        KYUSEI_NAMES[self.index() as usize - 1]
    }

    pub const fn reading(self) -> &'static str {
        KYUSEI_READINGS[self.index() as usize - 1]
    }

    pub const fn gogyou(self) -> Gogyou {
        match self {
            Self::Ippaku => Gogyou::Sui,
            Self::Sanpeki | Self::Shiroku => Gogyou::Moku,
            Self::Jikoku | Self::Goou | Self::Happaku => Gogyou::Do,
            Self::Roppaku | Self::Shichiseki => Gogyou::Kin,
            Self::Kyushi => Gogyou::Ka,
        }
    }

    /// Home direction on the post-heaven board; the centre star has none.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Ippaku => Some(Direction::North),
            Self::Jikoku => Some(Direction::SouthWest),
            Self::Sanpeki => Some(Direction::East),
            Self::Shiroku => Some(Direction::SouthEast),
            Self::Goou => None,
            Self::Roppaku => Some(Direction::NorthWest),
            Self::Shichiseki => Some(Direction::West),
            Self::Happaku => Some(Direction::NorthEast),
            Self::Kyushi => Some(Direction::South),
        }
    }

    /// Inclination palace of the star's home direction.
    pub const fn inclination(self) -> Keisha {
        match self.direction() {
            Some(d) => Keisha::of_direction(d),
            None => Keisha::Taikyoku,
        }
    }

    /// 8-direction board with this star in the centre.
    pub const fn kiban8(self) -> [u8; 8] {
        KIBAN8[self.index() as usize - 1]
    }

    /// 12-slot board derived from `kiban8` by the duplication pattern.
    pub const fn kiban12(self) -> [u8; 12] {
        layout12(&self.kiban8())
    }

    /// Other stars of the same element (和気).
    pub fn waki(self) -> Vec<u8> {
        find_waki(self.index())
    }

    /// Stars compatible with this one (吉方となる星), sorted, never 5.
    pub fn lucky_stars(self) -> Vec<u8> {
        find_kipous(self.index())
    }
}

/// Expand an 8-direction layout into the 12 branch slots.
pub const fn layout12(layout8: &[u8; 8]) -> [u8; 12] {
    let mut out = [0u8; 12];
    let mut i = 0;
    while i < 12 {
        out[i] = layout8[KIBAN12_PATTERN[i]];
        i += 1;
    }
    out
}

/// Board position holding `value`, if the layout contains it.
pub fn position_of(layout: &[u8; 8], value: u8) -> Option<usize> {
    layout.iter().position(|&v| v == value)
}

/// Stars sharing `index`'s element, excluding `index` itself.
///
/// Empty for anything outside 1..=9.
pub fn find_waki(index: u8) -> Vec<u8> {
    let Some(star) = Kyusei::from_index(index) else {
        return Vec::new();
    };
    star.gogyou()
        .members()
        .iter()
        .copied()
        .filter(|&m| m != index)
        .collect()
}

/// Same-element stars plus the members of the producing and produced
/// elements, without 5, sorted ascending and deduplicated.
///
/// Empty for anything outside 1..=9.
pub fn find_kipous(index: u8) -> Vec<u8> {
    let Some(star) = Kyusei::from_index(index) else {
        return Vec::new();
    };
    let element = star.gogyou();
    let mut out = find_waki(index);
    out.extend_from_slice(element.produced_by().members());
    out.extend_from_slice(element.produces().members());
    out.retain(|&v| v != CENTER_STAR);
    out.sort_unstable();
    out.dedup();
    out
}

/// Star names joined with `,`; `ー` for an empty list. Unknown indices are skipped.
pub fn stars_to_text(indices: &[u8]) -> String {
    if indices.is_empty() {
        return EMPTY_STAR_TEXT.to_string();
    }
    indices
        .iter()
        .filter_map(|&i| Kyusei::from_index(i))
        .map(Kyusei::name)
        .collect::<Vec<_>>()
        .join(",")
}

// ---------------------------------------------------------------------------
// Inclination
// ---------------------------------------------------------------------------

/// Inclination palace (傾斜).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keisha {
    Kankyu,
    Gonkyu,
    Shinkyu,
    Sonkyu,
    Rikyu,
    Konkyu,
    Dakyu,
    Kenkyu,
    Taikyoku,
}

impl Keisha {
    /// Palace of a board direction.
    pub const fn of_direction(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::Kankyu,
            Direction::NorthEast => Self::Gonkyu,
            Direction::East => Self::Shinkyu,
            Direction::SouthEast => Self::Sonkyu,
            Direction::South => Self::Rikyu,
            Direction::SouthWest => Self::Konkyu,
            Direction::West => Self::Dakyu,
            Direction::NorthWest => Self::Kenkyu,
        }
    }

    /// Palace of a 12-slot board position.
    pub const fn of_slot12(slot: usize) -> Self {
        Self::of_direction(Direction::from_index(KIBAN12_PATTERN[slot % 12]))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Kankyu => "坎宮傾斜",
            Self::Gonkyu => "艮宮傾斜",
            Self::Shinkyu => "震宮傾斜",
            Self::Sonkyu => "巽宮傾斜",
            Self::Rikyu => "離宮傾斜",
            Self::Konkyu => "坤宮傾斜",
            Self::Dakyu => "兌宮傾斜",
            Self::Kenkyu => "乾宮傾斜",
            Self::Taikyoku => "太極",
        }
    }

    pub const fn reading(self) -> &'static str {
        match self {
            Self::Kankyu => "かんきゅうけいしゃ",
            Self::Gonkyu => "ごんきゅうけいしゃ",
            Self::Shinkyu => "しんきゅうけいしゃ",
            Self::Sonkyu => "そんきゅうけいしゃ",
            Self::Rikyu => "りきゅうけいしゃ",
            Self::Konkyu => "こんきゅうけいしゃ",
            Self::Dakyu => "だきゅうけいしゃ",
            Self::Kenkyu => "けんきゅうけいしゃ",
            Self::Taikyoku => "たいきょく",
        }
    }

    /// Paired palace (坎↔離, 坤↔乾, 震↔巽, 兌↔艮); the centre has none.
    pub const fn reverse(self) -> Option<Self> {
        match self {
            Self::Kankyu => Some(Self::Rikyu),
            Self::Rikyu => Some(Self::Kankyu),
            Self::Konkyu => Some(Self::Kenkyu),
            Self::Kenkyu => Some(Self::Konkyu),
            Self::Shinkyu => Some(Self::Sonkyu),
            Self::Sonkyu => Some(Self::Shinkyu),
            Self::Dakyu => Some(Self::Gonkyu),
            Self::Gonkyu => Some(Self::Dakyu),
            Self::Taikyoku => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        for (i, s) in ALL_KYUSEI.iter().enumerate() {
            assert_eq!(s.index() as usize, i + 1);
            assert_eq!(Kyusei::from_index(s.index()), Some(*s));
        }
        assert_eq!(Kyusei::from_index(0), None);
        assert_eq!(Kyusei::from_index(10), None);
    }

    #[test]
    fn kiban8_excludes_own_index() {
        for s in ALL_KYUSEI {
            let mut layout = s.kiban8().to_vec();
            layout.sort_unstable();
            let expected: Vec<u8> = (1..=9).filter(|&v| v != s.index()).collect();
            assert_eq!(layout, expected, "{}", s.name());
        }
    }

    #[test]
    fn center_board_is_post_heaven() {
        assert_eq!(Kyusei::Goou.kiban8(), KOUTEN_JOUI);
        for s in ALL_KYUSEI {
            if let Some(d) = s.direction() {
                assert_eq!(KOUTEN_JOUI[d.index()], s.index());
            }
        }
    }

    #[test]
    fn kiban12_follows_pattern() {
        let k12 = Kyusei::Ippaku.kiban12();
        assert_eq!(k12, [6, 4, 4, 8, 9, 9, 5, 7, 7, 3, 2, 2]);
    }

    #[test]
    fn waki_of_known_stars() {
        assert_eq!(find_waki(3), vec![4]);
        assert_eq!(find_waki(5), vec![2, 8]);
        assert!(find_waki(1).is_empty());
        assert!(find_waki(0).is_empty());
    }

    #[test]
    fn kipous_of_known_stars() {
        assert_eq!(find_kipous(1), vec![3, 4, 6, 7]);
        assert_eq!(find_kipous(9), vec![2, 3, 4, 8]);
        assert_eq!(find_kipous(5), vec![2, 6, 7, 8, 9]);
        assert!(find_kipous(42).is_empty());
    }

    #[test]
    fn text_rendering() {
        assert_eq!(stars_to_text(&[]), "ー");
        assert_eq!(stars_to_text(&[1, 9]), "一白水星,九紫火星");
        assert_eq!(stars_to_text(&[1, 0]), "一白水星");
    }

    #[test]
    fn inclinations() {
        assert_eq!(Kyusei::Ippaku.inclination(), Keisha::Kankyu);
        assert_eq!(Kyusei::Happaku.inclination(), Keisha::Gonkyu);
        assert_eq!(Kyusei::Goou.inclination(), Keisha::Taikyoku);
        assert_eq!(Keisha::Kankyu.reverse(), Some(Keisha::Rikyu));
        assert_eq!(Keisha::Taikyoku.reverse(), None);
        assert_eq!(Keisha::of_slot12(2), Keisha::Gonkyu);
    }
}
