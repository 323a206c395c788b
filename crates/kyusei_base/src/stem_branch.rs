//! Ten stems, twelve branches and the 60-step stem-branch cycle.
//!
//! Pillars for a date:
//! - day:   `(MJD + 50) mod 60`
//! - month: `(((qi_year + 1) mod 5) * 12 + month13) mod 60`
//! - year:  `(qi_year + 56) mod 60`
//!
//! Every lookup is `index mod n` against a fixed table, so nothing here
//! can fail.

use kyusei_time::{CalendarDate, QiDate};
use serde::Serialize;

use crate::direction::Direction;

/// Modified Julian Day of 1970-01-01.
const MJD_OF_UNIX_EPOCH: i64 = 40_587;

// ---------------------------------------------------------------------------
// Stems
// ---------------------------------------------------------------------------

/// The ten heavenly stems (十干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Jikkan {
    Kinoe,
    Kinoto,
    Hinoe,
    Hinoto,
    Tsuchinoe,
    Tsuchinoto,
    Kanoe,
    Kanoto,
    Mizunoe,
    Mizunoto,
}

/// All 10 stems in cycle order (index 0 = 甲).
pub const ALL_JIKKAN: [Jikkan; 10] = [
    Jikkan::Kinoe,
    Jikkan::Kinoto,
    Jikkan::Hinoe,
    Jikkan::Hinoto,
    Jikkan::Tsuchinoe,
    Jikkan::Tsuchinoto,
    Jikkan::Kanoe,
    Jikkan::Kanoto,
    Jikkan::Mizunoe,
    Jikkan::Mizunoto,
];

const JIKKAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const JIKKAN_READINGS: [&str; 10] = [
    "こう", "おつ", "へい", "てい", "ぼ", "き", "こう", "しん", "じん", "き",
];

impl Jikkan {
    pub const fn index(self) -> usize {
        match self {
            Self::Kinoe => 0,
            Self::Kinoto => 1,
            Self::Hinoe => 2,
            Self::Hinoto => 3,
            Self::Tsuchinoe => 4,
            Self::Tsuchinoto => 5,
            Self::Kanoe => 6,
            Self::Kanoto => 7,
            Self::Mizunoe => 8,
            Self::Mizunoto => 9,
        }
    }

    /// Stem at `index`, wrapping modulo 10.
    pub const fn from_index(index: usize) -> Self {
        ALL_JIKKAN[index % 10]
    }

    pub const fn name(self) -> &'static str {
        JIKKAN_NAMES[self.index()]
    }

    pub const fn reading(self) -> &'static str {
        JIKKAN_READINGS[self.index()]
    }
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

/// The twelve earthly branches (十二支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Junishi {
    Ne,
    Ushi,
    Tora,
    U,
    Tatsu,
    Mi,
    Uma,
    Hitsuji,
    Saru,
    Tori,
    Inu,
    I,
}

/// All 12 branches in cycle order (index 0 = 子).
pub const ALL_JUNISHI: [Junishi; 12] = [
    Junishi::Ne,
    Junishi::Ushi,
    Junishi::Tora,
    Junishi::U,
    Junishi::Tatsu,
    Junishi::Mi,
    Junishi::Uma,
    Junishi::Hitsuji,
    Junishi::Saru,
    Junishi::Tori,
    Junishi::Inu,
    Junishi::I,
];

const JUNISHI_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const JUNISHI_READINGS: [&str; 12] = [
    "ね", "うし", "とら", "う", "たつ", "み", "うま", "ひつじ", "さる", "とり", "いぬ", "い",
];

impl Junishi {
    pub const fn index(self) -> usize {
        match self {
            Self::Ne => 0,
            Self::Ushi => 1,
            Self::Tora => 2,
            Self::U => 3,
            Self::Tatsu => 4,
            Self::Mi => 5,
            Self::Uma => 6,
            Self::Hitsuji => 7,
            Self::Saru => 8,
            Self::Tori => 9,
            Self::Inu => 10,
            Self::I => 11,
        }
    }

    /// Branch at `index`, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_JUNISHI[index % 12]
    }

    pub const fn name(self) -> &'static str {
        JUNISHI_NAMES[self.index()]
    }

    pub const fn reading(self) -> &'static str {
        JUNISHI_READINGS[self.index()]
    }

    /// Board direction the branch sits in.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Ne => Direction::North,
            Self::Ushi | Self::Tora => Direction::NorthEast,
            Self::U => Direction::East,
            Self::Tatsu | Self::Mi => Direction::SouthEast,
            Self::Uma => Direction::South,
            Self::Hitsuji | Self::Saru => Direction::SouthWest,
            Self::Tori => Direction::West,
            Self::Inu | Self::I => Direction::NorthWest,
        }
    }

    /// Star index (1..=9) that marks child peril (小児殺) in years of this branch.
    pub const fn child_peril_star(self) -> u8 {
        match self {
            Self::Ne | Self::Uma => 8,
            Self::Ushi | Self::Hitsuji => 9,
            Self::Tora | Self::Saru => 2,
            Self::U | Self::Tori => 3,
            Self::Tatsu | Self::Inu => 5,
            Self::Mi | Self::I => 6,
        }
    }

    /// Triad (三合) this branch belongs to.
    pub const fn triad(self) -> Sangou {
        match self {
            Self::Saru | Self::Ne | Self::Tatsu => Sangou::Water,
            Self::Tora | Self::Uma | Self::Inu => Sangou::Fire,
            Self::Mi | Self::Tori | Self::Ushi => Sangou::Metal,
            Self::I | Self::U | Self::Hitsuji => Sangou::Wood,
        }
    }
}

// ---------------------------------------------------------------------------
// Triads
// ---------------------------------------------------------------------------

/// The four branch triads (三合).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sangou {
    /// 申子辰
    Water,
    /// 寅午戌
    Fire,
    /// 巳酉丑
    Metal,
    /// 亥卯未
    Wood,
}

impl Sangou {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "申子辰",
            Self::Fire => "寅午戌",
            Self::Metal => "巳酉丑",
            Self::Wood => "亥卯未",
        }
    }

    /// Member branches; the middle one is the triad's cardinal branch.
    pub const fn branches(self) -> [Junishi; 3] {
        match self {
            Self::Water => [Junishi::Saru, Junishi::Ne, Junishi::Tatsu],
            Self::Fire => [Junishi::Tora, Junishi::Uma, Junishi::Inu],
            Self::Metal => [Junishi::Mi, Junishi::Tori, Junishi::Ushi],
            Self::Wood => [Junishi::I, Junishi::U, Junishi::Hitsuji],
        }
    }

    /// Great-triad (大三合) direction: the cardinal branch's direction.
    pub const fn direction(self) -> Direction {
        self.branches()[1].direction()
    }
}

// ---------------------------------------------------------------------------
// Sexagenary cycle
// ---------------------------------------------------------------------------

/// Position in the 60-step stem-branch cycle (0 = 甲子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StemBranch(u8);

impl StemBranch {
    /// Cycle position for any integer, wrapping modulo 60.
    pub const fn new(index: i64) -> Self {
        Self(index.rem_euclid(60) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn stem(self) -> Jikkan {
        Jikkan::from_index(self.0 as usize)
    }

    pub const fn branch(self) -> Junishi {
        Junishi::from_index(self.0 as usize)
    }

    /// Nattin (納音) index, 0..30.
    pub const fn nattin_index(self) -> u8 {
        self.0 / 2
    }

    pub const fn nattin(self) -> &'static str {
        NATTIN_NAMES[self.nattin_index() as usize]
    }

    pub const fn nattin_reading(self) -> &'static str {
        NATTIN_READINGS[self.nattin_index() as usize]
    }

    /// Two-character name, stem then branch (e.g. 甲子).
    pub fn name(self) -> String {
        format!("{}{}", self.stem().name(), self.branch().name())
    }
}

const NATTIN_NAMES: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路傍土", "剣鋒金", "山頭火", "澗下水", "城頭土", "白鑞金", "楊柳木",
    "井泉水", "屋上土", "霹靂火", "松柏木", "長流水", "沙中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆燈火", "天河水", "大駅土", "釵釧金", "桑柘木", "大渓水", "沙中土", "天上火", "石榴木", "大海水",
];

const NATTIN_READINGS: [&str; 30] = [
    "かいちゅうきん",
    "ろちゅうか",
    "たいりんぼく",
    "ろぼうど",
    "けんぼうきん",
    "さんとうか",
    "かんかすい",
    "じょうとうど",
    "はくろうきん",
    "ようりゅうぼく",
    "せいせんすい",
    "おくじょうど",
    "へきれきか",
    "しょうはくぼく",
    "ちょうりゅうすい",
    "さちゅうきん",
    "さんげか",
    "へいちぼく",
    "へきじょうど",
    "きんぱくきん",
    "ふくとうか",
    "てんがすい",
    "たいえきど",
    "させんきん",
    "そうたくぼく",
    "だいけいすい",
    "さちゅうど",
    "てんじょうか",
    "ざくろぼく",
    "たいかいすい",
];

/// Day pillar: `(MJD + 50) mod 60`.
pub fn day_pillar(date: CalendarDate) -> StemBranch {
    StemBranch::new(date.days_since_epoch() + MJD_OF_UNIX_EPOCH + 50)
}

/// Month pillar from the Qi year and the 2..=13 month number.
pub fn month_pillar(date: CalendarDate) -> StemBranch {
    let qi = QiDate::of(date);
    let base = (qi.year() as i64 + 1).rem_euclid(5) * 12;
    StemBranch::new(base + qi.month13() as i64)
}

/// Year pillar: `(qi_year + 56) mod 60`.
pub fn year_pillar(date: CalendarDate) -> StemBranch {
    StemBranch::new(QiDate::of(date).year() as i64 + 56)
}
