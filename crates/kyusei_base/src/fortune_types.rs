//! Types for direction fortunes: labels, star groups and lucky-star sources.

use kyusei_time::CalendarDate;
use serde::Serialize;

use crate::star::Kyusei;

/// Whether a label is auspicious or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LabelKind {
    Blessing,
    Curse,
}

/// A blessing or curse attached to a board direction.
///
/// One direction may carry several labels at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionLabel {
    // ── blessings ──
    Saidai,
    Daiki,
    Doukai,
    RinjuKiti,
    Tendo,
    Daisan,
    Taisai,
    Gekken,
    Nissin,
    // ── curses ──
    Goou,
    Anken,
    Honmei,
    Getumei,
    Saiha,
    Geppa,
    Nippa,
    HonmeiTeki,
    GetumeiTeki,
    Koji,
    RinjuKyou,
    TeiiTeki,
}

/// All 21 labels, blessings first.
pub const ALL_DIRECTION_LABELS: [DirectionLabel; 21] = [
    DirectionLabel::Saidai,
    DirectionLabel::Daiki,
    DirectionLabel::Doukai,
    DirectionLabel::RinjuKiti,
    DirectionLabel::Tendo,
    DirectionLabel::Daisan,
    DirectionLabel::Taisai,
    DirectionLabel::Gekken,
    DirectionLabel::Nissin,
    DirectionLabel::Goou,
    DirectionLabel::Anken,
    DirectionLabel::Honmei,
    DirectionLabel::Getumei,
    DirectionLabel::Saiha,
    DirectionLabel::Geppa,
    DirectionLabel::Nippa,
    DirectionLabel::HonmeiTeki,
    DirectionLabel::GetumeiTeki,
    DirectionLabel::Koji,
    DirectionLabel::RinjuKyou,
    DirectionLabel::TeiiTeki,
];

impl DirectionLabel {
    /// Stable identifier, also the suffix of the label's enable switch.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Saidai => "saidai",
            Self::Daiki => "daiki",
            Self::Doukai => "doukai",
            Self::RinjuKiti => "rinju_kiti",
            Self::Tendo => "tendo",
            Self::Daisan => "daisan",
            Self::Taisai => "taisai",
            Self::Gekken => "gekken",
            Self::Nissin => "nissin",
            Self::Goou => "goou",
            Self::Anken => "anken",
            Self::Honmei => "honmei",
            Self::Getumei => "getumei",
            Self::Saiha => "saiha",
            Self::Geppa => "geppa",
            Self::Nippa => "nippa",
            Self::HonmeiTeki => "honmei_teki",
            Self::GetumeiTeki => "getumei_teki",
            Self::Koji => "koji",
            Self::RinjuKyou => "rinju_kyou",
            Self::TeiiTeki => "teii_teki",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Saidai => "最大吉方",
            Self::Daiki => "吉方",
            Self::Doukai => "同会吉方",
            Self::RinjuKiti => "輪重吉方",
            Self::Tendo => "天道",
            Self::Daisan => "大三合",
            Self::Taisai => "太歳",
            Self::Gekken => "月建",
            Self::Nissin => "日辰",
            Self::Goou => "五黄殺",
            Self::Anken => "暗剣殺",
            Self::Honmei => "本命殺",
            Self::Getumei => "月命殺",
            Self::Saiha => "歳破",
            Self::Geppa => "月破",
            Self::Nippa => "日破",
            Self::HonmeiTeki => "本命的殺",
            Self::GetumeiTeki => "月命的殺",
            Self::Koji => "小児殺",
            Self::RinjuKyou => "輪重凶方",
            Self::TeiiTeki => "定位対冲",
        }
    }

    pub const fn kind(self) -> LabelKind {
        match self {
            Self::Saidai
            | Self::Daiki
            | Self::Doukai
            | Self::RinjuKiti
            | Self::Tendo
            | Self::Daisan
            | Self::Taisai
            | Self::Gekken
            | Self::Nissin => LabelKind::Blessing,
            _ => LabelKind::Curse,
        }
    }

    pub const fn is_blessing(self) -> bool {
        matches!(self.kind(), LabelKind::Blessing)
    }

    /// Configuration key switching the label on or off (`enable_<id>`).
    pub fn enable_key(self) -> String {
        format!("enable_{}", self.id())
    }

    /// Label for an identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        ALL_DIRECTION_LABELS.iter().copied().find(|l| l.id() == id)
    }
}

/// Board a fortune is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Granularity {
    Year,
    Month,
    Day,
}

/// All three granularities, coarsest first.
pub const ALL_GRANULARITIES: [Granularity; 3] =
    [Granularity::Year, Granularity::Month, Granularity::Day];

/// Year, month and day stars of one date (a birth or target profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarGroup {
    pub date: CalendarDate,
    pub year: Kyusei,
    pub month: Kyusei,
    pub day: Kyusei,
}

impl StarGroup {
    pub const fn new(date: CalendarDate, year: Kyusei, month: Kyusei, day: Kyusei) -> Self {
        Self {
            date,
            year,
            month,
            day,
        }
    }

    /// Star ruling the given board.
    pub const fn star(&self, granularity: Granularity) -> Kyusei {
        match granularity {
            Granularity::Year => self.year,
            Granularity::Month => self.month,
            Granularity::Day => self.day,
        }
    }
}

/// Lucky-star sets attached to a birth profile.
///
/// How these sets are derived is up to the caller.
pub trait LuckyStarSource {
    /// Stars that mark the greatest lucky direction (最大吉方).
    fn max_lucky_stars(&self) -> &[u8];
    /// Stars that mark a lucky direction (吉方).
    fn big_lucky_stars(&self) -> &[u8];
}

/// Plain lucky-star sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LuckyStars {
    pub max: Vec<u8>,
    pub big: Vec<u8>,
}

impl LuckyStars {
    pub fn new(max: Vec<u8>, big: Vec<u8>) -> Self {
        Self { max, big }
    }

    /// No lucky stars at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every star compatible with the birth year star counts as lucky;
    /// no star is singled out as greatest.
    pub fn from_own_lucky(birth_year: Kyusei) -> Self {
        Self {
            max: Vec::new(),
            big: birth_year.lucky_stars(),
        }
    }
}

impl LuckyStarSource for LuckyStars {
    fn max_lucky_stars(&self) -> &[u8] {
        &self.max
    }

    fn big_lucky_stars(&self) -> &[u8] {
        &self.big
    }
}

/// Labels for the 8 board directions, in board order.
pub type DirectionLabels = [Vec<DirectionLabel>; 8];

/// Labels for the year, month and day boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectionFortunes {
    pub year: DirectionLabels,
    pub month: DirectionLabels,
    pub day: DirectionLabels,
}

impl DirectionFortunes {
    pub fn get(&self, granularity: Granularity) -> &DirectionLabels {
        match granularity {
            Granularity::Year => &self.year,
            Granularity::Month => &self.month,
            Granularity::Day => &self.day,
        }
    }

    pub fn get_mut(&mut self, granularity: Granularity) -> &mut DirectionLabels {
        match granularity {
            Granularity::Year => &mut self.year,
            Granularity::Month => &mut self.month,
            Granularity::Day => &mut self.day,
        }
    }
}
