//! Year, month and legacy day stars.
//!
//! Year and month stars follow the Qi calendar, so a January date before
//! 立春 takes the previous year's star. The legacy day star is a plain
//! 9-day rotation from 2000-01-01 and is not aligned with the
//! solstice-anchored day-star engine in [`crate::day_star`].

use kyusei_time::{CalendarDate, QiDate};

use crate::star::{ALL_KYUSEI, Kyusei};

/// Month stars by Qi-month index, one column per year-star group
/// (years 1/4/7, 2/5/8, 3/6/9).
pub const MONTH_TABLE: [[u8; 3]; 12] = [
    [8, 2, 5],
    [7, 1, 4],
    [6, 9, 3],
    [5, 8, 2],
    [4, 7, 1],
    [3, 6, 9],
    [2, 5, 8],
    [1, 4, 7],
    [9, 3, 6],
    [8, 2, 5],
    [7, 1, 4],
    [6, 9, 3],
];

/// Epoch of the legacy day rotation (九紫 on this date).
const LEGACY_DAY_EPOCH_DAYS: i64 = 10_957; // 2000-01-01

/// Star ruling Qi year `qi_year`.
pub fn year_star_of(qi_year: i32) -> Kyusei {
    let m = match qi_year.rem_euclid(9) {
        0 => 9,
        1 => 10,
        m => m,
    };
    star_at(11 - m)
}

/// Star ruling the Qi year containing `date`.
pub fn year_star(date: CalendarDate) -> Kyusei {
    year_star_of(QiDate::of(date).year())
}

/// Star ruling the Qi month containing `date`.
pub fn month_star(date: CalendarDate) -> Kyusei {
    let qi = QiDate::of(date);
    month_star_of(year_star_of(qi.year()), qi.month_index())
}

/// Month star from the year star and a Qi-month index.
pub fn month_star_of(year_star: Kyusei, month_index: usize) -> Kyusei {
    let column = (year_star.index() as usize - 1) % 3;
    star_at(MONTH_TABLE[month_index % 12][column] as i32)
}

/// Legacy 9-day rotation: `9 - (days since 2000-01-01 mod 9)`.
pub fn legacy_day_star(date: CalendarDate) -> Kyusei {
    let elapsed = date.days_since_epoch() - LEGACY_DAY_EPOCH_DAYS;
    star_at(9 - elapsed.rem_euclid(9) as i32)
}

fn star_at(index: i32) -> Kyusei {
    ALL_KYUSEI[(index - 1).rem_euclid(9) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn year_star_cycle_descends() {
        for y in 1900..2100 {
            let a = year_star_of(y).index();
            let b = year_star_of(y + 1).index();
            assert_eq!(if a == 1 { 9 } else { a - 1 }, b, "year {y}");
        }
    }

    #[test]
    fn negative_years_wrap() {
        assert_eq!(year_star_of(-9), year_star_of(0));
        assert_eq!(year_star_of(-1), year_star_of(8));
    }

    #[test]
    fn risshun_boundary_flips() {
        assert_eq!(year_star(d(2000, 2, 3)).index(), 1);
        assert_eq!(year_star(d(2000, 2, 4)).index(), 9);
    }

    #[test]
    fn month_star_fixture() {
        assert_eq!(year_star(d(1985, 3, 10)).index(), 6);
        assert_eq!(month_star(d(1985, 3, 10)).index(), 4);
    }

    #[test]
    fn legacy_day_star_rotation() {
        assert_eq!(legacy_day_star(d(2000, 1, 1)).index(), 9);
        assert_eq!(legacy_day_star(d(2000, 1, 2)).index(), 8);
        assert_eq!(legacy_day_star(d(1999, 12, 31)).index(), 1);
        assert_eq!(legacy_day_star(d(2000, 1, 10)).index(), 9);
    }
}
