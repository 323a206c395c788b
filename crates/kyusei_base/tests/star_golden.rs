//! Golden tests for year, month and lucky stars and the board layouts.

use kyusei_base::{
    ALL_KYUSEI, CENTER_STAR, KOUTEN_JOUI, Kyusei, find_kipous, layout12, month_star, month_star_of,
    position_of, stars_to_text, year_star, year_star_of,
};
use kyusei_time::CalendarDate;
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> CalendarDate {
    CalendarDate::new(y, m, day).unwrap()
}

// ---------------------------------------------------------------------------
// Year stars
// ---------------------------------------------------------------------------

#[test]
fn year_stars_by_date() {
    assert_eq!(year_star(d(1990, 5, 15)), Kyusei::Ippaku);
    assert_eq!(year_star(d(2000, 2, 3)), Kyusei::Ippaku);
    assert_eq!(year_star(d(2000, 2, 4)), Kyusei::Kyushi);
    assert_eq!(year_star(d(1999, 12, 31)), Kyusei::Ippaku);
}

#[test]
fn year_stars_of_a_decade() {
    let stars: Vec<u8> = (2015..=2024).map(|y| year_star_of(y).index()).collect();
    assert_eq!(stars, vec![3, 2, 1, 9, 8, 7, 6, 5, 4, 3]);
}

#[test]
fn year_stars_by_decade() {
    let cases = [
        (1950, 5),
        (1960, 4),
        (1970, 3),
        (1980, 2),
        (1985, 6),
        (1995, 5),
        (2005, 4),
        (2015, 3),
        (2025, 2),
        (2030, 6),
    ];
    for (year, star) in cases {
        assert_eq!(year_star_of(year).index(), star, "{year}");
        assert_eq!(year_star(d(year, 6, 1)).index(), star, "{year}");
    }
}

#[test]
fn risshun_pairs() {
    // (day before, 立春) for years whose 立春 falls on Feb 4
    for (year, before, after) in [(2020, 8, 7), (2022, 6, 5), (2023, 5, 4), (2024, 4, 3)] {
        assert_eq!(year_star(d(year, 2, 3)).index(), before, "{year}");
        assert_eq!(year_star(d(year, 2, 4)).index(), after, "{year}");
    }
    // 2021 立春 is Feb 3
    assert_eq!(year_star(d(2021, 2, 2)).index(), 7);
    assert_eq!(year_star(d(2021, 2, 3)).index(), 6);
    assert_eq!(year_star(d(2021, 2, 4)).index(), 6);
}

// ---------------------------------------------------------------------------
// Month stars
// ---------------------------------------------------------------------------

#[test]
fn month_stars_by_date() {
    assert_eq!(month_star(d(1985, 3, 10)).index(), 4);
    assert_eq!(month_star(d(2024, 6, 20)).index(), 1);
    // 立春 month of a 三碧 year is 五黄
    assert_eq!(month_star(d(2024, 2, 10)).index(), 5);
    // January 2025 still belongs to 2024's cycle (丑 month)
    assert_eq!(month_star(d(2025, 1, 20)).index(), 3);
}

#[test]
fn month_star_groups_share_rows() {
    for i in 0..12 {
        assert_eq!(month_star_of(Kyusei::Ippaku, i), month_star_of(Kyusei::Shiroku, i));
        assert_eq!(month_star_of(Kyusei::Ippaku, i), month_star_of(Kyusei::Shichiseki, i));
        assert_eq!(month_star_of(Kyusei::Sanpeki, i), month_star_of(Kyusei::Kyushi, i));
    }
}

// ---------------------------------------------------------------------------
// Lucky stars and layouts
// ---------------------------------------------------------------------------

#[test]
fn lucky_stars_of_each_star() {
    let expected: [&[u8]; 9] = [
        &[3, 4, 6, 7],
        &[6, 7, 8, 9],
        &[1, 4, 9],
        &[1, 3, 9],
        &[2, 6, 7, 8, 9],
        &[1, 2, 7, 8],
        &[1, 2, 6, 8],
        &[2, 6, 7, 9],
        &[2, 3, 4, 8],
    ];
    for (s, want) in ALL_KYUSEI.iter().zip(expected) {
        assert_eq!(s.lucky_stars(), want, "{}", s.name());
    }
}

#[test]
fn lucky_star_text() {
    assert_eq!(stars_to_text(&find_kipous(3)), "一白水星,四緑木星,九紫火星");
}

proptest! {
    #[test]
    fn kiban8_is_a_permutation(i in 1u8..=9) {
        let star = Kyusei::from_index(i).unwrap();
        let layout = star.kiban8();
        for v in 1..=9u8 {
            prop_assert_eq!(position_of(&layout, v).is_some(), v != i);
        }
    }

    #[test]
    fn kiban8_shifts_post_heaven(i in 1u8..=9) {
        let layout = Kyusei::from_index(i).unwrap().kiban8();
        for (slot, &home) in KOUTEN_JOUI.iter().enumerate() {
            let shifted = (home as i32 - 1 + i as i32 - CENTER_STAR as i32).rem_euclid(9) + 1;
            prop_assert_eq!(layout[slot] as i32, shifted);
        }
    }

    #[test]
    fn layout12_duplicates_corners(i in 1u8..=9) {
        let star = Kyusei::from_index(i).unwrap();
        let k8 = star.kiban8();
        let k12 = layout12(&k8);
        prop_assert_eq!(k12, star.kiban12());
        prop_assert_eq!(k12[0], k8[0]);
        prop_assert_eq!(k12[1], k12[2]);
        prop_assert_eq!(k12[4], k12[5]);
        prop_assert_eq!(k12[7], k12[8]);
        prop_assert_eq!(k12[10], k12[11]);
    }

    #[test]
    fn own_lucky_never_center_nor_self(i in 1u8..=9) {
        let lucky = Kyusei::from_index(i).unwrap().lucky_stars();
        prop_assert!(!lucky.contains(&CENTER_STAR));
        prop_assert!(!lucky.contains(&i));
        prop_assert!(lucky.windows(2).all(|w| w[0] < w[1]));
    }
}
