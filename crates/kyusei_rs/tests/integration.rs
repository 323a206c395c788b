//! Integration tests for the kyusei_rs query surface.

use kyusei_rs::*;

fn d(text: &str) -> CalendarDate {
    parse_date(text).unwrap()
}

#[test]
fn parse_rejects_bad_input() {
    assert!(matches!(parse_date("2023-02-30"), Err(KyuseiRsError::Time(_))));
    assert!(matches!(parse_date("15/05/1990"), Err(KyuseiRsError::Time(_))));
}

#[test]
fn query_surface_fixtures() {
    assert_eq!(resolve_year_star(d("1990-05-15")).index(), 1);
    assert_eq!(resolve_month_star(d("1985-03-10")).index(), 4);
    assert_eq!(resolve_day_star_legacy(d("2000-01-01")).index(), 9);
    assert_eq!(resolve_day_star(d("2024-01-01")).unwrap().star, Kyusei::Ippaku);
    assert_eq!(own_lucky_stars(Kyusei::Ippaku), vec![3, 4, 6, 7]);
    assert_eq!(own_lucky_stars(Kyusei::Kyushi), vec![2, 3, 4, 8]);
    assert_eq!(star_layout8(Kyusei::Goou), [1, 8, 3, 4, 9, 2, 7, 6]);
    assert_eq!(star_layout12(Kyusei::Ippaku)[2], 4);
}

#[test]
fn precise_range_is_inclusive() {
    let recs = resolve_day_star_precise(d("2023-12-30"), d("2024-01-02")).unwrap();
    let stars: Vec<u8> = recs.iter().map(|r| r.star.index()).collect();
    assert_eq!(stars, vec![2, 1, 1, 2]);
}

#[test]
fn profile_of_1990() {
    let p = star_profile(d("1990-05-15"), Some(d("2024-06-20"))).unwrap();
    assert_eq!(p.birth.year.index, 1);
    assert_eq!(p.birth.year.name, "一白水星");
    assert_eq!(p.birth.year.direction, Some("北"));
    assert_eq!(p.birth.month.index, 5);
    assert_eq!(p.birth.month.direction, None);
    assert_eq!(p.birth.day.index, 2);
    assert_eq!(p.birth.year_pillar.name, "庚午");
    assert_eq!(p.birth.month_pillar.name, "辛巳");
    assert_eq!(p.birth.day_pillar.name, "庚辰");
    assert_eq!(p.birth.nattin, "路傍土");
    assert_eq!(p.birth.keisha, "坎宮傾斜");

    let current = p.current.unwrap();
    assert_eq!(current.year.index, 3);
    assert_eq!(current.month.index, 1);
    assert_eq!(current.day.index, 1);
}

#[test]
fn profile_without_target() {
    let p = star_profile(d("1990-05-15"), None).unwrap();
    assert!(p.current.is_none());
}

#[test]
fn profile_serializes_dates_as_iso() {
    let p = star_profile(d("1990-05-15"), None).unwrap();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["birth"]["date"], "1990-05-15");
    assert_eq!(json["current"], serde_json::Value::Null);
}

#[test]
fn quick_check_2024() {
    let q = quick_direction_check(d("1990-05-15"), d("2024-06-20"));
    assert_eq!(q.birth_star.index, 1);
    assert_eq!(q.year_board.layout, [8, 6, 1, 2, 7, 9, 5, 4]);
    assert_eq!(q.month_board.index, 1);
    assert_eq!(q.day_board.index, 9);
    assert_eq!(q.lucky_stars, vec![3, 4, 6, 7]);
    assert_eq!(q.lucky_text, "三碧木星,四緑木星,六白金星,七赤金星");

    let curses: Vec<_> = q.directions.iter().map(|v| v.curse).collect();
    assert_eq!(
        curses,
        vec![
            Some(DirectionLabel::Anken),
            None,
            Some(DirectionLabel::Anken),
            None,
            Some(DirectionLabel::Goou),
            None,
            Some(DirectionLabel::Goou),
            None,
        ]
    );
    assert_eq!(q.directions[1].blessing, Some(DirectionLabel::Daiki));
    assert_eq!(q.directions[1].name, "北東");
    assert_eq!(q.directions.iter().filter(|v| v.blessing.is_some()).count(), 1);
}

#[test]
fn quick_check_greatest_when_boards_agree() {
    // 2023-06: year and month boards are both 四緑
    let q = quick_direction_check(d("1990-05-15"), d("2023-06-08"));
    assert_eq!(q.directions[6].blessing, Some(DirectionLabel::Saidai));
    assert_eq!(q.directions[1].curse, Some(DirectionLabel::HonmeiTeki));
    assert_eq!(q.directions[5].curse, Some(DirectionLabel::Honmei));
    assert_eq!(q.directions[3].curse, Some(DirectionLabel::Anken));
    assert_eq!(q.directions[7].curse, Some(DirectionLabel::Goou));
    for v in &q.directions {
        assert!(v.blessing.is_none() || v.curse.is_none());
    }
}

#[test]
fn config_filters_fortunes() {
    let lucky = LuckyStars::from_own_lucky(Kyusei::Ippaku);
    let config = FortuneConfig::new().disable(DirectionLabel::Daiki);
    let f = fortunes_between_with_config(d("1990-05-15"), d("2024-06-20"), &lucky, &config)
        .unwrap();
    assert!(f.year.iter().all(|labels| !labels.contains(&DirectionLabel::Daiki)));
    assert_eq!(
        f.year[2],
        vec![
            DirectionLabel::Anken,
            DirectionLabel::Honmei,
            DirectionLabel::GetumeiTeki,
        ]
    );
}
