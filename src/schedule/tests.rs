//! End-to-end tests over synthetic sheets

use super::*;
use crate::common::{Axis, Error};
use crate::layout::Faculty;
use crate::pair::{PairTextParser, Teacher};
use crate::sheet::text::{parse_delimited, DelimitedConfig};
use crate::sheet::{CellAddress, Range, Sheet, Workbook};
use proptest::prelude::*;

const GROUPS: [&str; 3] = ["1-21б", "1-22б", "1-23б"];
const TIMES: [&str; 5] = ["8.00-9.30", "9.40-11.10", "11.20-12.50", "13.20-14.50", "15.00-16.30"];
const DAY_NAMES: [&str; 6] = ["Понедельник", "Вторник", "Среда", "Четверг", "Пятница", "Суббота"];

/// Full-time layout: times from B9, groups from C6, two rows per slot.
const FIRST_ROW: u32 = 8;
const PITCH: u32 = 2;

/// A week laid out at the full-time preset's coordinates.
///
/// Day `d` has `slots[d]` slots followed by one blank row; every group has its
/// own class in every slot. With `shared`, the first class of Monday is a
/// single lecture merged across all groups.
fn week_sheet(name: &str, slots: &[u32], shared: bool) -> Sheet {
    let mut sheet = Sheet::new(name);
    sheet.set_cell(CellAddress::new(1, 2), "Расписание занятий");
    for (g, group) in GROUPS.iter().enumerate() {
        sheet.set_cell(CellAddress::new(5, 2 + g as u32), *group);
    }

    let mut start = FIRST_ROW;
    for (day, &count) in slots.iter().enumerate() {
        sheet.set_cell(CellAddress::new(start, 0), DAY_NAMES[day]);
        for slot in 0..count {
            let row = start + slot * PITCH;
            sheet.set_cell(CellAddress::new(row, 1), TIMES[slot as usize]);
            for g in 0..GROUPS.len() as u32 {
                if shared && day == 0 && slot == 0 && g > 0 {
                    continue;
                }
                let text = format!("Дисциплина {} {} {}", day + 1, slot + 1, g + 1);
                sheet.set_cell(CellAddress::new(row, 2 + g), text);
            }
        }
        start += count * PITCH + 1;
    }

    if shared {
        sheet.set_cell(CellAddress::new(FIRST_ROW, 2), "Общая лекция 305");
        sheet.add_merge(Range::from_coords(FIRST_ROW, 2, FIRST_ROW, 4));
    }
    sheet
}

fn full_week(name: &str) -> Sheet {
    week_sheet(name, &[5; 6], true)
}

fn title_sheet(name: &str) -> Sheet {
    Sheet::new(name)
        .with_cell(0, 0, "Расписание")
        .with_cell(2, 0, "Утверждаю")
}

#[test]
fn test_parse_detected_week() {
    let pairs = PairTextParser::without_roster();
    let parser = ScheduleParser::new(Faculty::Ff, &pairs).with_week_start(WeekStart::from_ymd(2025, 9, 1));

    let schedule = parser.parse_sheet(&full_week("1 курс")).unwrap();
    assert_eq!(schedule.sheet, "1 курс");
    assert_eq!(schedule.faculty, Some(Faculty::Ff));
    assert_eq!(schedule.groups, GROUPS);
    // 6 days x 5 slots x 3 groups, the shared lecture counted once
    assert_eq!(schedule.sessions.len(), 88);

    let lecture = &schedule.sessions[0];
    assert_eq!(lecture.text, "Общая лекция 305");
    assert_eq!(lecture.subject, "Общая лекция");
    assert_eq!(lecture.room.as_deref(), Some("305"));
    assert_eq!(lecture.number, 1);
    assert_eq!(lecture.groups.len(), 3);
    assert_eq!(lecture.date.map(|d| d.to_string()).as_deref(), Some("2025-09-01"));

    let saturday: Vec<_> = schedule.sessions_on(5).collect();
    assert_eq!(saturday.len(), 15);
    assert!(saturday.iter().all(|s| s.date.map(|d| d.to_string()).as_deref() == Some("2025-09-06")));
    assert_eq!(schedule.sessions_for("1-22б").count(), 30);
}

#[test]
fn test_slot_numbers_reset_per_day() {
    let pairs = PairTextParser::without_roster();
    let parser = ScheduleParser::new(Faculty::Ff, &pairs);
    let schedule = parser.parse_sheet(&full_week("1 курс")).unwrap();

    for day in 0..6 {
        let numbers: Vec<u32> = schedule
            .sessions_on(day)
            .filter(|s| s.has_group("1-23б"))
            .map(|s| s.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
    assert!(schedule.sessions.iter().all(|s| s.date.is_none()));
}

#[test]
fn test_rows_after_saturday_are_ignored() {
    let mut sheet = full_week("1 курс");
    let after = FIRST_ROW + 6 * (5 * PITCH + 1) + 1;
    sheet.set_cell(CellAddress::new(after, 1), "8.00");
    sheet.set_cell(CellAddress::new(after, 2), "Консультация");

    let pairs = PairTextParser::without_roster();
    let schedule = ScheduleParser::new(Faculty::Ff, &pairs).parse_sheet(&sheet).unwrap();
    assert_eq!(schedule.sessions.len(), 88);
    assert!(schedule.sessions.iter().all(|s| s.text != "Консультация"));
}

#[test]
fn test_fixed_layout_matches_detection() {
    let sheet = full_week("1 курс");
    let pairs = PairTextParser::without_roster();
    let parser = ScheduleParser::new(Faculty::Iittien, &pairs);

    let fixed = parser.parse_fixed(&sheet).unwrap();
    let detected = parser.parse_sheet(&sheet).unwrap();
    assert_eq!(fixed, detected);
}

#[test]
fn test_teacher_ids_from_split_slot() {
    let mut sheet = full_week("1 курс");
    let row = FIRST_ROW + (5 * PITCH + 1) + PITCH;
    sheet.set_cell(CellAddress::new(row, 2), "Физика");
    sheet.set_cell(CellAddress::new(row + 1, 2), "Иванов И.И. 214");

    let roster = [
        Teacher::new(7, "Иванов Иван Иванович"),
        Teacher::new(9, "Петров Пётр Петрович"),
    ];
    let pairs = PairTextParser::new(&roster).unwrap();
    let schedule = ScheduleParser::new(Faculty::Ff, &pairs).parse_sheet(&sheet).unwrap();

    let physics = schedule
        .sessions
        .iter()
        .find(|s| s.text == "Физика / Иванов И.И. 214")
        .unwrap();
    assert_eq!(physics.day, 1);
    assert_eq!(physics.number, 2);
    assert_eq!(physics.subject, "Физика");
    assert_eq!(physics.room.as_deref(), Some("214"));
    assert_eq!(physics.teachers.as_slice(), &[7]);
}

#[test]
fn test_workbook_skips_unmatched_sheets() {
    let workbook = Workbook::new(vec![title_sheet("Титул"), full_week("1 курс")]);
    let pairs = PairTextParser::without_roster();
    let parser = ScheduleParser::new(Faculty::Ff, &pairs);

    let schedule = parser.parse_workbook(&workbook).unwrap();
    assert_eq!(schedule.sheet, "1 курс");
}

#[test]
fn test_workbook_tries_active_tab_first() {
    let workbook = Workbook::new(vec![full_week("1 курс"), full_week("2 курс")]).with_active_tab(1);
    let pairs = PairTextParser::without_roster();

    let schedule = ScheduleParser::new(Faculty::Ff, &pairs).parse_workbook(&workbook).unwrap();
    assert_eq!(schedule.sheet, "2 курс");
}

#[test]
fn test_workbook_reports_first_failure() {
    let pairs = PairTextParser::without_roster();
    let parser = ScheduleParser::new(Faculty::Ff, &pairs);

    let workbook = Workbook::new(vec![title_sheet("Титул"), title_sheet("Примечания")]);
    match parser.parse_workbook(&workbook) {
        Err(Error::LayoutNotFound { axis, sheet }) => {
            assert_eq!(axis, Axis::Time);
            assert_eq!(sheet, "Титул");
        }
        other => panic!("expected layout error, got {:?}", other),
    }

    let workbook = workbook.with_active_tab(1);
    match parser.parse_workbook(&workbook) {
        Err(Error::LayoutNotFound { sheet, .. }) => assert_eq!(sheet, "Примечания"),
        other => panic!("expected layout error, got {:?}", other),
    }

    let empty: Workbook<Sheet> = Workbook::new(Vec::new());
    assert!(matches!(parser.parse_workbook(&empty), Err(Error::EmptyWorkbook)));
}

#[test]
fn test_missing_group_row() {
    let mut sheet = full_week("1 курс");
    for g in 0..GROUPS.len() as u32 {
        sheet.set_cell(CellAddress::new(5, 2 + g), "Группа");
    }

    let pairs = PairTextParser::without_roster();
    let result = ScheduleParser::new(Faculty::Ff, &pairs).parse_sheet(&sheet);
    assert!(matches!(result, Err(Error::LayoutNotFound { axis: Axis::Groups, .. })));
}

#[test]
fn test_unknown_faculty_key() {
    let pairs = PairTextParser::without_roster();
    let result = ScheduleParser::for_faculty_key("astronomy", &pairs);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_part_time_tsv_fixture() {
    let tsv = "\n\n\n\n\n\n\n\
               \t\t2-11м\t2-12м\n\
               \n\
               Пн\t8.00\tФизика\tХимия  313\n\
               \t\tИванов И.И.  305\n\
               \t9.40\tАлгебра\n";
    let sheet = parse_delimited(tsv, &DelimitedConfig::tsv().with_sheet_name("Заочное"));
    let roster = [Teacher::new(7, "Иванов Иван Иванович")];
    let pairs = PairTextParser::new(&roster).unwrap();

    let schedule = ScheduleParser::new(Faculty::GuminZb, &pairs)
        .with_week_start(WeekStart::from_ymd(2025, 9, 3))
        .parse_fixed(&sheet)
        .unwrap();

    assert_eq!(schedule.groups, vec!["2-11м", "2-12м"]);
    let texts: Vec<_> = schedule.sessions.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Физика / Иванов И.И. / 305", "Алгебра", "Химия / 313"]);
    assert_eq!(schedule.sessions[0].teachers.as_slice(), &[7]);
    assert_eq!(schedule.sessions[0].room.as_deref(), Some("305"));
    assert_eq!(schedule.sessions[2].subject, "Химия");
    assert_eq!(schedule.week_start.map(|w| w.to_string()).as_deref(), Some("2025-09-01"));
}

#[test]
fn test_custom_config_validation() {
    let pairs = PairTextParser::without_roster();
    let config = crate::layout::LayoutConfig {
        cols_per_group: 0,
        ..Faculty::Ff.layout()
    };
    assert!(matches!(ScheduleParser::with_config(config, &pairs), Err(Error::Configuration(_))));

    let config = crate::layout::LayoutConfig {
        min_last_day_slots: u32::MAX,
        ..Faculty::Ff.layout()
    };
    assert!(matches!(ScheduleParser::with_config(config, &pairs), Err(Error::Configuration(_))));

    let parser = ScheduleParser::with_config(Faculty::Ff.layout(), &pairs).unwrap();
    let schedule = parser.parse_sheet(&full_week("1 курс")).unwrap();
    assert_eq!(schedule.faculty, None);
    assert_eq!(schedule.sessions.len(), 88);
}

proptest! {
    #[test]
    fn prop_round_trip_counts(slots in prop::collection::vec(1u32..=5, 1..=6)) {
        let sheet = week_sheet("1 курс", &slots, false);
        let pairs = PairTextParser::without_roster();
        let parser = ScheduleParser::new(Faculty::Ff, &pairs);

        let schedule = parser.parse_fixed(&sheet).unwrap();
        prop_assert_eq!(&schedule.groups, &GROUPS.to_vec());
        let expected: u32 = slots.iter().sum::<u32>() * GROUPS.len() as u32;
        prop_assert_eq!(schedule.sessions.len(), expected as usize);
        prop_assert!(schedule.sessions.iter().all(|s| s.groups.len() == 1));

        // Parsing is pure
        prop_assert_eq!(parser.parse_fixed(&sheet).unwrap(), schedule);
    }
}
