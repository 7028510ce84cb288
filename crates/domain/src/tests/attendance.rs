// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AttendanceSheet, AttendanceStatus, DomainError, Week};

fn week(number: i64) -> Week {
    Week::new(number).unwrap()
}

#[test]
fn test_week_range() {
    assert!(Week::is_valid(2));
    assert!(Week::is_valid(13));
    assert_eq!(Week::new(1), Err(DomainError::InvalidWeek { week: 1 }));
    assert_eq!(Week::new(14), Err(DomainError::InvalidWeek { week: 14 }));
    assert_eq!("7".parse::<Week>().unwrap().number(), 7);
}

#[test]
fn test_non_numeric_week_keeps_input() {
    let result: Result<Week, DomainError> = "abc".parse();

    let err: DomainError = result.unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidNumber {
            field: "week",
            input: String::from("abc"),
        }
    );
    assert_eq!(err.to_string(), "Invalid week: 'abc' is not a number");
    assert!(err.is_validation());
}

#[test]
fn test_mark_week_inserts_entry() {
    let sheet: AttendanceSheet =
        AttendanceSheet::new().mark_week(week(3), AttendanceStatus::Present);

    assert_eq!(
        sheet.attendance_for(week(3)),
        Some(AttendanceStatus::Present)
    );
    assert_eq!(sheet.attendance_for(week(4)), None);
    assert_eq!(sheet.len(), 1);
}

#[test]
fn test_mark_week_overwrites_previous_entry() {
    let sheet: AttendanceSheet = AttendanceSheet::new()
        .mark_week(week(3), AttendanceStatus::Absent)
        .mark_week(week(3), AttendanceStatus::Excused);

    assert_eq!(sheet.len(), 1);
    assert_eq!(
        sheet.attendance_for(week(3)),
        Some(AttendanceStatus::Excused)
    );
}

#[test]
fn test_mark_week_leaves_original_untouched() {
    let original: AttendanceSheet = AttendanceSheet::new();
    let _marked: AttendanceSheet = original.mark_week(week(5), AttendanceStatus::Present);
    assert!(original.is_empty());
}

#[test]
fn test_count_by_status() {
    let sheet: AttendanceSheet = AttendanceSheet::new()
        .mark_week(week(2), AttendanceStatus::Present)
        .mark_week(week(3), AttendanceStatus::Present)
        .mark_week(week(4), AttendanceStatus::Absent);

    assert_eq!(sheet.count(AttendanceStatus::Present), 2);
    assert_eq!(sheet.count(AttendanceStatus::Absent), 1);
    assert_eq!(sheet.count(AttendanceStatus::Excused), 0);
}
