// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_range, create_test_roster, create_test_student, group_id, student_id,
};
use crate::{
    Command, CoreError, FieldChange, Outcome, Roster, StudentEdit, StudentSelector,
    TransitionResult, apply,
};
use ta_roster_domain::{
    AssignmentId, AttendanceStatus, DomainError, Phone, Student, TimeRange, Week,
};
use time::PrimitiveDateTime;
use time::macros::datetime;

#[test]
fn test_valid_command_returns_new_roster() {
    let roster: Roster = Roster::new();
    let command: Command = Command::AddStudent {
        student: create_test_student("E1234567", "T01"),
    };

    let result: TransitionResult = apply(&roster, command).unwrap();

    assert_eq!(result.new_roster.students().len(), 1);
    assert!(result.new_roster.has_group(&group_id("T01")));
    assert!(matches!(result.outcome, Outcome::Student(ref s) if s.id().value() == "E1234567"));
}

#[test]
fn test_apply_leaves_input_roster_untouched() {
    let roster: Roster = create_test_roster();
    let before: Roster = roster.clone();

    let result: TransitionResult = apply(
        &roster,
        Command::RemoveStudent {
            student_id: student_id("E1234567"),
        },
    )
    .unwrap();

    assert_eq!(roster, before);
    assert_eq!(result.new_roster.students().len(), 2);
}

#[test]
fn test_rejected_command_returns_error() {
    let roster: Roster = create_test_roster();

    let result: Result<TransitionResult, CoreError> = apply(
        &roster,
        Command::CreateGroup {
            group_id: group_id("T01"),
        },
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateGroup(
            String::from("T01")
        )))
    );
}

#[test]
fn test_edit_command_reports_edited_student() {
    let roster: Roster = create_test_roster();
    let edit: StudentEdit = StudentEdit {
        phone: FieldChange::Set(Phone::new("61234567").unwrap()),
        ..StudentEdit::default()
    };

    let result: TransitionResult = apply(
        &roster,
        Command::EditStudent {
            student_id: student_id("E7654321"),
            edit,
        },
    )
    .unwrap();

    let Outcome::Student(edited) = result.outcome else {
        panic!("expected a student outcome");
    };
    assert_eq!(edited.phone().unwrap().value(), "61234567");
    assert_eq!(
        result.new_roster.student(&student_id("E7654321")),
        Some(&edited)
    );
}

#[test]
fn test_batch_commands_report_every_student() {
    let roster: Roster = create_test_roster();

    let result: TransitionResult = apply(
        &roster,
        Command::AddHomework {
            target: StudentSelector::All,
            assignment: AssignmentId::new(3).unwrap(),
        },
    )
    .unwrap();

    let Outcome::Students(updated) = result.outcome else {
        panic!("expected a students outcome");
    };
    assert_eq!(updated.len(), 3);
}

#[test]
fn test_mark_student_attendance_command() {
    let roster: Roster = create_test_roster();
    let week: Week = Week::new(13).unwrap();

    let result: TransitionResult = apply(
        &roster,
        Command::MarkStudentAttendance {
            student_id: student_id("E1111111"),
            week,
            status: AttendanceStatus::Absent,
        },
    )
    .unwrap();

    let marked: &Student = result.new_roster.student(&student_id("E1111111")).unwrap();
    assert_eq!(
        marked.attendance().attendance_for(week),
        Some(AttendanceStatus::Absent)
    );
}

#[test]
fn test_book_and_cancel_commands_report_consultation() {
    let roster: Roster = create_test_roster();
    let from: PrimitiveDateTime = datetime!(2025-10-10 14:00);
    let range: TimeRange = TimeRange::new(from, datetime!(2025-10-10 16:00)).unwrap();

    let booked: TransitionResult = apply(
        &roster,
        Command::BookConsultation {
            student_id: student_id("E1234567"),
            range,
        },
    )
    .unwrap();
    assert!(matches!(booked.outcome, Outcome::Consultation(ref c) if c.range() == &range));

    let cancelled: TransitionResult = apply(
        &booked.new_roster,
        Command::CancelConsultation {
            student_id: student_id("E1234567"),
        },
    )
    .unwrap();
    assert!(cancelled.new_roster.consultations().is_empty());
    assert_eq!(
        range,
        create_test_range("2025-10-10 14:00", "2025-10-10 16:00")
    );
}

#[test]
fn test_reassign_and_remove_group_commands() {
    let roster: Roster = create_test_roster();

    let moved: TransitionResult = apply(
        &roster,
        Command::ReassignGroup {
            student_id: student_id("E1111111"),
            group_id: group_id("T01"),
        },
    )
    .unwrap();
    let removed: TransitionResult = apply(
        &moved.new_roster,
        Command::RemoveGroup {
            group_id: group_id("T02"),
        },
    )
    .unwrap();

    assert!(matches!(removed.outcome, Outcome::Group(ref g) if g.id().value() == "T02"));
    assert_eq!(removed.new_roster.groups().len(), 1);
    removed.new_roster.check_integrity().unwrap();
}

#[test]
fn test_command_names() {
    assert_eq!(
        Command::CancelConsultation {
            student_id: student_id("E1234567")
        }
        .name(),
        "CancelConsultation"
    );
    assert_eq!(
        Command::RemoveHomework {
            target: StudentSelector::All,
            assignment: AssignmentId::new(1).unwrap(),
        }
        .name(),
        "RemoveHomework"
    );
}
