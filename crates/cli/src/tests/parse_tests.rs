// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cli::{Action, Args, Report};
use clap::Parser;
use std::path::PathBuf;
use ta_roster::{Command, FieldChange, StudentSelector};
use ta_roster_domain::{AssignmentId, AttendanceStatus, GroupId, HomeworkStatus, StudentId, Week};

fn parse(args: &[&str]) -> Action {
    let mut argv: Vec<&str> = vec!["ta-roster"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv)
        .unwrap()
        .command
        .into_action()
        .unwrap()
}

#[test]
fn test_data_path_defaults() {
    let args: Args = Args::try_parse_from(["ta-roster", "list-groups"]).unwrap();

    assert_eq!(args.data, PathBuf::from("data/roster.json"));
}

#[test]
fn test_data_path_flag_after_subcommand() {
    let args: Args =
        Args::try_parse_from(["ta-roster", "list-groups", "--data", "/tmp/r.json"]).unwrap();

    assert_eq!(args.data, PathBuf::from("/tmp/r.json"));
}

#[test]
fn test_add_student_normalizes_identifiers() {
    let action: Action = parse(&[
        "add-student",
        "--id",
        "e1234567",
        "--name",
        "Alice Tan",
        "--telegram",
        "@alice_t",
        "--group",
        "t01",
        "--phone",
        "91234567",
    ]);

    let Action::Mutate(Command::AddStudent { student }) = action else {
        panic!("expected an add-student command");
    };
    assert_eq!(student.id().value(), "E1234567");
    assert_eq!(student.group_id().value(), "T01");
    assert_eq!(student.phone().unwrap().value(), "91234567");
    assert!(student.email().is_none());
}

#[test]
fn test_invalid_values_are_rejected_while_parsing() {
    assert!(Args::try_parse_from(["ta-roster", "remove-student", "A1234567"]).is_err());
    assert!(Args::try_parse_from(["ta-roster", "create-group", "X01"]).is_err());
    assert!(
        Args::try_parse_from([
            "ta-roster",
            "mark-attendance",
            "E1234567",
            "--week",
            "1",
            "--status",
            "present",
        ])
        .is_err()
    );
    assert!(
        Args::try_parse_from([
            "ta-roster",
            "mark-homework",
            "--all",
            "--assignment",
            "1",
            "--status",
            "done",
        ])
        .is_err()
    );
}

#[test]
fn test_edit_student_maps_clear_flags() {
    let action: Action = parse(&[
        "edit-student",
        "E1234567",
        "--clear-phone",
        "--email",
        "a@b.co",
    ]);

    let Action::Mutate(Command::EditStudent { student_id, edit }) = action else {
        panic!("expected an edit-student command");
    };
    assert_eq!(student_id.value(), "E1234567");
    assert_eq!(edit.phone, FieldChange::Clear);
    assert!(matches!(edit.email, FieldChange::Set(ref e) if e.value() == "a@b.co"));
    assert!(edit.name.is_none());
}

#[test]
fn test_edit_student_rejects_set_and_clear_together() {
    let result = Args::try_parse_from([
        "ta-roster",
        "edit-student",
        "E1234567",
        "--phone",
        "999",
        "--clear-phone",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_homework_target_selection() {
    let all: Action = parse(&["add-homework", "--all", "--assignment", "2"]);
    assert_eq!(
        all,
        Action::Mutate(Command::AddHomework {
            target: StudentSelector::All,
            assignment: AssignmentId::new(2).unwrap(),
        })
    );

    let one: Action = parse(&[
        "mark-homework",
        "--student",
        "E1234567",
        "--assignment",
        "2",
        "--status",
        "LATE",
    ]);
    assert_eq!(
        one,
        Action::Mutate(Command::MarkHomework {
            target: StudentSelector::One(StudentId::new("E1234567").unwrap()),
            assignment: AssignmentId::new(2).unwrap(),
            status: HomeworkStatus::Late,
        })
    );
}

#[test]
fn test_homework_target_is_required_and_exclusive() {
    assert!(Args::try_parse_from(["ta-roster", "add-homework", "--assignment", "1"]).is_err());
    assert!(
        Args::try_parse_from([
            "ta-roster",
            "add-homework",
            "--all",
            "--student",
            "E1234567",
            "--assignment",
            "1",
        ])
        .is_err()
    );
}

#[test]
fn test_group_attendance_accepts_late_alias() {
    let action: Action = parse(&[
        "mark-group-attendance",
        "T01",
        "--week",
        "13",
        "--status",
        "late",
    ]);

    assert!(matches!(
        action,
        Action::Mutate(Command::MarkGroupAttendance { week, status: AttendanceStatus::Excused, .. })
            if week == Week::new(13).unwrap()
    ));
}

#[test]
fn test_book_consultation_parses_window() {
    let action: Action = parse(&[
        "book",
        "E1234567",
        "--from",
        "2025-10-10 14:00",
        "--to",
        "2025-10-10 16:00",
    ]);

    let Action::Mutate(Command::BookConsultation { range, .. }) = action else {
        panic!("expected a book-consultation command");
    };
    assert_eq!(range.to().hour(), 16);
}

#[test]
fn test_book_consultation_rejects_reversed_window() {
    let args: Args = Args::try_parse_from([
        "ta-roster",
        "book",
        "E1234567",
        "--from",
        "2025-10-10 16:00",
        "--to",
        "2025-10-10 14:00",
    ])
    .unwrap();

    assert!(args.command.into_action().is_err());
}

#[test]
fn test_list_commands_are_reports() {
    assert_eq!(parse(&["list-groups"]), Action::Report(Report::Groups));
    assert_eq!(
        parse(&["ls", "--group", "B02"]),
        Action::Report(Report::Students {
            group: Some(GroupId::new("B02").unwrap()),
        })
    );
}
