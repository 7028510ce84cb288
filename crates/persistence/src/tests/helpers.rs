// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ta_roster::{Roster, StudentSelector};
use ta_roster_domain::{
    AssignmentId, AttendanceStatus, GroupId, HomeworkStatus, Name, Phone, Student, StudentId,
    TelegramHandle, TimeRange, Week,
};

pub fn student_id(id: &str) -> StudentId {
    StudentId::new(id).unwrap()
}

pub fn create_test_student(id: &str, name: &str, group: &str) -> Student {
    Student::new(
        student_id(id),
        Name::new(name).unwrap(),
        TelegramHandle::new("@tutee").unwrap(),
        GroupId::new(group).unwrap(),
    )
}

/// A roster exercising every stored field: contacts, homework, attendance,
/// an empty group and a booked consultation.
pub fn create_populated_roster() -> Roster {
    let mut roster: Roster = Roster::new();
    roster.create_group(GroupId::new("B02").unwrap()).unwrap();
    roster
        .add_student(
            create_test_student("E1234567", "Alice Tan", "T01")
                .with_phone(Some(Phone::new("91234567").unwrap())),
        )
        .unwrap();
    roster
        .add_student(create_test_student("E7654321", "Bob Lim", "T01"))
        .unwrap();
    roster
        .add_homework(&StudentSelector::All, AssignmentId::new(1).unwrap())
        .unwrap();
    roster
        .mark_homework(
            &StudentSelector::One(student_id("E1234567")),
            AssignmentId::new(1).unwrap(),
            HomeworkStatus::Complete,
        )
        .unwrap();
    roster
        .mark_attendance(
            &GroupId::new("T01").unwrap(),
            Week::new(2).unwrap(),
            AttendanceStatus::Present,
        )
        .unwrap();
    roster
        .book_consultation(
            &student_id("E7654321"),
            TimeRange::parse("2025-10-10 14:00", "2025-10-10 16:00").unwrap(),
        )
        .unwrap();
    roster
}
