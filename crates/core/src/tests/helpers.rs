// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Roster;
use ta_roster_domain::{GroupId, Name, Student, StudentId, TelegramHandle, TimeRange};

pub fn student_id(id: &str) -> StudentId {
    StudentId::new(id).unwrap()
}

pub fn group_id(id: &str) -> GroupId {
    GroupId::new(id).unwrap()
}

pub fn create_test_student(id: &str, group: &str) -> Student {
    Student::new(
        student_id(id),
        Name::new("Alice Tan").unwrap(),
        TelegramHandle::new("@alice_t").unwrap(),
        group_id(group),
    )
}

pub fn create_named_student(id: &str, name: &str, group: &str) -> Student {
    create_test_student(id, group).with_name(Name::new(name).unwrap())
}

pub fn create_test_range(from: &str, to: &str) -> TimeRange {
    TimeRange::parse(from, to).unwrap()
}

/// A roster with group T01 holding E1234567 and E7654321, and group T02 holding E1111111.
pub fn create_test_roster() -> Roster {
    let mut roster: Roster = Roster::new();
    roster
        .add_student(create_named_student("E1234567", "Alice Tan", "T01"))
        .unwrap();
    roster
        .add_student(create_named_student("E7654321", "Bob Lim", "T01"))
        .unwrap();
    roster
        .add_student(create_named_student("E1111111", "Chen Wei", "T02"))
        .unwrap();
    roster
}
