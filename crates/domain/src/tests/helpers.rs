// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Consultation, GroupId, Name, Student, StudentId, TelegramHandle, TimeRange};

pub fn create_test_student(id: &str, group: &str) -> Student {
    Student::new(
        StudentId::new(id).unwrap(),
        Name::new("Alice Tan").unwrap(),
        TelegramHandle::new("@alice_t").unwrap(),
        GroupId::new(group).unwrap(),
    )
}

pub fn create_test_range(from: &str, to: &str) -> TimeRange {
    TimeRange::parse(from, to).unwrap()
}

pub fn create_test_consultation(id: &str, from: &str, to: &str) -> Consultation {
    Consultation::new(StudentId::new(id).unwrap(), create_test_range(from, to))
}
