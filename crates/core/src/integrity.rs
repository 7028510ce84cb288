// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::Roster;
use std::collections::HashSet;
use ta_roster_domain::{GroupId, Student, find_overlapping_pair, validate_ids_distinct};

impl Roster {
    /// Verifies that every view of the roster agrees with the canonical records.
    ///
    /// Checks, in order:
    /// - student ids and group ids are unique
    /// - every student's group exists and holds an identical copy of the record
    /// - every group member has a canonical record naming that group
    /// - embedded consultations and registry entries match one to one
    /// - no two booked consultations overlap
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IntegrityViolation` describing the first mismatch found.
    pub fn check_integrity(&self) -> Result<(), CoreError> {
        validate_ids_distinct(self.students.iter().map(Student::id))
            .map_err(|err| CoreError::IntegrityViolation(err.to_string()))?;

        let mut group_ids: HashSet<&GroupId> = HashSet::new();
        for group in &self.groups {
            if !group_ids.insert(group.id()) {
                return Err(CoreError::IntegrityViolation(format!(
                    "Group '{}' appears more than once",
                    group.id()
                )));
            }
        }

        for student in &self.students {
            let Some(group) = self.group(student.group_id()) else {
                return Err(CoreError::IntegrityViolation(format!(
                    "Student '{}' refers to missing group '{}'",
                    student.id(),
                    student.group_id()
                )));
            };
            if group.member(student.id()) != Some(student) {
                return Err(CoreError::IntegrityViolation(format!(
                    "Group '{}' does not hold the current record of student '{}'",
                    group.id(),
                    student.id()
                )));
            }
        }

        for group in &self.groups {
            validate_ids_distinct(group.members().iter().map(Student::id))
                .map_err(|err| CoreError::IntegrityViolation(err.to_string()))?;
            for member in group.members() {
                let belongs: bool = self
                    .student(member.id())
                    .is_some_and(|s| s.group_id() == group.id());
                if !belongs {
                    return Err(CoreError::IntegrityViolation(format!(
                        "Group '{}' lists student '{}' who is not assigned to it",
                        group.id(),
                        member.id()
                    )));
                }
            }
        }

        for student in &self.students {
            let entries: usize = self
                .consultations
                .iter()
                .filter(|c| c.student_id() == student.id())
                .count();
            let matches: bool = match student.consultation() {
                Some(embedded) => {
                    entries == 1 && self.consultation_for(student.id()) == Some(embedded)
                }
                None => entries == 0,
            };
            if !matches {
                return Err(CoreError::IntegrityViolation(format!(
                    "Consultation of student '{}' does not match the registry",
                    student.id()
                )));
            }
        }

        if let Some(orphan) = self
            .consultations
            .iter()
            .find(|c| !self.has_student(c.student_id()))
        {
            return Err(CoreError::IntegrityViolation(format!(
                "Consultation {orphan} belongs to no student"
            )));
        }

        if let Some((a, b)) = find_overlapping_pair(&self.consultations) {
            return Err(CoreError::IntegrityViolation(format!(
                "Consultations {a} and {b} overlap"
            )));
        }

        Ok(())
    }
}
