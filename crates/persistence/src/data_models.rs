// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ta_roster::{CoreError, Roster};
use ta_roster_domain::{Consultation, DomainError, Group, GroupId, Student, StudentId};

/// Serializable representation of a group: its id and the ids of its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupData {
    pub id: GroupId,
    pub members: Vec<StudentId>,
}

impl From<&Group> for GroupData {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id().clone(),
            members: group.members().iter().map(|s| s.id().clone()).collect(),
        }
    }
}

/// Serializable representation of the full roster.
///
/// Only the canonical collections are stored. Group member records and
/// embedded consultations are derived again on load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RosterData {
    pub students: Vec<Student>,
    pub groups: Vec<GroupData>,
    pub consultations: Vec<Consultation>,
}

impl From<&Roster> for RosterData {
    fn from(roster: &Roster) -> Self {
        Self {
            students: roster.students().to_vec(),
            groups: roster.groups().iter().map(GroupData::from).collect(),
            consultations: roster.consultations().to_vec(),
        }
    }
}

impl RosterData {
    /// Rebuilds a roster through its public operations.
    ///
    /// Groups are created first, then students are added and finally
    /// consultations are booked. Group membership is re-derived from each
    /// student's group, so member order follows student order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any roster operation is rejected
    /// - A stored group lists members that do not match its students
    /// - A student's embedded consultation differs from the registry
    /// - The rebuilt roster fails its integrity check
    pub fn into_roster(self) -> Result<Roster, CoreError> {
        let mut roster: Roster = Roster::new();

        for group in &self.groups {
            roster.create_group(group.id.clone())?;
        }
        for student in &self.students {
            roster.add_student(student.clone())?;
        }
        for consultation in &self.consultations {
            roster.book_consultation(consultation.student_id(), *consultation.range())?;
        }

        for student in &self.students {
            if student.consultation() != roster.consultation_for(student.id()) {
                return Err(CoreError::IntegrityViolation(format!(
                    "Student '{}' holds a consultation that does not match the registry",
                    student.id()
                )));
            }
        }

        for group in &self.groups {
            if let Some(missing) = group.members.iter().find(|id| !roster.has_student(id)) {
                return Err(CoreError::DomainViolation(DomainError::StudentNotFound(
                    missing.value().to_owned(),
                )));
            }
            let stored: BTreeSet<&StudentId> = group.members.iter().collect();
            let rebuilt: BTreeSet<&StudentId> = roster
                .students_in_group(&group.id)?
                .iter()
                .map(Student::id)
                .collect();
            if stored != rebuilt {
                return Err(CoreError::IntegrityViolation(format!(
                    "Group '{}' lists members that do not match its students",
                    group.id
                )));
            }
        }

        roster.check_integrity()?;
        Ok(roster)
    }
}
