// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use ta_roster_domain::{Consultation, DomainError, Group, GroupId, Student, StudentId};

/// The complete roster: students, groups and booked consultations.
///
/// The roster owns three canonical collections:
/// - students, unique by `StudentId`
/// - groups, unique by `GroupId`, each holding copies of its members
/// - consultations, unique by `(StudentId, TimeRange)`
///
/// Group membership and each student's embedded consultation are derived
/// views. They are only ever changed by the roster's own operations, which
/// update every view before returning. A failed operation leaves the roster
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    pub(crate) students: Vec<Student>,
    pub(crate) groups: Vec<Group>,
    pub(crate) consultations: Vec<Consultation>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
            groups: Vec::new(),
            consultations: Vec::new(),
        }
    }

    /// All students, in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All groups, in creation order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// All booked consultations, in booking order.
    #[must_use]
    pub fn consultations(&self) -> &[Consultation] {
        &self.consultations
    }

    #[must_use]
    pub fn student(&self, student_id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == student_id)
    }

    #[must_use]
    pub fn has_student(&self, student_id: &StudentId) -> bool {
        self.student(student_id).is_some()
    }

    #[must_use]
    pub fn group(&self, group_id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == group_id)
    }

    #[must_use]
    pub fn has_group(&self, group_id: &GroupId) -> bool {
        self.group(group_id).is_some()
    }

    /// Returns the registry entry for `student_id`, if the student holds one.
    #[must_use]
    pub fn consultation_for(&self, student_id: &StudentId) -> Option<&Consultation> {
        self.consultations
            .iter()
            .find(|c| c.student_id() == student_id)
    }

    /// Summarises the roster's size for logging.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "students={},groups={},consultations={}",
            self.students.len(),
            self.groups.len(),
            self.consultations.len()
        )
    }

    pub(crate) fn require_student(&self, student_id: &StudentId) -> Result<&Student, CoreError> {
        self.student(student_id).ok_or_else(|| {
            CoreError::DomainViolation(DomainError::StudentNotFound(student_id.value().to_owned()))
        })
    }

    pub(crate) fn require_group(&self, group_id: &GroupId) -> Result<&Group, CoreError> {
        self.group(group_id).ok_or_else(|| {
            CoreError::DomainViolation(DomainError::GroupNotFound(group_id.value().to_owned()))
        })
    }

    pub(crate) fn group_mut(&mut self, group_id: &GroupId) -> Result<&mut Group, CoreError> {
        self.groups
            .iter_mut()
            .find(|g| g.id() == group_id)
            .ok_or_else(|| {
                CoreError::DomainViolation(DomainError::GroupNotFound(group_id.value().to_owned()))
            })
    }
}

/// What a successful command touched, for display by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single student record (added, edited, moved or removed).
    Student(Student),
    /// Every student record changed by a batch operation.
    Students(Vec<Student>),
    /// A group (created or removed).
    Group(Group),
    /// A consultation (booked or cancelled).
    Consultation(Consultation),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new roster after the transition.
    pub new_roster: Roster,
    /// The records affected by the transition.
    pub outcome: Outcome,
}
