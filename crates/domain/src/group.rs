// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::student::Student;
use crate::types::{GroupId, StudentId};

/// A tutorial or lab group.
///
/// The group keeps its own copy of each member's record so group-scoped
/// queries need no lookup into the roster. The roster is responsible for
/// keeping these copies identical to the canonical records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The group identifier.
    id: GroupId,
    /// Member records, in insertion order. No two share a `StudentId`.
    members: Vec<Student>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub const fn new(id: GroupId) -> Self {
        Self {
            id,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &GroupId {
        &self.id
    }

    /// Returns the member records.
    #[must_use]
    pub fn members(&self) -> &[Student] {
        &self.members
    }

    /// Returns the member with `student_id`, if present.
    #[must_use]
    pub fn member(&self, student_id: &StudentId) -> Option<&Student> {
        self.members.iter().find(|s| s.id() == student_id)
    }

    #[must_use]
    pub fn has_member(&self, student_id: &StudentId) -> bool {
        self.member(student_id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Adds a member record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateStudent` if a member with the same id exists.
    pub fn add_member(&mut self, student: Student) -> Result<(), DomainError> {
        if self.has_member(student.id()) {
            return Err(DomainError::DuplicateStudent(
                student.id().value().to_owned(),
            ));
        }
        self.members.push(student);
        Ok(())
    }

    /// Replaces the member that shares `student`'s id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StudentNotFound` if no member has that id.
    pub fn replace_member(&mut self, student: Student) -> Result<(), DomainError> {
        let slot: &mut Student = self
            .members
            .iter_mut()
            .find(|s| s.is_same_student(&student))
            .ok_or_else(|| DomainError::StudentNotFound(student.id().value().to_owned()))?;
        *slot = student;
        Ok(())
    }

    /// Removes and returns the member with `student_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StudentNotFound` if no member has that id.
    pub fn remove_member(&mut self, student_id: &StudentId) -> Result<Student, DomainError> {
        let index: usize = self
            .members
            .iter()
            .position(|s| s.id() == student_id)
            .ok_or_else(|| DomainError::StudentNotFound(student_id.value().to_owned()))?;
        Ok(self.members.remove(index))
    }
}
