// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::HomeworkStatus;
use crate::types::StudentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents a homework assignment number.
///
/// Assignments are numbered 1 through [`AssignmentId::MAX_ASSIGNMENTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct AssignmentId {
    /// The assignment number (1-3).
    number: u8,
}

impl AssignmentId {
    /// Highest assignment number tracked per student.
    pub const MAX_ASSIGNMENTS: u8 = 3;

    /// Creates a new `AssignmentId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAssignment` if the number is not in `1..=3`.
    pub fn new(number: i64) -> Result<Self, DomainError> {
        if !Self::is_valid(number) {
            return Err(DomainError::InvalidAssignment { assignment: number });
        }
        u8::try_from(number)
            .map(|number| Self { number })
            .map_err(|_| DomainError::InvalidAssignment { assignment: number })
    }

    /// Returns whether `number` is a tracked assignment number.
    #[must_use]
    pub fn is_valid(number: i64) -> bool {
        (1..=i64::from(Self::MAX_ASSIGNMENTS)).contains(&number)
    }

    /// Returns the assignment number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }
}

impl TryFrom<i64> for AssignmentId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssignmentId> for u8 {
    fn from(id: AssignmentId) -> Self {
        id.number
    }
}

impl std::str::FromStr for AssignmentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidNumber {
                field: "assignment",
                input: s.to_owned(),
            })?;
        Self::new(number)
    }
}

impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Per-student mapping from assignment number to completion status.
///
/// Trackers are values: every operation returns a new tracker and leaves
/// the receiver untouched. Errors carry the owning student's id so they can
/// be surfaced directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HomeworkTracker {
    statuses: BTreeMap<AssignmentId, HomeworkStatus>,
}

impl HomeworkTracker {
    /// Label reported for an assignment that has not been added.
    pub const NOT_MARKED: &'static str = "not marked";

    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statuses: BTreeMap::new(),
        }
    }

    /// Returns a tracker with `assignment` added as incomplete.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateAssignment` if the assignment is already tracked.
    pub fn add_assignment(
        &self,
        owner: &StudentId,
        assignment: AssignmentId,
    ) -> Result<Self, DomainError> {
        if self.has_assignment(assignment) {
            return Err(DomainError::DuplicateAssignment {
                student_id: owner.value().to_owned(),
                assignment: assignment.number(),
            });
        }
        let mut statuses = self.statuses.clone();
        statuses.insert(assignment, HomeworkStatus::Incomplete);
        Ok(Self { statuses })
    }

    /// Returns a tracker with `assignment` set to `status`.
    ///
    /// Status text is parsed by [`HomeworkStatus`]'s `FromStr`, which is where
    /// `DomainError::InvalidStatus` originates.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentNotFound` if the assignment was never added.
    pub fn update_status(
        &self,
        owner: &StudentId,
        assignment: AssignmentId,
        status: HomeworkStatus,
    ) -> Result<Self, DomainError> {
        if !self.has_assignment(assignment) {
            return Err(Self::not_found(owner, assignment));
        }
        let mut statuses = self.statuses.clone();
        statuses.insert(assignment, status);
        Ok(Self { statuses })
    }

    /// Returns a tracker without `assignment`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentNotFound` if the assignment was never added.
    pub fn remove_assignment(
        &self,
        owner: &StudentId,
        assignment: AssignmentId,
    ) -> Result<Self, DomainError> {
        if !self.has_assignment(assignment) {
            return Err(Self::not_found(owner, assignment));
        }
        let mut statuses = self.statuses.clone();
        statuses.remove(&assignment);
        Ok(Self { statuses })
    }

    /// Returns whether the assignment is tracked.
    #[must_use]
    pub fn has_assignment(&self, assignment: AssignmentId) -> bool {
        self.statuses.contains_key(&assignment)
    }

    /// Returns the status of the assignment, if tracked.
    #[must_use]
    pub fn status_of(&self, assignment: AssignmentId) -> Option<HomeworkStatus> {
        self.statuses.get(&assignment).copied()
    }

    /// Returns the status label, or [`HomeworkTracker::NOT_MARKED`].
    #[must_use]
    pub fn status_label(&self, assignment: AssignmentId) -> &'static str {
        self.status_of(assignment)
            .map_or(Self::NOT_MARKED, |status| status.as_str())
    }

    /// Iterates over tracked assignments in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (AssignmentId, HomeworkStatus)> + '_ {
        self.statuses.iter().map(|(id, status)| (*id, *status))
    }

    /// Returns the number of tracked assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Returns whether no assignments are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    fn not_found(owner: &StudentId, assignment: AssignmentId) -> DomainError {
        DomainError::AssignmentNotFound {
            student_id: owner.value().to_owned(),
            assignment: assignment.number(),
        }
    }
}

impl FromIterator<(AssignmentId, HomeworkStatus)> for HomeworkTracker {
    fn from_iter<T: IntoIterator<Item = (AssignmentId, HomeworkStatus)>>(iter: T) -> Self {
        Self {
            statuses: iter.into_iter().collect(),
        }
    }
}
