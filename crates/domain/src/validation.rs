// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::consultation::Consultation;
use crate::error::DomainError;
use crate::group::Group;
use crate::student::Student;
use crate::types::{GroupId, StudentId};
use std::collections::HashSet;

/// Validates that no existing student shares `new_id`.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Errors
///
/// Returns `DomainError::DuplicateStudent` if the id is already in use.
pub fn validate_student_unique(
    new_id: &StudentId,
    existing_students: &[Student],
) -> Result<(), DomainError> {
    if existing_students.iter().any(|s| s.id() == new_id) {
        return Err(DomainError::DuplicateStudent(new_id.value().to_owned()));
    }
    Ok(())
}

/// Validates that no existing group shares `new_id`.
///
/// # Errors
///
/// Returns `DomainError::DuplicateGroup` if the id is already in use.
pub fn validate_group_unique(
    new_id: &GroupId,
    existing_groups: &[Group],
) -> Result<(), DomainError> {
    if existing_groups.iter().any(|g| g.id() == new_id) {
        return Err(DomainError::DuplicateGroup(new_id.value().to_owned()));
    }
    Ok(())
}

/// Validates that `candidate` can join the booked consultations.
///
/// Every booked consultation is compared against the candidate, except the
/// candidate itself. An identical booking is reported as a duplicate rather
/// than as an overlap.
///
/// # Errors
///
/// Returns an error if:
/// - An identical consultation is already booked
/// - The candidate's window overlaps any other booking
pub fn validate_no_overlap(
    candidate: &Consultation,
    booked: &[Consultation],
) -> Result<(), DomainError> {
    if booked.iter().any(|c| c.is_duplicate_of(candidate)) {
        return Err(DomainError::DuplicateConsultation {
            student_id: candidate.student_id().value().to_owned(),
        });
    }

    if let Some(conflict) = booked.iter().find(|c| c.overlaps(candidate)) {
        return Err(DomainError::OverlapConflict {
            student_id: candidate.student_id().value().to_owned(),
            conflicting_student_id: conflict.student_id().value().to_owned(),
        });
    }

    Ok(())
}

/// Finds the first pair of booked consultations whose windows overlap.
///
/// Each consultation is compared only against the others, never itself.
#[must_use]
pub fn find_overlapping_pair(booked: &[Consultation]) -> Option<(&Consultation, &Consultation)> {
    booked.iter().enumerate().find_map(|(i, a)| {
        booked
            .iter()
            .skip(i + 1)
            .find(|b| a.overlaps(b))
            .map(|b| (a, b))
    })
}

/// Validates that every id in `ids` appears once.
///
/// # Errors
///
/// Returns `DomainError::DuplicateStudent` naming the first repeated id.
pub fn validate_ids_distinct<'a>(
    ids: impl IntoIterator<Item = &'a StudentId>,
) -> Result<(), DomainError> {
    let mut seen: HashSet<&StudentId> = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::DuplicateStudent(id.value().to_owned()));
        }
    }
    Ok(())
}
