// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::attendance::{AttendanceSheet, Week};
use crate::consultation::Consultation;
use crate::error::DomainError;
use crate::homework::{AssignmentId, HomeworkTracker};
use crate::status::{AttendanceStatus, HomeworkStatus};
use crate::types::{Email, GroupId, Name, Phone, StudentId, TelegramHandle};
use serde::{Deserialize, Serialize};

/// Represents a student on the roster.
///
/// A student record is a value. Every edit produces a new record via one of
/// the `with_*` methods; the roster then swaps the old record for the new
/// one in every view that holds it.
///
/// Equality compares every field. Use [`Student::is_same_student`] for
/// identity comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// The entity key (immutable).
    id: StudentId,
    /// The student's full name.
    name: Name,
    /// Optional phone number.
    phone: Option<Phone>,
    /// Optional email address.
    email: Option<Email>,
    /// Messaging handle.
    telegram: TelegramHandle,
    /// The group this student belongs to.
    group_id: GroupId,
    /// Homework completion per assignment.
    homework: HomeworkTracker,
    /// Attendance per teaching week.
    attendance: AttendanceSheet,
    /// The student's booked consultation, if any.
    consultation: Option<Consultation>,
}

impl Student {
    /// Creates a new `Student` with no contact details, homework, attendance
    /// or consultation.
    ///
    /// # Arguments
    ///
    /// * `id` - The student's identifier
    /// * `name` - The student's full name
    /// * `telegram` - The student's messaging handle
    /// * `group_id` - The group the student belongs to
    #[must_use]
    pub const fn new(
        id: StudentId,
        name: Name,
        telegram: TelegramHandle,
        group_id: GroupId,
    ) -> Self {
        Self {
            id,
            name,
            phone: None,
            email: None,
            telegram,
            group_id,
            homework: HomeworkTracker::new(),
            attendance: AttendanceSheet::new(),
            consultation: None,
        }
    }

    /// Returns whether `other` denotes the same student (same id).
    #[must_use]
    pub fn is_same_student(&self, other: &Self) -> bool {
        self.id == other.id
    }

    #[must_use]
    pub const fn id(&self) -> &StudentId {
        &self.id
    }

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub const fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    #[must_use]
    pub const fn telegram(&self) -> &TelegramHandle {
        &self.telegram
    }

    #[must_use]
    pub const fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    #[must_use]
    pub const fn homework(&self) -> &HomeworkTracker {
        &self.homework
    }

    #[must_use]
    pub const fn attendance(&self) -> &AttendanceSheet {
        &self.attendance
    }

    #[must_use]
    pub const fn consultation(&self) -> Option<&Consultation> {
        self.consultation.as_ref()
    }

    #[must_use]
    pub fn with_name(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_phone(&self, phone: Option<Phone>) -> Self {
        Self {
            phone,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_email(&self, email: Option<Email>) -> Self {
        Self {
            email,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_telegram(&self, telegram: TelegramHandle) -> Self {
        Self {
            telegram,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_group_id(&self, group_id: GroupId) -> Self {
        Self {
            group_id,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_homework(&self, homework: HomeworkTracker) -> Self {
        Self {
            homework,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_attendance(&self, attendance: AttendanceSheet) -> Self {
        Self {
            attendance,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_consultation(&self, consultation: Option<Consultation>) -> Self {
        Self {
            consultation,
            ..self.clone()
        }
    }

    /// Returns a copy with `assignment` added as incomplete.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateAssignment` if the assignment is already tracked.
    pub fn with_added_homework(&self, assignment: AssignmentId) -> Result<Self, DomainError> {
        let homework: HomeworkTracker = self.homework.add_assignment(&self.id, assignment)?;
        Ok(self.with_homework(homework))
    }

    /// Returns a copy with `assignment` set to `status`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentNotFound` if the assignment was never added.
    pub fn with_updated_homework(
        &self,
        assignment: AssignmentId,
        status: HomeworkStatus,
    ) -> Result<Self, DomainError> {
        let homework: HomeworkTracker = self.homework.update_status(&self.id, assignment, status)?;
        Ok(self.with_homework(homework))
    }

    /// Returns a copy without `assignment`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentNotFound` if the assignment was never added.
    pub fn with_removed_homework(&self, assignment: AssignmentId) -> Result<Self, DomainError> {
        let homework: HomeworkTracker = self.homework.remove_assignment(&self.id, assignment)?;
        Ok(self.with_homework(homework))
    }

    /// Returns a copy with `week` marked as `status`.
    #[must_use]
    pub fn with_marked_attendance(&self, week: Week, status: AttendanceStatus) -> Self {
        self.with_attendance(self.attendance.mark_week(week, status))
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}); Telegram: {}; Group: {}",
            self.name, self.id, self.telegram, self.group_id
        )?;
        if let Some(phone) = &self.phone {
            write!(f, "; Phone: {phone}")?;
        }
        if let Some(email) = &self.email {
            write!(f, "; Email: {email}")?;
        }
        Ok(())
    }
}
