// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ta_roster_domain::{
    AssignmentId, AttendanceStatus, Email, GroupId, HomeworkStatus, Name, Phone, Student,
    StudentId, TelegramHandle, TimeRange, Week,
};

/// Chooses which students a homework command applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentSelector {
    /// One student.
    One(StudentId),
    /// Every student on the roster.
    All,
}

/// A change to an optional contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange<T> {
    /// Leave the field as it is.
    Keep,
    /// Replace the field's value.
    Set(T),
    /// Remove the field's value.
    Clear,
}

impl<T> Default for FieldChange<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T: Clone> FieldChange<T> {
    /// Resolves the change against the current value.
    #[must_use]
    pub fn resolve(&self, current: Option<&T>) -> Option<T> {
        match self {
            Self::Keep => current.cloned(),
            Self::Set(value) => Some(value.clone()),
            Self::Clear => None,
        }
    }

    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

/// Field-level changes to a student's name or contact details.
///
/// `None` (or [`FieldChange::Keep`]) leaves a field unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentEdit {
    pub name: Option<Name>,
    pub phone: FieldChange<Phone>,
    pub email: FieldChange<Email>,
    pub telegram: Option<TelegramHandle>,
}

impl StudentEdit {
    /// Returns whether the edit changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_keep()
            && self.email.is_keep()
            && self.telegram.is_none()
    }

    /// Applies the edit to a copy of `student`.
    #[must_use]
    pub fn apply_to(&self, student: &Student) -> Student {
        let mut edited: Student = student
            .with_phone(self.phone.resolve(student.phone()))
            .with_email(self.email.resolve(student.email()));
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(telegram) = &self.telegram {
            edited = edited.with_telegram(telegram.clone());
        }
        edited
    }
}

/// A command represents user intent as data only.
///
/// Commands carry validated values; parsing text into them is the caller's job.
/// Commands are the only way to request roster changes through [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new student, creating their group if needed.
    AddStudent {
        /// The new student's record.
        student: Student,
    },
    /// Change a student's name or contact details.
    EditStudent {
        /// The student to edit.
        student_id: StudentId,
        /// The changes to apply.
        edit: StudentEdit,
    },
    /// Remove a student and any consultation they hold.
    RemoveStudent {
        /// The student to remove.
        student_id: StudentId,
    },
    /// Move a student to another group, creating it if needed.
    ReassignGroup {
        /// The student to move.
        student_id: StudentId,
        /// The destination group.
        group_id: GroupId,
    },
    /// Create an empty group.
    CreateGroup {
        /// The new group's id.
        group_id: GroupId,
    },
    /// Remove an empty group.
    RemoveGroup {
        /// The group to remove.
        group_id: GroupId,
    },
    /// Mark attendance for every member of a group.
    MarkGroupAttendance {
        /// The group.
        group_id: GroupId,
        /// The teaching week.
        week: Week,
        /// The status to record.
        status: AttendanceStatus,
    },
    /// Mark attendance for one student.
    MarkStudentAttendance {
        /// The student.
        student_id: StudentId,
        /// The teaching week.
        week: Week,
        /// The status to record.
        status: AttendanceStatus,
    },
    /// Start tracking an assignment as incomplete.
    AddHomework {
        /// The students to update.
        target: StudentSelector,
        /// The assignment.
        assignment: AssignmentId,
    },
    /// Record an assignment's status.
    MarkHomework {
        /// The students to update.
        target: StudentSelector,
        /// The assignment.
        assignment: AssignmentId,
        /// The status to record.
        status: HomeworkStatus,
    },
    /// Stop tracking an assignment.
    RemoveHomework {
        /// The students to update.
        target: StudentSelector,
        /// The assignment.
        assignment: AssignmentId,
    },
    /// Book a consultation window for a student.
    BookConsultation {
        /// The student.
        student_id: StudentId,
        /// The requested window.
        range: TimeRange,
    },
    /// Cancel a student's consultation.
    CancelConsultation {
        /// The student.
        student_id: StudentId,
    },
}

impl Command {
    /// Returns the command's name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddStudent { .. } => "AddStudent",
            Self::EditStudent { .. } => "EditStudent",
            Self::RemoveStudent { .. } => "RemoveStudent",
            Self::ReassignGroup { .. } => "ReassignGroup",
            Self::CreateGroup { .. } => "CreateGroup",
            Self::RemoveGroup { .. } => "RemoveGroup",
            Self::MarkGroupAttendance { .. } => "MarkGroupAttendance",
            Self::MarkStudentAttendance { .. } => "MarkStudentAttendance",
            Self::AddHomework { .. } => "AddHomework",
            Self::MarkHomework { .. } => "MarkHomework",
            Self::RemoveHomework { .. } => "RemoveHomework",
            Self::BookConsultation { .. } => "BookConsultation",
            Self::CancelConsultation { .. } => "CancelConsultation",
        }
    }
}
