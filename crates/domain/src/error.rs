// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Student identifier does not match the institutional pattern.
    InvalidStudentId(String),
    /// Group identifier does not match the `T`/`B` pattern.
    InvalidGroupId(String),
    /// Student name is empty or contains disallowed characters.
    InvalidName(String),
    /// Phone number is malformed.
    InvalidPhone(String),
    /// Email address is malformed.
    InvalidEmail(String),
    /// Messaging handle is malformed.
    InvalidTelegram(String),
    /// Homework status text could not be parsed.
    InvalidStatus(String),
    /// Attendance status text could not be parsed.
    InvalidAttendanceStatus(String),
    /// A consultation window does not end after it starts.
    InvalidTimeRange {
        /// The requested start.
        from: time::PrimitiveDateTime,
        /// The requested end.
        to: time::PrimitiveDateTime,
    },
    /// Failed to parse a date-time from text.
    InvalidDateTime {
        /// The invalid input.
        input: String,
        /// The parser's message.
        error: String,
    },
    /// Assignment number outside the tracked range.
    InvalidAssignment {
        /// The rejected assignment number.
        assignment: i64,
    },
    /// Week number outside the teaching weeks.
    InvalidWeek {
        /// The rejected week number.
        week: i64,
    },
    /// Text given for a number could not be parsed.
    InvalidNumber {
        /// What the number identifies.
        field: &'static str,
        /// The rejected text.
        input: String,
    },
    /// A student with this id already exists.
    DuplicateStudent(String),
    /// A group with this id already exists.
    DuplicateGroup(String),
    /// The student already has this assignment on record.
    DuplicateAssignment {
        /// The student's id.
        student_id: String,
        /// The assignment number.
        assignment: u8,
    },
    /// An identical consultation is already booked.
    DuplicateConsultation {
        /// The student's id.
        student_id: String,
    },
    /// The student does not exist.
    StudentNotFound(String),
    /// The group does not exist.
    GroupNotFound(String),
    /// The student has no record of this assignment.
    AssignmentNotFound {
        /// The student's id.
        student_id: String,
        /// The assignment number.
        assignment: u8,
    },
    /// The student holds no consultation.
    NoConsultation(String),
    /// The requested window overlaps a booked consultation.
    OverlapConflict {
        /// The student that requested the booking.
        student_id: String,
        /// The owner of the conflicting booking.
        conflicting_student_id: String,
    },
    /// The student already holds a consultation.
    StudentAlreadyBooked(String),
    /// A replacement record carries a different identity than its target.
    StudentIdMismatch {
        /// The id of the record being replaced.
        expected: String,
        /// The id carried by the replacement.
        found: String,
    },
    /// The group still has members.
    GroupNotEmpty {
        /// The group id.
        group_id: String,
        /// Number of members remaining.
        members: usize,
    },
}

impl DomainError {
    /// Returns true for failures raised while constructing a value object.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidStudentId(_)
                | Self::InvalidGroupId(_)
                | Self::InvalidName(_)
                | Self::InvalidPhone(_)
                | Self::InvalidEmail(_)
                | Self::InvalidTelegram(_)
                | Self::InvalidStatus(_)
                | Self::InvalidAttendanceStatus(_)
                | Self::InvalidTimeRange { .. }
                | Self::InvalidDateTime { .. }
                | Self::InvalidAssignment { .. }
                | Self::InvalidWeek { .. }
                | Self::InvalidNumber { .. }
        )
    }
}

impl std::fmt::Display for DomainError {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStudentId(msg) => write!(f, "Invalid student id: {msg}"),
            Self::InvalidGroupId(msg) => write!(f, "Invalid group id: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidTelegram(msg) => write!(f, "Invalid telegram handle: {msg}"),
            Self::InvalidStatus(msg) => write!(f, "Invalid homework status: {msg}"),
            Self::InvalidAttendanceStatus(msg) => write!(f, "Invalid attendance status: {msg}"),
            Self::InvalidTimeRange { from, to } => {
                write!(
                    f,
                    "Consultation end time must be after start time (from {from}, to {to})"
                )
            }
            Self::InvalidDateTime { input, error } => {
                write!(f, "Failed to parse date-time '{input}': {error}")
            }
            Self::InvalidAssignment { assignment } => {
                write!(
                    f,
                    "Invalid assignment: {assignment}. Must be between 1 and 3"
                )
            }
            Self::InvalidWeek { week } => {
                write!(f, "Invalid week: {week}. Must be between 2 and 13")
            }
            Self::InvalidNumber { field, input } => {
                write!(f, "Invalid {field}: '{input}' is not a number")
            }
            Self::DuplicateStudent(id) => write!(f, "Student '{id}' already exists"),
            Self::DuplicateGroup(id) => write!(f, "Group '{id}' already exists"),
            Self::DuplicateAssignment {
                student_id,
                assignment,
            } => {
                write!(
                    f,
                    "Assignment {assignment} already exists for student '{student_id}'"
                )
            }
            Self::DuplicateConsultation { student_id } => {
                write!(f, "Consultation already exists for student '{student_id}'")
            }
            Self::StudentNotFound(id) => write!(f, "Student '{id}' not found"),
            Self::GroupNotFound(id) => write!(f, "Group '{id}' not found"),
            Self::AssignmentNotFound {
                student_id,
                assignment,
            } => {
                write!(
                    f,
                    "Assignment {assignment} not found for student '{student_id}'"
                )
            }
            Self::NoConsultation(id) => write!(f, "Student '{id}' does not have a consultation"),
            Self::OverlapConflict {
                student_id,
                conflicting_student_id,
            } => {
                write!(
                    f,
                    "Consultation for student '{student_id}' overlaps the booking of \
                     '{conflicting_student_id}'"
                )
            }
            Self::StudentAlreadyBooked(id) => {
                write!(f, "Student '{id}' already has a consultation")
            }
            Self::StudentIdMismatch { expected, found } => {
                write!(
                    f,
                    "Cannot replace student '{expected}' with a record for '{found}'"
                )
            }
            Self::GroupNotEmpty { group_id, members } => {
                write!(f, "Group '{group_id}' still has {members} member(s)")
            }
        }
    }
}

impl std::error::Error for DomainError {}
