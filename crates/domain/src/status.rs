// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Completion status of a single homework assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    /// Submitted on time.
    Complete,
    /// Not yet submitted. Newly added assignments start here.
    #[default]
    Incomplete,
    /// Submitted after the deadline.
    Late,
}

impl HomeworkStatus {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str = "Please enter complete/incomplete/late only";

    /// Returns whether `value` names a homework status (case-insensitive).
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
            Self::Late => "late",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "complete" => Ok(Self::Complete),
            "incomplete" => Ok(Self::Incomplete),
            "late" => Ok(Self::Late),
            _ => Err(DomainError::InvalidStatus(String::from(
                Self::MESSAGE_CONSTRAINTS,
            ))),
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attendance recorded for a student in one teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Attended the session.
    Present,
    /// Missed the session without a valid reason.
    Absent,
    /// Missed (or arrived late to) the session with a valid reason.
    #[serde(alias = "late")]
    Excused,
}

impl AttendanceStatus {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str = "Please enter present/absent/excused only";

    /// Returns whether `value` names an attendance status (case-insensitive).
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Excused => "excused",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            // Older rosters recorded excused sessions as "late".
            "excused" | "late" => Ok(Self::Excused),
            _ => Err(DomainError::InvalidAttendanceStatus(String::from(
                Self::MESSAGE_CONSTRAINTS,
            ))),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
