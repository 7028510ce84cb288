// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::AttendanceStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents a teaching week in which attendance is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Week {
    number: u8,
}

impl Week {
    /// First week with a tutorial session.
    pub const FIRST: u8 = 2;
    /// Last week with a tutorial session.
    pub const LAST: u8 = 13;

    /// Creates a new `Week`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeek` if the number is not in `2..=13`.
    pub fn new(number: i64) -> Result<Self, DomainError> {
        if !Self::is_valid(number) {
            return Err(DomainError::InvalidWeek { week: number });
        }
        u8::try_from(number)
            .map(|number| Self { number })
            .map_err(|_| DomainError::InvalidWeek { week: number })
    }

    /// Returns whether `number` is a teaching week.
    #[must_use]
    pub fn is_valid(number: i64) -> bool {
        (i64::from(Self::FIRST)..=i64::from(Self::LAST)).contains(&number)
    }

    /// Returns the week number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }
}

impl TryFrom<i64> for Week {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> Self {
        week.number
    }
}

impl std::str::FromStr for Week {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidNumber {
                field: "week",
                input: s.to_owned(),
            })?;
        Self::new(number)
    }
}

impl std::fmt::Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Per-student attendance, at most one entry per week.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceSheet {
    weeks: BTreeMap<Week, AttendanceStatus>,
}

impl AttendanceSheet {
    /// Creates an empty sheet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weeks: BTreeMap::new(),
        }
    }

    /// Returns a sheet with `week` set to `status`, replacing any earlier mark.
    #[must_use]
    pub fn mark_week(&self, week: Week, status: AttendanceStatus) -> Self {
        let mut weeks = self.weeks.clone();
        weeks.insert(week, status);
        Self { weeks }
    }

    /// Returns the attendance recorded for `week`, if any.
    #[must_use]
    pub fn attendance_for(&self, week: Week) -> Option<AttendanceStatus> {
        self.weeks.get(&week).copied()
    }

    /// Iterates over marked weeks in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Week, AttendanceStatus)> + '_ {
        self.weeks.iter().map(|(week, status)| (*week, *status))
    }

    /// Counts the weeks marked with `status`.
    #[must_use]
    pub fn count(&self, status: AttendanceStatus) -> usize {
        self.weeks.values().filter(|s| **s == status).count()
    }

    /// Returns the number of marked weeks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Returns whether no week has been marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

impl FromIterator<(Week, AttendanceStatus)> for AttendanceSheet {
    fn from_iter<T: IntoIterator<Item = (Week, AttendanceStatus)>>(iter: T) -> Self {
        Self {
            weeks: iter.into_iter().collect(),
        }
    }
}
