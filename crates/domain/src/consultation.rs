// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::time_range::TimeRange;
use crate::types::StudentId;
use serde::{Deserialize, Serialize};

/// A consultation slot booked by one student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Consultation {
    /// The student holding the booking.
    student_id: StudentId,
    /// The booked window.
    range: TimeRange,
}

impl Consultation {
    /// Creates a new `Consultation`.
    #[must_use]
    pub const fn new(student_id: StudentId, range: TimeRange) -> Self {
        Self { student_id, range }
    }

    /// Returns the owning student's id.
    #[must_use]
    pub const fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    /// Returns the booked window.
    #[must_use]
    pub const fn range(&self) -> &TimeRange {
        &self.range
    }

    /// Returns whether both bookings are for the same student and window.
    #[must_use]
    pub fn is_duplicate_of(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns whether the windows overlap, regardless of owner.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range.overlaps(&other.range)
    }
}

impl std::fmt::Display for Consultation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Consultation for {}: {}", self.student_id, self.range)
    }
}
