// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views over the roster.
//!
//! Nothing here mutates the roster.

use crate::error::CoreError;
use crate::state::Roster;
use ta_roster_domain::{Consultation, GroupId, Student};

impl Roster {
    /// Returns the members of a group.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GroupNotFound` if the group does not exist.
    pub fn students_in_group(&self, group_id: &GroupId) -> Result<&[Student], CoreError> {
        Ok(self.require_group(group_id)?.members())
    }

    /// Returns booked consultations ordered by start time, then by student id.
    #[must_use]
    pub fn consultations_by_start(&self) -> Vec<&Consultation> {
        let mut ordered: Vec<&Consultation> = self.consultations.iter().collect();
        ordered.sort_by(|a, b| {
            a.range()
                .from()
                .cmp(&b.range().from())
                .then_with(|| a.student_id().cmp(b.student_id()))
        });
        ordered
    }
}
