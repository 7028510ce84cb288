// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod attendance;
mod consultation;
mod error;
mod group;
mod homework;
mod status;
mod student;
mod time_range;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use attendance::{AttendanceSheet, Week};
pub use consultation::Consultation;
pub use error::DomainError;
pub use group::Group;
pub use homework::{AssignmentId, HomeworkTracker};
pub use status::{AttendanceStatus, HomeworkStatus};
pub use student::Student;
pub use time_range::{DATE_TIME_FORMAT, TimeRange, parse_date_time};
pub use types::{Email, GroupId, Name, Phone, StudentId, TelegramHandle};
pub use validation::{
    find_overlapping_pair, validate_group_unique, validate_ids_distinct, validate_no_overlap,
    validate_student_unique,
};
