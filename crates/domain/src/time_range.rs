// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consultation windows.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Textual form of a window boundary: `YYYY-MM-DD HH:MM`.
pub const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

time::serde::format_description!(
    minute_precision,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]"
);

/// Parses a window boundary in `YYYY-MM-DD HH:MM` form.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateTime` if the text does not match the format
/// or names an impossible date.
pub fn parse_date_time(input: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(input.trim(), DATE_TIME_FORMAT).map_err(|e| {
        DomainError::InvalidDateTime {
            input: input.to_owned(),
            error: e.to_string(),
        }
    })
}

/// A half-open booking window `[from, to)`.
///
/// `to` is always strictly after `from`. Back-to-back windows (one ending
/// exactly when the next starts) do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    #[serde(with = "minute_precision")]
    from: PrimitiveDateTime,
    #[serde(with = "minute_precision")]
    to: PrimitiveDateTime,
}

/// Unvalidated wire form, checked through [`TimeRange::new`] on the way in.
#[derive(Deserialize)]
struct RawTimeRange {
    #[serde(with = "minute_precision")]
    from: PrimitiveDateTime,
    #[serde(with = "minute_precision")]
    to: PrimitiveDateTime,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = DomainError;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

impl TimeRange {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str = "Consultation end time must be after start time";

    /// Creates a new `TimeRange`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeRange` unless `to` is strictly after `from`.
    pub fn new(from: PrimitiveDateTime, to: PrimitiveDateTime) -> Result<Self, DomainError> {
        if !Self::is_valid(from, to) {
            return Err(DomainError::InvalidTimeRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Parses both boundaries from `YYYY-MM-DD HH:MM` text.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` for malformed text and
    /// `DomainError::InvalidTimeRange` if the window is empty or reversed.
    pub fn parse(from: &str, to: &str) -> Result<Self, DomainError> {
        Self::new(parse_date_time(from)?, parse_date_time(to)?)
    }

    /// Returns whether `from`..`to` is a valid window.
    #[must_use]
    pub fn is_valid(from: PrimitiveDateTime, to: PrimitiveDateTime) -> bool {
        to > from
    }

    /// Returns the start of the window.
    #[must_use]
    pub const fn from(&self) -> PrimitiveDateTime {
        self.from
    }

    /// Returns the end of the window.
    #[must_use]
    pub const fn to(&self) -> PrimitiveDateTime {
        self.to
    }

    /// Returns whether the two windows share any instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from < other.to && other.from < self.to
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let from: String = self
            .from
            .format(DATE_TIME_FORMAT)
            .map_err(|_| std::fmt::Error)?;
        let to: String = self
            .to
            .format(DATE_TIME_FORMAT)
            .map_err(|_| std::fmt::Error)?;
        write!(f, "{from} to {to}")
    }
}
