// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ta_roster_domain::DomainError;

/// Errors that can occur during roster operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The denormalized views disagree with each other.
    IntegrityViolation(String),
}

impl CoreError {
    /// Returns the underlying domain error, if any.
    #[must_use]
    pub const fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::IntegrityViolation(_) => None,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IntegrityViolation(msg) => write!(f, "Integrity violation: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
