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

//! The roster aggregate and the command seam in front of it.
//!
//! [`Roster`] owns the canonical students, the group views and the
//! consultation registry, and keeps them consistent on every mutation.
//! [`apply`] turns a typed [`Command`] into a new roster without touching
//! the old one.

mod apply;
mod command;
mod error;
mod integrity;
mod mutations;
mod queries;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, FieldChange, StudentEdit, StudentSelector};
pub use error::CoreError;
pub use state::{Outcome, Roster, TransitionResult};
