// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON snapshot persistence for the TA roster.
//!
//! The roster is stored as one pretty-printed JSON document holding the
//! students, the groups (by member id) and the booked consultations.
//! Loading never writes the derived views directly: the roster is rebuilt
//! through its own operations and must pass its integrity check.
//!
//! Saving writes a temporary file next to the target and renames it into
//! place, so a crash mid-write leaves the previous document intact.

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
#![allow(clippy::multiple_crate_versions)]

mod data_models;
mod error;

#[cfg(test)]
mod tests;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use ta_roster::Roster;
use tempfile::NamedTempFile;
use tracing::info;

pub use data_models::{GroupData, RosterData};
pub use error::PersistenceError;

/// Encodes a roster as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(roster: &Roster) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(&RosterData::from(roster))?)
}

/// Decodes a JSON document and rebuilds the roster it describes.
///
/// # Errors
///
/// Returns an error if the document is malformed or describes an
/// inconsistent roster.
pub fn from_json(document: &str) -> Result<Roster, PersistenceError> {
    let data: RosterData = serde_json::from_str(document)?;
    Ok(data.into_roster()?)
}

/// A roster stored in a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file does not need to exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the roster, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid roster
    /// document, or describes an inconsistent roster.
    pub fn load(&self) -> Result<Roster, PersistenceError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No roster file found, starting empty");
            return Ok(Roster::new());
        }

        let document: String =
            fs::read_to_string(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        let roster: Roster = from_json(&document)?;

        info!(
            path = %self.path.display(),
            students = roster.students().len(),
            groups = roster.groups().len(),
            consultations = roster.consultations().len(),
            "Loaded roster"
        );
        Ok(roster)
    }

    /// Saves the roster, replacing any previous document.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded or written.
    pub fn save(&self, roster: &Roster) -> Result<(), PersistenceError> {
        let document: String = to_json(roster)?;

        let dir: &Path = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| PersistenceError::io(dir, e))?;

        let mut staged: NamedTempFile =
            NamedTempFile::new_in(dir).map_err(|e| PersistenceError::io(dir, e))?;
        staged
            .write_all(document.as_bytes())
            .map_err(|e| PersistenceError::io(staged.path(), e))?;
        staged
            .persist(&self.path)
            .map_err(|e| PersistenceError::io(&self.path, e.error))?;

        info!(
            path = %self.path.display(),
            students = roster.students().len(),
            groups = roster.groups().len(),
            consultations = roster.consultations().len(),
            "Saved roster"
        );
        Ok(())
    }
}
