// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use ta_roster::CoreError;
use thiserror::Error;

/// Errors that can occur while loading or saving a roster.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading, writing or renaming the data file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The stored document does not describe a consistent roster.
    #[error("Roster rebuild failed: {0}")]
    Rebuild(#[from] CoreError),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
