// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scratch copies of fixtures for fix-in-place testing.
//!
//! Fix tests mutate their target, so they run against a disposable
//! copy next to the original fixture instead of the fixture itself.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to the fixture name to form the scratch path.
pub const SCRATCH_SUFFIX: &str = "delete_me";

/// A scratch file path removed when the guard drops.
///
/// The guard owns cleanup on every exit path, including a lifecycle
/// that errors out partway through. Call [`remove`] on the success
/// path to surface removal errors instead of swallowing them.
///
/// [`remove`]: ScratchFile::remove
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    armed: bool,
}

impl ScratchFile {
    /// Derives the scratch path for a fixture: `<fixture>.delete_me`,
    /// a sibling of the original so relative checks behave the same.
    pub fn for_fixture(fixture: &Path) -> Self {
        let mut name = OsString::from(fixture.as_os_str());
        name.push(".");
        name.push(SCRATCH_SUFFIX);
        Self { path: PathBuf::from(name), armed: true }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the scratch file, consuming the guard.
    pub fn remove(mut self) -> io::Result<()> {
        self.armed = false;
        fs::remove_file(&self.path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.armed {
            // Best effort: the file may never have been written.
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
#[path = "scratch_tests.rs"]
mod tests;
