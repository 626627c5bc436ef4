// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner for fixture-based conformance tests.
//!
//! Drives a fresh check instance over each path in a fixture set.
//! Paths are processed strictly in order and the first step that
//! deviates from the expected lifecycle aborts the remaining ones.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::check::{Check, CheckContext, CheckFactory};
use crate::scratch::ScratchFile;

/// A deviation from the expected check lifecycle.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("[{check}] pre_check() failed for {}", .path.display())]
    PreCheckFailed { check: &'static str, path: PathBuf },

    #[error("[{check}] check() returned {actual} for {}, expected {expected}", .path.display())]
    UnexpectedOutcome {
        check: &'static str,
        path: PathBuf,
        expected: bool,
        actual: bool,
    },

    #[error("[{check}] fix() failed for {}", .path.display())]
    FixFailed { check: &'static str, path: PathBuf },

    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Drives checks over fixture paths, one fresh instance per path.
pub struct CheckRunner<'a> {
    ctx: CheckContext<'a>,
}

impl<'a> CheckRunner<'a> {
    /// Binds the runner to a repository identifier and a standard
    /// configuration. Checks run with verbose diagnostics enabled.
    pub fn new(repo: &'a str, standard: &'a Path) -> Self {
        Self {
            ctx: CheckContext { repo, standard, verbose: true },
        }
    }

    /// Runs one check per path and requires `check()` to return
    /// `expected` for every one of them, with `pre_check()` passing
    /// first.
    pub fn check_each<P, F>(
        &self,
        expected: bool,
        paths: &[P],
        factory: &F,
    ) -> Result<(), RunnerError>
    where
        P: AsRef<Path>,
        F: CheckFactory,
    {
        for path in paths {
            let path = path.as_ref();
            let check = factory.create(self.ctx, path);
            debug!(check = check.name(), path = %path.display(), expected, "running check");

            require_pre_check(&check, path)?;
            require_outcome(&check, path, expected)?;
        }
        Ok(())
    }

    /// Runs the full fix lifecycle against a scratch copy of each
    /// known-invalid file.
    ///
    /// For each file: copy its content to `<file>.delete_me`, confirm
    /// the copy fails the check, fix it in place, and confirm the copy
    /// now passes. The original fixture is never touched and the
    /// scratch copy is removed on every exit path.
    pub fn fix_each_file<P, F>(&self, invalid_paths: &[P], factory: &F) -> Result<(), RunnerError>
    where
        P: AsRef<Path>,
        F: CheckFactory,
    {
        for path in invalid_paths {
            let path = path.as_ref();
            let scratch = ScratchFile::for_fixture(path);
            let check = factory.create(self.ctx, scratch.path());
            debug!(
                check = check.name(),
                fixture = %path.display(),
                scratch = %scratch.path().display(),
                "running fix lifecycle"
            );

            let content = fs::read_to_string(path).map_err(|source| RunnerError::Io {
                action: "read",
                path: path.to_path_buf(),
                source,
            })?;
            check.write(&content).map_err(|source| RunnerError::Io {
                action: "write",
                path: scratch.path().to_path_buf(),
                source,
            })?;

            require_pre_check(&check, scratch.path())?;
            // The fixture must actually violate the standard, otherwise
            // the fix below proves nothing.
            require_outcome(&check, scratch.path(), false)?;

            if !check.fix() {
                return Err(RunnerError::FixFailed {
                    check: check.name(),
                    path: scratch.path().to_path_buf(),
                });
            }

            require_pre_check(&check, scratch.path())?;
            require_outcome(&check, scratch.path(), true)?;

            let scratch_path = scratch.path().to_path_buf();
            scratch.remove().map_err(|source| RunnerError::Io {
                action: "remove",
                path: scratch_path,
                source,
            })?;
        }
        Ok(())
    }

    /// Fix lifecycle for directory fixtures.
    ///
    /// Placeholder: directory checks have no in-place fix story yet,
    /// so this accepts its inputs and does nothing.
    // TODO: decide whether directory checks get a fix lifecycle at all.
    pub fn fix_each_directory<P, F>(
        &self,
        _invalid_paths: &[P],
        _factory: &F,
    ) -> Result<(), RunnerError>
    where
        P: AsRef<Path>,
        F: CheckFactory,
    {
        Ok(())
    }
}

fn require_pre_check<C: Check>(check: &C, path: &Path) -> Result<(), RunnerError> {
    if check.pre_check() {
        Ok(())
    } else {
        Err(RunnerError::PreCheckFailed {
            check: check.name(),
            path: path.to_path_buf(),
        })
    }
}

fn require_outcome<C: Check>(check: &C, path: &Path, expected: bool) -> Result<(), RunnerError> {
    let actual = check.check();
    if actual == expected {
        Ok(())
    } else {
        Err(RunnerError::UnexpectedOutcome {
            check: check.name(),
            path: path.to_path_buf(),
            expected,
            actual,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
