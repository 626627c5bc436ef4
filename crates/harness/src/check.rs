// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The check contract: validate or repair one path against a standard.

use std::io;
use std::path::Path;

/// Shared inputs for constructing checks.
///
/// Every check in a run is bound to the same repository identifier
/// and standard configuration; only the target path varies.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Repository identifier, e.g. "exemplar".
    pub repo: &'a str,

    /// Location of the standard configuration consumed by checks.
    /// The harness never reads it; the format belongs to the checks.
    pub standard: &'a Path,

    /// When set, checks should emit per-step diagnostics.
    pub verbose: bool,
}

/// A single check bound to one target path.
///
/// Instances are single-use: the runner constructs one check per path
/// and drops it after the lifecycle completes, so no state leaks
/// between fixture cases.
pub trait Check {
    /// Short name used in failure messages, e.g. "readme.title".
    fn name(&self) -> &'static str;

    /// Whether the check is applicable to its target at all.
    fn pre_check(&self) -> bool;

    /// Whether the target conforms to the standard.
    fn check(&self) -> bool;

    /// Repair the target in place. Returns false when the violation
    /// cannot be fixed automatically.
    fn fix(&self) -> bool;

    /// Replace the target's raw content.
    fn write(&self, content: &str) -> io::Result<()>;
}

/// Constructs a check bound to a context and target path.
///
/// Blanket-implemented for closures and constructor functions, so call
/// sites pass a constructor directly:
///
/// ```ignore
/// runner.check_each(true, &paths, &ReadmeTitleCheck::new)?;
/// ```
pub trait CheckFactory {
    type Check: Check;

    fn create(&self, ctx: CheckContext<'_>, path: &Path) -> Self::Check;
}

impl<C, F> CheckFactory for F
where
    C: Check,
    F: Fn(CheckContext<'_>, &Path) -> C,
{
    type Check = C;

    fn create(&self, ctx: CheckContext<'_>, path: &Path) -> Self::Check {
        self(ctx, path)
    }
}
