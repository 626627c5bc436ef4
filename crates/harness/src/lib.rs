// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture-driven test harness for conformance checks.
//!
//! A [`Check`] validates one path against a coding standard and can
//! repair violations in place. The [`CheckRunner`] drives a fresh
//! check instance over each path in a fixture set, failing fast on
//! the first step that deviates from the expected lifecycle.

pub mod check;
pub mod runner;
pub mod scratch;

pub use check::{Check, CheckContext, CheckFactory};
pub use runner::{CheckRunner, RunnerError};
pub use scratch::ScratchFile;
