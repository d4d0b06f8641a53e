// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by the harness itself, as opposed to ordinary
/// assertion failures inside a test body.
///
/// Setup errors (`BinaryMissing`, `GenerateFailed`, `SpawnFailed`,
/// `ConfigUnreadable`, `ConfigMalformed`) abort a test before any HTTP
/// traffic. `StartupTimeout` is raised by the readiness poll.
/// `Transport` covers request construction and network failures; HTTP
/// error statuses are not errors, callers assert on them directly.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("syncd binary not built: {0} does not exist")]
    BinaryMissing(PathBuf),

    #[error("one-shot generation of {home} failed: {reason}")]
    GenerateFailed { home: PathBuf, reason: String },

    #[error("could not start syncd process: {0}")]
    SpawnFailed(#[source] io::Error),

    #[error("config file unreadable: {0}")]
    ConfigUnreadable(#[source] io::Error),

    #[error("config file malformed: {0}")]
    ConfigMalformed(String),

    #[error("daemon startup took too long (waited {0:?})")]
    StartupTimeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),
}
