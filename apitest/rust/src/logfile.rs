// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Parsing of the daemon's on-disk log file, used to cross-validate
//! what the log and error endpoints report.

use regex::Regex;
use std::io;
use std::path::Path;

/// Entries the log and log.txt endpoints insert where output was
/// elided; dropped before comparison.
pub const PLACEHOLDER: &str = "...";

/// Messages from error-level lines (`WARNING: <message>`).
pub fn parse_error_messages(path: &Path) -> io::Result<Vec<String>> {
    let re = Regex::new(r"WARNING: (.*)").unwrap();
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter_map(|line| re.captures(line).map(|c| c[1].to_string()))
        .collect())
}

/// Messages from structured log lines of the form
/// `[device] 2024/01/15 10:30:45 LEVEL: <message>`.
pub fn parse_log_messages(path: &Path) -> io::Result<Vec<String>> {
    let re =
        Regex::new(r"\[(.*?)\] \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} (INFO|WARNING|ERROR|.*?): (.*)")
            .unwrap();
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter_map(|line| re.captures(line).map(|c| c[3].to_string()))
        .collect())
}

/// Messages from the plain-text log endpoint body, where each entry is
/// prefixed `2024-01-15T10:30:45+01:00: `. Unprefixed lines and
/// placeholder entries are dropped.
pub fn parse_text_body(body: &str) -> Vec<String> {
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\+\d{2}:\d{2}: (.*)").unwrap();
    body.lines()
        .filter_map(|line| re.captures(line).map(|c| c[1].to_string()))
        .filter(|message| message != PLACEHOLDER)
        .collect()
}

/// Last `n` entries of `entries`, or all of them when shorter. The API
/// reports a bounded window, so file-side sequences are trimmed to the
/// API-side length before positional comparison.
pub fn tail<T>(entries: &[T], n: usize) -> &[T] {
    &entries[entries.len().saturating_sub(n)..]
}
