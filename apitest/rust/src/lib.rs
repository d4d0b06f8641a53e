// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Black-box integration-test harness for the syncd REST API.
//!
//! The library knows how to bring a daemon up against an isolated home
//! directory (spawn, wait for the health endpoint, tear down on drop),
//! issue authenticated requests, and decode the endpoint responses the
//! tests assert on. The end-to-end tests themselves live in `tests/`
//! and need a built `syncd` binary, so they sit behind the
//! `test-helpers` feature; `cargo test` without it runs the unit suite
//! only.

pub mod client;
pub mod config;
pub mod daemon;
pub mod error;
pub mod fixture;
pub mod health;
pub mod logfile;
pub mod rest;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::ApiClient;
pub use config::ConnectionInfo;
pub use daemon::Daemon;
pub use error::HarnessError;
pub use fixture::FixtureHome;
