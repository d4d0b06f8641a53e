// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Shared end-to-end plumbing: resolve the daemon binary, generate an
//! isolated home, start the daemon, and block until it is healthy.
//! Requires a built `syncd` binary; point `SYNCD_BIN_DIR` at its
//! directory or place it in `<repo>/bin`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;
use syncd_apitest::{ApiClient, Daemon, FixtureHome, config, fixture, health};

/// Delay before re-probing after restart, and between pause and resume.
pub const SETTLE_DELAY: Duration = Duration::from_secs(5);

/// Slack for the daemon to flush its log file before we read it back.
pub const LOG_FLUSH_DELAY: Duration = Duration::from_secs(1);

static LOGGER: Once = Once::new();

pub fn init_logging() {
    LOGGER.call_once(|| {
        simple_logger::init_with_level(log::Level::Info).expect("logger init");
    });
}

/// Directory holding the `syncd` binary. `SYNCD_BIN_DIR` overrides the
/// default `<repo>/bin`.
pub fn bin_dir() -> PathBuf {
    match std::env::var("SYNCD_BIN_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../bin"),
    }
}

/// A running daemon with its isolated home. Dropping this tears the
/// daemon down and removes the home.
pub struct TestDaemon {
    pub client: ApiClient,
    pub home: FixtureHome,
    pub daemon: Daemon,
    _root: tempfile::TempDir,
}

impl TestDaemon {
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Generate a fresh home, start the daemon against it, and wait for
/// the health endpoint to report OK.
pub fn launch() -> TestDaemon {
    launch_with(|_| Ok(()))
}

/// Like `launch`, but runs `prepare` on the generated home before the
/// daemon starts (e.g. to register a fixture device).
pub fn launch_with(prepare: impl FnOnce(&FixtureHome) -> anyhow::Result<()>) -> TestDaemon {
    init_logging();
    let bin = bin_dir();
    let root = tempfile::tempdir().expect("create fixture root");
    let home = FixtureHome::generate(&bin, root.path()).expect("generate daemon home");
    prepare(&home).expect("prepare fixture home");

    let daemon = Daemon::start(&bin, home.path()).expect("start syncd");
    let info = config::read_connection_info(home.path()).expect("read connection info");
    health::wait_until_healthy(&format!("http://{}", info.address))
        .expect("daemon never became healthy");

    TestDaemon {
        client: ApiClient::new(&info.address, &info.api_key),
        home,
        daemon,
        _root: root,
    }
}

/// `launch_with` registering the standard fixture device.
pub fn launch_with_fixture_device() -> TestDaemon {
    launch_with(|home| home.add_device(fixture::FIXTURE_DEVICE_ID, fixture::FIXTURE_DEVICE_NAME))
}
