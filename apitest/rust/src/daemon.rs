// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::HarnessError;
use log::{error, info};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

pub const BIN_NAME: &str = "syncd";

/// Owning handle to a spawned daemon process.
///
/// Exactly one `Daemon` is expected per home directory. Teardown is
/// guaranteed on every exit path: `Drop` kills and reaps the child, so
/// a panicking test cannot leak a running daemon. A teardown failure is
/// reported for the owning test (via `stop()`'s result or an ERROR log
/// from `Drop`) instead of aborting the whole run; homes are isolated
/// per test, so an orphan cannot corrupt other tests.
#[derive(Debug)]
pub struct Daemon {
    child: Option<Child>,
    home: PathBuf,
}

impl Daemon {
    /// Start the daemon with `--no-browser --home <home>`, stdout and
    /// stderr inherited from the harness process.
    ///
    /// If `home` does not exist yet it is initialized first via the
    /// one-shot generate mode; a failed generation is fatal to the
    /// calling test. A missing `bin_dir` fails immediately without
    /// starting anything.
    pub fn start(bin_dir: &Path, home: &Path) -> Result<Self, HarnessError> {
        if !bin_dir.is_dir() {
            return Err(HarnessError::BinaryMissing(bin_dir.to_path_buf()));
        }
        if !home.exists() {
            generate_home(bin_dir, home)?;
        }

        let child = Command::new(bin_dir.join(BIN_NAME))
            .arg("--no-browser")
            .arg("--home")
            .arg(home)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(HarnessError::SpawnFailed)?;

        info!("syncd started (pid={}, home={})", child.id(), home.display());
        Ok(Self {
            child: Some(child),
            home: home.to_path_buf(),
        })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Kill and reap the daemon. Idempotent; `Drop` does the same with
    /// the failure downgraded to an ERROR log.
    pub fn stop(&mut self) -> io::Result<()> {
        if let Some(mut child) = self.child.take() {
            child.kill()?;
            let status = child.wait()?;
            info!("syncd stopped ({status})");
        }
        Ok(())
    }
}

impl Drop for Daemon {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let pid = child.id();
            if let Err(e) = child.kill() {
                error!("failed to kill syncd (pid={pid}): {e}");
            }
            if let Err(e) = child.wait() {
                error!("failed to reap syncd (pid={pid}): {e}");
            }
        }
    }
}

/// Run `syncd --generate <home> --no-browser` to completion, producing
/// a default config (and keys) for a not-yet-existing home directory.
pub fn generate_home(bin_dir: &Path, home: &Path) -> Result<(), HarnessError> {
    if !bin_dir.is_dir() {
        return Err(HarnessError::BinaryMissing(bin_dir.to_path_buf()));
    }
    info!("generating syncd home at {}", home.display());
    let status = Command::new(bin_dir.join(BIN_NAME))
        .arg("--generate")
        .arg(home)
        .arg("--no-browser")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| HarnessError::GenerateFailed {
            home: home.to_path_buf(),
            reason: e.to_string(),
        })?;
    if !status.success() {
        return Err(HarnessError::GenerateFailed {
            home: home.to_path_buf(),
            reason: format!("exited with {status}"),
        });
    }
    Ok(())
}
