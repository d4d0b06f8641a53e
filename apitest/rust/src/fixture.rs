// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Per-test daemon home directories. Every test seeds exactly the
//! state it asserts against, so test order cannot matter.

use crate::config::CONFIG_FILE;
use crate::daemon;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the log file the daemon writes inside its home directory.
pub const LOG_FILE: &str = "syncd.log";

/// Known device registered by `add_device` in device-keyed tests.
pub const FIXTURE_DEVICE_ID: &str =
    "H67OXGJ-BSITBYE-MZ3BJPH-6BMIGIE-7PROEHT-6QYVQVI-C7INUEY-LPP6UQP";
pub const FIXTURE_DEVICE_NAME: &str = "Phone";

/// A daemon home directory rooted in a caller-owned directory (the
/// caller keeps the tempdir alive for the duration of the test).
pub struct FixtureHome {
    home: PathBuf,
}

impl FixtureHome {
    /// Initialize a fresh home under `root` using the daemon's one-shot
    /// generate mode.
    pub fn generate(bin_dir: &Path, root: &Path) -> Result<Self> {
        let home = root.join("home");
        daemon::generate_home(bin_dir, &home)
            .with_context(|| format!("generating fixture home under {}", root.display()))?;
        Ok(Self { home })
    }

    /// Wrap an already-populated home directory.
    pub fn existing(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn path(&self) -> &Path {
        &self.home
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.join(CONFIG_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.home.join(LOG_FILE)
    }

    pub fn testdata(&self) -> PathBuf {
        self.home.join("testdata")
    }

    /// Create the five-folder tree the browse assertions expect.
    /// Returns the expected directory paths, separator-normalized and
    /// in order.
    pub fn seed_browse_tree(&self) -> Result<Vec<String>> {
        let mut expected = Vec::new();
        for i in 1..=5 {
            let dir = self.testdata().join(format!("folder{i}"));
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating browse fixture {}", dir.display()))?;
            expected.push(dir.to_string_lossy().replace('\\', "/"));
        }
        Ok(expected)
    }

    /// Register a known device in the generated config so device-keyed
    /// endpoints have a fixed entry to assert against. The element is
    /// inserted just before the closing root tag; the daemon must not
    /// be running yet.
    pub fn add_device(&self, id: &str, name: &str) -> Result<()> {
        let path = self.config_path();
        let mut contents = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let Some(pos) = contents.rfind("</configuration>") else {
            bail!("no closing configuration tag in {}", path.display());
        };
        contents.insert_str(
            pos,
            &format!("    <device id=\"{id}\" name=\"{name}\" compression=\"metadata\"></device>\n"),
        );
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
    }
}
