// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Decoded response shapes for the consumed REST endpoints.

use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};

/// Endpoint paths, relative to the daemon base URL.
pub mod endpoint {
    pub const PING: &str = "/rest/system/ping";
    pub const BROWSE: &str = "/rest/system/browse";
    pub const CONFIG_DEVICES: &str = "/rest/config/devices/";
    pub const CONNECTIONS: &str = "/rest/system/connections";
    pub const DEBUG: &str = "/rest/system/debug/";
    pub const ERROR: &str = "/rest/system/error/";
    pub const ERROR_CLEAR: &str = "/rest/system/error/clear";
    pub const LOG: &str = "/rest/system/log";
    pub const LOG_TEXT: &str = "/rest/system/log.txt";
    pub const PATHS: &str = "/rest/system/paths";
    pub const PAUSE: &str = "/rest/system/pause";
    pub const RESUME: &str = "/rest/system/resume";
    pub const RESTART: &str = "/rest/system/restart";
    pub const SHUTDOWN: &str = "/rest/system/shutdown";
}

/// The daemon reports `null` rather than `[]` for empty lists.
fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Ping {
    pub ping: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Device {
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(rename = "name", alias = "Name", default)]
    pub name: String,
}

/// `/rest/system/connections`: per-device connection state keyed by
/// device ID. Only key presence is asserted, the per-device value stays
/// opaque.
#[derive(Debug, Deserialize)]
pub struct Connections {
    pub connections: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct DebugInfo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enabled: Vec<String>,
    pub facilities: BTreeMap<String, String>,
}

impl DebugInfo {
    /// Expected state of a freshly started daemon: nothing enabled, the
    /// full facility table reported.
    pub fn default_state() -> Self {
        Self::with_enabled(&[])
    }

    /// Default facility table with the given set enabled.
    pub fn with_enabled(enabled: &[&str]) -> Self {
        Self {
            enabled: enabled.iter().map(|s| s.to_string()).collect(),
            facilities: DEFAULT_FACILITIES
                .iter()
                .map(|(name, description)| (name.to_string(), description.to_string()))
                .collect(),
        }
    }
}

/// The daemon's fixed debug-facility table. Kept as an explicit
/// constant so expectations are passed into assertions instead of
/// living in hidden shared state.
pub const DEFAULT_FACILITIES: &[(&str, &str)] = &[
    ("api", "REST API"),
    ("app", "Main run facility"),
    ("backend", "The database backend"),
    ("beacon", "Multicast and broadcast discovery"),
    ("config", "Configuration loading and saving"),
    ("connections", "Connection handling"),
    ("db", "The database layer"),
    ("dialer", "Dialing connections"),
    ("discover", "Remote device discovery"),
    ("events", "Event generation and logging"),
    ("fs", "Filesystem access"),
    ("main", "Main package"),
    ("model", "The root hub"),
    ("nat", "NAT discovery and port mapping"),
    ("pmp", "NAT-PMP discovery and port mapping"),
    ("protocol", "The BEP protocol"),
    ("relay", ""),
    ("scanner", "File change detection and hashing"),
    ("sha256", "SHA256 hashing package"),
    ("stats", "Persistent device and folder statistics"),
    ("stun", "STUN functionality"),
    ("sync", "Mutexes"),
    ("upgrade", "Binary upgrades"),
    ("upnp", "UPnP discovery and port mapping"),
    ("ur", "Usage reporting"),
    ("versioner", "File versioning"),
    ("walkfs", "Filesystem access while walking"),
    ("watchaggregator", "Filesystem event watcher"),
];

#[derive(Debug, Deserialize, PartialEq)]
pub struct LogEntry {
    pub when: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SystemErrors {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<LogEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LogMessages {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<LogEntry>,
}

/// `/rest/system/paths`: the daemon's view of its own filesystem
/// layout. Values may be empty or `"-"` for paths that do not apply.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Paths {
    #[serde(rename = "baseDir-config")]
    pub base_dir_config: String,
    #[serde(rename = "baseDir-data")]
    pub base_dir_data: String,
    #[serde(rename = "baseDir-userHome")]
    pub base_dir_user_home: String,
    #[serde(rename = "certFile")]
    pub cert_file: String,
    pub config: String,
    pub database: String,
    #[serde(rename = "defFolder")]
    pub def_folder: String,
    #[serde(rename = "httpsCertFile")]
    pub https_cert_file: String,
    #[serde(rename = "httpsKeyFile")]
    pub https_key_file: String,
    #[serde(rename = "logFile")]
    pub log_file: String,
}

impl Paths {
    /// (field name, value) pairs for existence checks.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("baseDir-config", self.base_dir_config.as_str()),
            ("baseDir-data", self.base_dir_data.as_str()),
            ("baseDir-userHome", self.base_dir_user_home.as_str()),
            ("certFile", self.cert_file.as_str()),
            ("config", self.config.as_str()),
            ("database", self.database.as_str()),
            ("defFolder", self.def_folder.as_str()),
            ("httpsCertFile", self.https_cert_file.as_str()),
            ("httpsKeyFile", self.https_key_file.as_str()),
            ("logFile", self.log_file.as_str()),
        ]
        .into_iter()
    }
}
