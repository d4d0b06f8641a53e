// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::HarnessError;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.xml";

/// Where to reach the daemon's REST interface and how to authenticate.
/// Extracted once from the home directory's config file; immutable.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    /// Bare `host:port` GUI listen address.
    pub address: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
struct Configuration {
    gui: Gui,
    #[serde(default, rename = "device")]
    devices: Vec<DeviceElement>,
    #[serde(default, rename = "folder")]
    folders: Vec<FolderElement>,
}

#[derive(Debug, Deserialize)]
struct Gui {
    address: String,
    apikey: String,
}

#[derive(Debug, Deserialize)]
struct DeviceElement {
    #[serde(rename = "@id")]
    id: String,
}

#[derive(Debug, Deserialize)]
struct FolderElement {
    #[serde(default, rename = "device")]
    devices: Vec<DeviceElement>,
}

/// Read the GUI listen address and API key from `<home>/config.xml`.
///
/// A missing or unreadable file is `ConfigUnreadable`; a file that does
/// not parse as the expected XML shape is `ConfigMalformed`. No retry.
pub fn read_connection_info(home: &Path) -> Result<ConnectionInfo, HarnessError> {
    let config = parse_config(home)?;
    Ok(ConnectionInfo {
        address: config.gui.address,
        api_key: config.gui.apikey,
    })
}

/// First device ID declared in the config: root-level `<device>`
/// elements take precedence, then devices nested under `<folder>`.
pub fn first_device_id(home: &Path) -> Result<Option<String>, HarnessError> {
    let config = parse_config(home)?;
    if let Some(device) = config.devices.into_iter().next() {
        return Ok(Some(device.id));
    }
    Ok(config
        .folders
        .into_iter()
        .flat_map(|f| f.devices)
        .next()
        .map(|d| d.id))
}

fn parse_config(home: &Path) -> Result<Configuration, HarnessError> {
    let path = home.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path).map_err(HarnessError::ConfigUnreadable)?;
    quick_xml::de::from_str(&contents).map_err(|e| HarnessError::ConfigMalformed(e.to_string()))
}
