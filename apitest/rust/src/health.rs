// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::HarnessError;
use log::info;
use serde::Deserialize;
use std::time::{Duration, Instant};

/// Unauthenticated readiness endpoint.
pub const HEALTH_PATH: &str = "/rest/noauth/health";
pub const STARTUP_TIMEOUT: Duration = Duration::from_secs(30);
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct Health {
    status: String,
}

/// One probe of the health endpoint. Healthy iff the request succeeds
/// and the JSON body reports `status == "OK"`; transport and decode
/// failures both read as "not ready yet".
pub fn probe(agent: &ureq::Agent, base_url: &str) -> bool {
    match agent.get(&format!("{base_url}{HEALTH_PATH}")).call() {
        Ok(resp) => matches!(resp.into_json::<Health>(), Ok(h) if h.status == "OK"),
        Err(_) => false,
    }
}

/// Single-shot convenience probe with its own agent.
pub fn is_healthy(base_url: &str) -> bool {
    let agent = ureq::AgentBuilder::new().timeout(PROBE_TIMEOUT).build();
    probe(&agent, base_url)
}

/// Block until the daemon at `base_url` reports healthy, probing every
/// second for up to 30 seconds. `StartupTimeout` once the deadline
/// passes.
pub fn wait_until_healthy(base_url: &str) -> Result<(), HarnessError> {
    wait_until_healthy_within(base_url, STARTUP_TIMEOUT, POLL_INTERVAL)
}

pub fn wait_until_healthy_within(
    base_url: &str,
    timeout: Duration,
    tick: Duration,
) -> Result<(), HarnessError> {
    let agent = ureq::AgentBuilder::new().timeout(PROBE_TIMEOUT).build();
    let deadline = Instant::now() + timeout;
    loop {
        if probe(&agent, base_url) {
            info!("daemon at {base_url} is healthy");
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(HarnessError::StartupTimeout(timeout));
        }
        std::thread::sleep(tick);
    }
}
