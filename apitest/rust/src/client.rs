// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::error::HarnessError;
use std::time::Duration;

pub const API_KEY_HEADER: &str = "X-API-Key";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Authenticated REST client for one daemon instance.
///
/// Every call attaches the API key header and performs exactly one
/// network request — no retries. Responses are returned raw for any
/// HTTP status; only transport-level failures are errors.
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// `address` is the bare `host:port` from the daemon config.
    pub fn new(address: &str, api_key: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            base_url: format!("http://{address}"),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> Result<ureq::Response, HarnessError> {
        self.send(self.agent.get(&self.url(path)), None)
    }

    pub fn post(&self, path: &str) -> Result<ureq::Response, HarnessError> {
        self.send(self.agent.post(&self.url(path)), None)
    }

    /// POST with a literal string body (the error endpoint takes the
    /// message as the raw request body).
    pub fn post_string(&self, path: &str, body: &str) -> Result<ureq::Response, HarnessError> {
        self.send(self.agent.post(&self.url(path)), Some(body))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send(
        &self,
        request: ureq::Request,
        body: Option<&str>,
    ) -> Result<ureq::Response, HarnessError> {
        let request = request.set(API_KEY_HEADER, &self.api_key);
        let result = match body {
            Some(body) => request.send_string(body),
            None => request.call(),
        };
        match result {
            Ok(resp) => Ok(resp),
            // Non-2xx still carries a usable response; callers assert
            // on the status code themselves.
            Err(ureq::Error::Status(_, resp)) => Ok(resp),
            Err(e) => Err(HarnessError::Transport(e.to_string())),
        }
    }
}
