/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use crate::constants::{DEFAULT_PROBE_INTERVAL, DEFAULT_STARTUP_TIMEOUT, NODE_RED_PORT};
use crate::error::NodeRedError;
use std::ops::Range;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

/// Any status below 500 proves the runtime is serving requests, including the
/// 404 returned for `/` when the editor is disabled.
const READY_STATUS_CODES: Range<u16> = 200..500;

/// HTTP readiness check: `GET <path>` until an accepted status or the startup timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessProbe {
    path: String,
    port: u16,
    accepted: Range<u16>,
    timeout: Duration,
    interval: Duration,
}

impl Default for ReadinessProbe {
    fn default() -> Self {
        Self::new(DEFAULT_STARTUP_TIMEOUT)
    }
}

impl ReadinessProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            path: "/".to_string(),
            port: NODE_RED_PORT,
            accepted: READY_STATUS_CODES,
            timeout,
            interval: DEFAULT_PROBE_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Container port the probe targets; callers resolve its host mapping.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_ready(&self, status: u16) -> bool {
        self.accepted.contains(&status)
    }

    pub async fn wait(&self, client: &reqwest::Client, base_url: &str) -> Result<(), NodeRedError> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        let deadline = Instant::now() + self.timeout;
        let mut attempts = 0u32;
        let mut last_probe = "no response yet".to_string();

        loop {
            attempts += 1;
            let remaining = deadline.saturating_duration_since(Instant::now());
            let request = client.get(&url).timeout(remaining.max(self.interval));
            match request.send().await {
                Ok(response) if self.is_ready(response.status().as_u16()) => {
                    info!(
                        "Node-RED at {url} is ready after {attempts} probe(s), status: {}",
                        response.status()
                    );
                    return Ok(());
                }
                Ok(response) => {
                    last_probe = format!("status {}", response.status());
                }
                Err(error) => {
                    last_probe = format!("error: {error}");
                }
            }
            debug!("Node-RED at {url} isn't ready yet, attempt {attempts}: {last_probe}");

            if Instant::now() + self.interval >= deadline {
                return Err(NodeRedError::StartupTimeout {
                    url,
                    timeout: self.timeout,
                    last_probe,
                });
            }
            sleep(self.interval).await;
        }
    }
}
