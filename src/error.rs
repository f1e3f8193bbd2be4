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

use crate::lifecycle::LifecycleState;
use std::path::PathBuf;
use std::time::Duration;
use testcontainers_modules::testcontainers::TestcontainersError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeRedError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("{image} isn't compatible with {expected}")]
    IncompatibleImage { image: String, expected: String },
    #[error("Duplicate 3rd party dependencies: {}", .0.join(", "))]
    DuplicateDependencies(Vec<String>),
    #[error("3rd party dependency {0} was not found in the Node-RED catalogue")]
    UnknownDependency(String),
    #[error("Failed to read file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Node-RED at {url} wasn't ready within {timeout:?}, last probe: {last_probe}")]
    StartupTimeout {
        url: String,
        timeout: Duration,
        last_probe: String,
    },
    #[error("3rd party dependency {module}@{version} can't be installed. Reason: {reason}")]
    InstallFailed {
        module: String,
        version: String,
        reason: String,
    },
    #[error("HTTP request to {url} failed: {source}")]
    HttpRequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Container error: {0}")]
    Container(#[from] TestcontainersError),
    #[error("Invalid lifecycle transition from {from} to {to}")]
    InvalidTransition {
        from: LifecycleState,
        to: LifecycleState,
    },
}

impl NodeRedError {
    pub fn as_code(&self) -> &'static str {
        match self {
            NodeRedError::InvalidConfiguration(_)
            | NodeRedError::IncompatibleImage { .. }
            | NodeRedError::DuplicateDependencies(_)
            | NodeRedError::UnknownDependency(_)
            | NodeRedError::FileRead { .. }
            | NodeRedError::Json(_) => "invalid_configuration",
            NodeRedError::StartupTimeout { .. } => "startup_timeout",
            NodeRedError::InstallFailed { .. } => "install_failed",
            NodeRedError::HttpRequestFailed { .. }
            | NodeRedError::UnexpectedStatus { .. }
            | NodeRedError::Decode { .. } => "http",
            NodeRedError::Container(_) => "container",
            NodeRedError::InvalidTransition { .. } => "invalid_state",
        }
    }

    /// Errors raised before any container resource is committed.
    pub fn is_configuration_error(&self) -> bool {
        self.as_code() == "invalid_configuration"
    }
}
