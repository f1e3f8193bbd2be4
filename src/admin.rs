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

use crate::constants::{NODES_API_PATH, UNKNOWN_INSTALL_REASON};
use crate::dependency::ThirdPartyLibraryNodesDependency;
use crate::error::NodeRedError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Debug, Serialize)]
struct InstallNodesRequest<'a> {
    module: String,
    version: &'a str,
}

/// Error body returned by the admin API, e.g. `{"code": "module_already_loaded", "message": "..."}`.
#[derive(Debug, Deserialize)]
struct AdminErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the admin API of one running Node-RED instance.
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl AdminApiClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_token: Option<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            access_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Installs the dependency through `POST /nodes`. Only `200 OK` counts as success.
    pub async fn install(
        &self,
        dependency: &ThirdPartyLibraryNodesDependency,
    ) -> Result<(), NodeRedError> {
        let url = format!("{}/{}", self.base_url, NODES_API_PATH);
        let payload = InstallNodesRequest {
            module: dependency.module(),
            version: dependency.version(),
        };

        info!("Installing 3rd party dependency: {dependency}...");
        let mut request = self.client.post(&url).json(&payload);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| NodeRedError::HttpRequestFailed {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::OK {
            info!("Installed 3rd party dependency: {dependency}");
            return Ok(());
        }

        let reason = if status == StatusCode::BAD_REQUEST {
            let body = response.bytes().await.unwrap_or_default();
            extract_reason(&body)
        } else {
            UNKNOWN_INSTALL_REASON.to_string()
        };

        error!(
            "Received an invalid HTTP response when installing 3rd party dependency: {dependency}. Status code: {status}, reason: {reason}"
        );
        Err(NodeRedError::InstallFailed {
            module: dependency.module(),
            version: dependency.version().to_string(),
            reason,
        })
    }
}

/// Best-effort: anything but a structured body with a non-blank message yields "unknown".
fn extract_reason(body: &[u8]) -> String {
    serde_json::from_slice::<AdminErrorResponse>(body)
        .ok()
        .and_then(|response| response.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_INSTALL_REASON.to_string())
}
