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

use crate::error::NodeRedError;
use serde::Deserialize;
use tracing::{debug, info};

/// The public registry of installable Node-RED node packages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeRedCatalogue {
    #[serde(default)]
    pub modules: Option<Vec<CatalogueModule>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogueModule {
    pub id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CatalogueClient {
    client: reqwest::Client,
    url: String,
}

impl CatalogueClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads the catalogue. Never cached and never retried: an unreachable
    /// catalogue fails the fixture instead of silently skipping validation.
    pub async fn fetch_modules(&self) -> Result<Vec<CatalogueModule>, NodeRedError> {
        debug!("Fetching Node-RED catalogue from: {}", self.url);
        let response = self.client.get(&self.url).send().await.map_err(|source| {
            NodeRedError::HttpRequestFailed {
                url: self.url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NodeRedError::UnexpectedStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| NodeRedError::HttpRequestFailed {
                url: self.url.clone(),
                source,
            })?;

        let catalogue: NodeRedCatalogue =
            serde_json::from_str(&body).map_err(|source| NodeRedError::Decode {
                url: self.url.clone(),
                source,
            })?;

        let modules = catalogue.modules.unwrap_or_default();
        info!("Fetched {} modules from Node-RED catalogue", modules.len());
        Ok(modules)
    }
}
