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

use crate::admin::AdminApiClient;
use crate::catalogue::CatalogueClient;
use crate::config::{NodeRedConfig, ProvisioningMode};
use crate::constants::{
    ENV_FLOWS, ENV_NODE_OPTIONS, ENV_NODE_RED_CREDENTIAL_SECRET, ENV_NODE_RED_DISABLE_EDITOR,
    FLOWS_CRED_JSON_FILE_NAME, FLOWS_JSON_FILE_NAME, LEGACY_FLOWS_JSON_FILE_NAME,
    SETTINGS_JS_FILE_NAME, data_path,
};
use crate::error::NodeRedError;
use crate::lifecycle::{Configure, NodeRedRequest, OnCreated, OnStarted};
use crate::probe::ReadinessProbe;
use crate::settings::render_settings;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use testcontainers_modules::testcontainers::ImageExt;
use tracing::{debug, info, warn};

/// Which source ends up as `/data/settings.js`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsResolution {
    /// The configured `settings.js` file, copied verbatim.
    RawFile,
    /// The configured [`Settings`](crate::Settings) rendered as a Node.js module.
    Generated,
    /// Nothing is written, the image defaults apply.
    TargetDefaults,
}

/// A file copied into the container before its first boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedFile {
    pub target: String,
    pub contents: Vec<u8>,
}

/// Turns a [`NodeRedConfig`] into container environment, files and
/// post-start dependency installs.
#[derive(Debug, Clone)]
pub struct NodeRedConfigurator {
    config: NodeRedConfig,
    client: reqwest::Client,
    catalogue: CatalogueClient,
}

impl NodeRedConfigurator {
    pub fn new(config: NodeRedConfig, client: reqwest::Client) -> Self {
        let catalogue = CatalogueClient::new(client.clone(), config.catalogue_url());
        Self {
            config,
            client,
            catalogue,
        }
    }

    pub fn config(&self) -> &NodeRedConfig {
        &self.config
    }

    pub fn readiness_probe(&self) -> ReadinessProbe {
        ReadinessProbe::new(self.config.startup_timeout())
    }

    pub fn settings_resolution(&self) -> SettingsResolution {
        if self.config.settings_js().is_some() {
            SettingsResolution::RawFile
        } else if self.config.settings().is_some() {
            SettingsResolution::Generated
        } else {
            SettingsResolution::TargetDefaults
        }
    }

    pub fn admin_client(&self, base_url: &str) -> AdminApiClient {
        AdminApiClient::new(
            self.client.clone(),
            base_url,
            self.config.admin_access_token().map(str::to_string),
        )
    }

    /// Checks every requested dependency against the catalogue, in declared
    /// order. The first module missing from the catalogue fails validation.
    pub async fn validate_dependencies(&self) -> Result<(), NodeRedError> {
        let dependencies = self.config.dependencies();
        if !self.config.validate_dependencies() || dependencies.is_empty() {
            return Ok(());
        }

        let modules = self.catalogue.fetch_modules().await?;
        let known = modules
            .iter()
            .map(|module| module.id.as_str())
            .collect::<HashSet<_>>();

        for dependency in dependencies {
            let module = dependency.module();
            if !known.contains(module.as_str()) {
                warn!("3rd party dependency: {dependency} was not found in the Node-RED catalogue");
                return Err(NodeRedError::UnknownDependency(module));
            }
            debug!("3rd party dependency: {dependency} found in the Node-RED catalogue");
        }
        Ok(())
    }

    /// Environment variables set on the container.
    pub fn environment(&self) -> Vec<(&'static str, String)> {
        let mut environment = Vec::new();
        if let Some(secret) = self.config.credential_secret() {
            environment.push((ENV_NODE_RED_CREDENTIAL_SECRET, secret.to_string()));
        }
        if let Some(options) = self.config.node_options() {
            environment.push((ENV_NODE_OPTIONS, options.to_string()));
        }
        if self.config.provisioning_mode() == ProvisioningMode::Environment {
            environment.push((
                ENV_NODE_RED_DISABLE_EDITOR,
                self.config.disable_editor().to_string(),
            ));
            if self.config.flows_json().is_some() {
                environment.push((ENV_FLOWS, LEGACY_FLOWS_JSON_FILE_NAME.to_string()));
            }
        }
        environment
    }

    fn flows_file_name(&self) -> &'static str {
        match self.config.provisioning_mode() {
            ProvisioningMode::SettingsFile => FLOWS_JSON_FILE_NAME,
            ProvisioningMode::Environment => LEGACY_FLOWS_JSON_FILE_NAME,
        }
    }

    /// Reads and renders every file copied into `/data`.
    pub async fn files(&self) -> Result<Vec<InjectedFile>, NodeRedError> {
        let mut files = Vec::new();
        if let Some(path) = self.config.flows_json() {
            files.push(InjectedFile {
                target: data_path(self.flows_file_name()),
                contents: read_file(path).await?,
            });
        }
        if let Some(path) = self.config.flows_cred_json() {
            files.push(InjectedFile {
                target: data_path(FLOWS_CRED_JSON_FILE_NAME),
                contents: read_file(path).await?,
            });
        }

        let settings = match (self.config.settings_js(), self.config.settings()) {
            (Some(path), _) => Some(read_file(path).await?),
            (None, Some(settings)) => Some(
                render_settings(settings, self.config.pretty_print_settings())?.into_bytes(),
            ),
            (None, None) => None,
        };
        if let Some(contents) = settings {
            files.push(InjectedFile {
                target: data_path(SETTINGS_JS_FILE_NAME),
                contents,
            });
        }
        Ok(files)
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, NodeRedError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| NodeRedError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

#[async_trait]
impl Configure for NodeRedConfigurator {
    async fn configure(&self, request: NodeRedRequest) -> Result<NodeRedRequest, NodeRedError> {
        self.validate_dependencies().await?;

        if self.config.settings_js().is_some() && self.config.settings().is_some() {
            warn!(
                "Both settings.js file and settings object were provided, the settings object will be ignored"
            );
        }
        if self.config.disable_editor()
            && self.config.provisioning_mode() == ProvisioningMode::SettingsFile
        {
            warn!(
                "disable_editor is only applied with environment provisioning, use a settings object with disable_editor instead"
            );
        }

        let mut request = request;
        for (name, value) in self.environment() {
            request = request.with_env_var(name, value);
        }
        if let Some(network) = self.config.network() {
            info!("Node-RED container will join network: {network}");
            request = request.with_network(network);
        }
        Ok(request)
    }
}

#[async_trait]
impl OnCreated for NodeRedConfigurator {
    async fn on_created(&self, request: NodeRedRequest) -> Result<NodeRedRequest, NodeRedError> {
        let mut request = request;
        for file in self.files().await? {
            debug!(
                "Copying {} bytes into Node-RED container: {}",
                file.contents.len(),
                file.target
            );
            request = request.with_copy_to(file.target, file.contents);
        }
        debug!(
            "Node-RED settings resolution: {:?}",
            self.settings_resolution()
        );
        Ok(request)
    }
}

#[async_trait]
impl OnStarted for NodeRedConfigurator {
    async fn on_started(&self, base_url: &str) -> Result<(), NodeRedError> {
        let dependencies = self.config.dependencies();
        if dependencies.is_empty() {
            return Ok(());
        }

        info!(
            "Installing {} 3rd party dependencies into Node-RED at {base_url}",
            dependencies.len()
        );
        let admin = self.admin_client(base_url);
        for dependency in dependencies {
            admin.install(dependency).await?;
        }
        Ok(())
    }
}
