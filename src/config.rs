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

use crate::constants::{DEFAULT_HTTP_TIMEOUT, DEFAULT_STARTUP_TIMEOUT, NODE_RED_CATALOGUE_URL};
use crate::dependency::{self, ThirdPartyLibraryNodesDependency};
use crate::error::NodeRedError;
use crate::image::ImageName;
use crate::settings::Settings;
use bon::bon;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How the instance receives its flows and editor switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProvisioningMode {
    /// Canonical `flows.json` plus an optional `settings.js`.
    #[default]
    SettingsFile,
    /// Flows under a dedicated name announced through `FLOWS`, editor toggled
    /// through `NODE_RED_DISABLE_EDITOR`. Settings files are still honoured.
    Environment,
}

/// Options of one Node-RED container, validated as a whole by `build()`.
///
/// ```ignore
/// let config = NodeRedConfig::builder()
///     .flows_json("tests/resources/flows_jsonplaceholder_posts.json")
///     .settings(Settings::builder().disable_editor(true).build())
///     .node_options("--max-old-space-size=1024")
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct NodeRedConfig {
    image: ImageName,
    flows_json: Option<PathBuf>,
    flows_cred_json: Option<PathBuf>,
    settings_js: Option<PathBuf>,
    settings: Option<Settings>,
    pretty_print_settings: bool,
    dependencies: Vec<ThirdPartyLibraryNodesDependency>,
    validate_dependencies: bool,
    credential_secret: Option<String>,
    node_options: Option<String>,
    startup_timeout: Duration,
    network: Option<String>,
    provisioning_mode: ProvisioningMode,
    disable_editor: bool,
    admin_access_token: Option<String>,
    catalogue_url: String,
    http_timeout: Duration,
}

#[bon]
impl NodeRedConfig {
    #[builder]
    pub fn new(
        #[builder(default)] image: ImageName,
        #[builder(into)] flows_json: Option<PathBuf>,
        #[builder(into)] flows_cred_json: Option<PathBuf>,
        // Raw `settings.js`, copied verbatim. Takes precedence over `settings`.
        #[builder(into)]
        settings_js: Option<PathBuf>,
        settings: Option<Settings>,
        #[builder(default = true)] pretty_print_settings: bool,
        #[builder(default)] dependencies: Vec<ThirdPartyLibraryNodesDependency>,
        #[builder(default = true)] validate_dependencies: bool,
        #[builder(into)] credential_secret: Option<String>,
        #[builder(into)] node_options: Option<String>,
        #[builder(default = DEFAULT_STARTUP_TIMEOUT)] startup_timeout: Duration,
        // Docker network shared with other fixtures of the same test.
        #[builder(into)]
        network: Option<String>,
        #[builder(default)] provisioning_mode: ProvisioningMode,
        #[builder(default)] disable_editor: bool,
        // Bearer token for instances protected by `adminAuth`.
        #[builder(into)]
        admin_access_token: Option<String>,
        #[builder(into, default = NODE_RED_CATALOGUE_URL.to_string())] catalogue_url: String,
        #[builder(default = DEFAULT_HTTP_TIMEOUT)] http_timeout: Duration,
    ) -> Result<Self, NodeRedError> {
        image.ensure_node_red()?;
        dependency::ensure_unique(&dependencies)?;

        if startup_timeout.is_zero() {
            return Err(NodeRedError::InvalidConfiguration(
                "Startup timeout must be greater than zero".to_string(),
            ));
        }

        if catalogue_url.trim().is_empty() {
            return Err(NodeRedError::InvalidConfiguration(
                "Catalogue URL can't be blank".to_string(),
            ));
        }

        Ok(Self {
            image,
            flows_json: non_empty_path(flows_json),
            flows_cred_json: non_empty_path(flows_cred_json),
            settings_js: non_empty_path(settings_js),
            settings,
            pretty_print_settings,
            dependencies,
            validate_dependencies,
            credential_secret: non_blank(credential_secret),
            node_options: non_blank(node_options),
            startup_timeout,
            network: non_blank(network),
            provisioning_mode,
            disable_editor,
            admin_access_token: non_blank(admin_access_token),
            catalogue_url,
            http_timeout,
        })
    }
}

impl NodeRedConfig {
    pub fn image(&self) -> &ImageName {
        &self.image
    }

    pub fn flows_json(&self) -> Option<&Path> {
        self.flows_json.as_deref()
    }

    pub fn flows_cred_json(&self) -> Option<&Path> {
        self.flows_cred_json.as_deref()
    }

    pub fn settings_js(&self) -> Option<&Path> {
        self.settings_js.as_deref()
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn pretty_print_settings(&self) -> bool {
        self.pretty_print_settings
    }

    pub fn dependencies(&self) -> &[ThirdPartyLibraryNodesDependency] {
        &self.dependencies
    }

    pub fn validate_dependencies(&self) -> bool {
        self.validate_dependencies
    }

    pub fn credential_secret(&self) -> Option<&str> {
        self.credential_secret.as_deref()
    }

    pub fn node_options(&self) -> Option<&str> {
        self.node_options.as_deref()
    }

    pub fn startup_timeout(&self) -> Duration {
        self.startup_timeout
    }

    pub fn network(&self) -> Option<&str> {
        self.network.as_deref()
    }

    pub fn provisioning_mode(&self) -> ProvisioningMode {
        self.provisioning_mode
    }

    pub fn disable_editor(&self) -> bool {
        self.disable_editor
    }

    pub fn admin_access_token(&self) -> Option<&str> {
        self.admin_access_token.as_deref()
    }

    pub fn catalogue_url(&self) -> &str {
        &self.catalogue_url
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn non_empty_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|path| !path.as_os_str().is_empty())
}
