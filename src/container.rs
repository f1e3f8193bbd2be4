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
use crate::config::NodeRedConfig;
use crate::configurator::NodeRedConfigurator;
use crate::constants::NODE_RED_PORT;
use crate::error::NodeRedError;
use crate::lifecycle::{Configure, Lifecycle, LifecycleState, NodeRedRequest, OnCreated, OnStarted};
use testcontainers_modules::testcontainers::core::IntoContainerPort;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::{ContainerAsync, GenericImage};
use tracing::{error, info};

/// A running Node-RED instance. Dropping it removes the container.
pub struct NodeRedContainer {
    container: ContainerAsync<GenericImage>,
    configurator: NodeRedConfigurator,
    base_url: String,
    lifecycle: Lifecycle,
}

struct Started {
    container: ContainerAsync<GenericImage>,
    configurator: NodeRedConfigurator,
    base_url: String,
}

impl NodeRedContainer {
    /// Validates, provisions and starts the container, then installs the
    /// requested dependencies. Returns once the instance is operational.
    pub async fn start(config: NodeRedConfig) -> Result<Self, NodeRedError> {
        let mut lifecycle = Lifecycle::default();
        match Self::run(config, &mut lifecycle).await {
            Ok(started) => Ok(Self {
                container: started.container,
                configurator: started.configurator,
                base_url: started.base_url,
                lifecycle,
            }),
            Err(e) => {
                error!(
                    "Failed to start Node-RED container in state: {}. {e}",
                    lifecycle.state()
                );
                lifecycle.fail();
                Err(e)
            }
        }
    }

    async fn run(config: NodeRedConfig, lifecycle: &mut Lifecycle) -> Result<Started, NodeRedError> {
        lifecycle.advance(LifecycleState::Validating)?;
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| {
                NodeRedError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
            })?;
        let image = config.image().clone();
        let configurator = NodeRedConfigurator::new(config, client.clone());

        let (name, tag) = image.runtime_parts();
        let request: NodeRedRequest = GenericImage::new(name, tag)
            .with_exposed_port(NODE_RED_PORT.tcp())
            .into();
        let request = configurator.configure(request).await?;
        let request = configurator.on_created(request).await?;

        lifecycle.advance(LifecycleState::Starting)?;
        info!("Starting Node-RED container: {image}");
        let container = request.start().await?;

        lifecycle.advance(LifecycleState::WaitingReady)?;
        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(NODE_RED_PORT.tcp()).await?;
        let base_url = format!("http://{host}:{port}");
        info!("Node-RED container {} mapped to: {base_url}", container.id());

        configurator
            .readiness_probe()
            .wait(&client, &base_url)
            .await?;
        lifecycle.advance(LifecycleState::Ready)?;

        lifecycle.advance(LifecycleState::InstallingDependencies)?;
        configurator.on_started(&base_url).await?;
        lifecycle.advance(LifecycleState::Operational)?;
        info!("Node-RED container is operational at: {base_url}");

        Ok(Started {
            container,
            configurator,
            base_url,
        })
    }

    /// `http://<host>:<mapped port>` of the Node-RED HTTP endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn admin_client(&self) -> AdminApiClient {
        self.configurator.admin_client(&self.base_url)
    }

    pub fn configurator(&self) -> &NodeRedConfigurator {
        &self.configurator
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn id(&self) -> &str {
        self.container.id()
    }

    pub async fn close(mut self) -> Result<(), NodeRedError> {
        info!("Removing Node-RED container: {}", self.container.id());
        self.lifecycle.advance(LifecycleState::Closed)?;
        self.container.rm().await?;
        Ok(())
    }
}
