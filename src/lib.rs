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

//! Disposable Node-RED instances for integration tests.
//!
//! A [`NodeRedContainer`] is started from a validated [`NodeRedConfig`]:
//! requested node packages are checked against the public catalogue, flows,
//! credentials and settings are copied into `/data`, and once the instance
//! answers HTTP requests the packages are installed through the admin API.
//!
//! ```ignore
//! use nodered_testcontainers::{NodeRedConfig, NodeRedContainer, ThirdPartyLibraryNodesDependency};
//!
//! let config = NodeRedConfig::builder()
//!     .flows_json("tests/resources/flows_jsonplaceholder_posts.json")
//!     .dependencies(vec![ThirdPartyLibraryNodesDependency::new("node-red-contrib-moment")])
//!     .build()?;
//! let node_red = NodeRedContainer::start(config).await?;
//! let posts = reqwest::get(format!("{}/posts", node_red.base_url())).await?;
//! ```

pub mod admin;
pub mod catalogue;
pub mod config;
pub mod configurator;
pub mod constants;
pub mod container;
pub mod dependency;
pub mod error;
pub mod image;
pub mod lifecycle;
pub mod probe;
pub mod settings;

pub use admin::AdminApiClient;
pub use catalogue::{CatalogueClient, CatalogueModule, NodeRedCatalogue};
pub use config::{NodeRedConfig, ProvisioningMode};
pub use configurator::{InjectedFile, NodeRedConfigurator, SettingsResolution};
pub use container::NodeRedContainer;
pub use dependency::ThirdPartyLibraryNodesDependency;
pub use error::NodeRedError;
pub use image::ImageName;
pub use lifecycle::{Configure, Lifecycle, LifecycleState, NodeRedRequest, OnCreated, OnStarted};
pub use probe::ReadinessProbe;
pub use settings::Settings;
