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

use crate::node_red::common::{create_http_client, resource};
use nodered_testcontainers::{NodeRedConfig, NodeRedContainer, Settings, SettingsResolution};
use reqwest::StatusCode;

async fn editor_status(node_red: &NodeRedContainer) -> StatusCode {
    create_http_client()
        .get(node_red.base_url())
        .send()
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn default_instance_should_serve_editor() {
    let node_red = NodeRedContainer::start(NodeRedConfig::builder().build().unwrap())
        .await
        .unwrap();

    assert_eq!(editor_status(&node_red).await, StatusCode::OK);
}

#[tokio::test]
async fn settings_object_should_disable_editor() {
    let config = NodeRedConfig::builder()
        .settings(Settings::builder().disable_editor(true).build())
        .credential_secret("integration-tests")
        .build()
        .unwrap();
    let node_red = NodeRedContainer::start(config).await.unwrap();

    assert_eq!(
        node_red.configurator().settings_resolution(),
        SettingsResolution::Generated
    );
    assert_eq!(editor_status(&node_red).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn raw_settings_file_should_take_precedence() {
    let config = NodeRedConfig::builder()
        .settings_js(resource("settings_disable_editor.js"))
        .settings(Settings::builder().disable_editor(false).build())
        .build()
        .unwrap();
    let node_red = NodeRedContainer::start(config).await.unwrap();

    assert_eq!(
        node_red.configurator().settings_resolution(),
        SettingsResolution::RawFile
    );
    assert_eq!(editor_status(&node_red).await, StatusCode::NOT_FOUND);
}
