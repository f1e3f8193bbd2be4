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

use crate::node_red::common::{create_http_client, resource, unique_network};
use nodered_testcontainers::{
    LifecycleState, NodeRedConfig, NodeRedContainer, ProvisioningMode, SettingsResolution,
};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn injected_flows_should_serve_posts() {
    let config = NodeRedConfig::builder()
        .flows_json(resource("flows_jsonplaceholder_posts.json"))
        .build()
        .unwrap();
    let node_red = NodeRedContainer::start(config).await.unwrap();
    assert_eq!(node_red.state(), LifecycleState::Operational);
    assert_eq!(
        node_red.configurator().settings_resolution(),
        SettingsResolution::TargetDefaults
    );

    let response = create_http_client()
        .get(format!("{}/posts", node_red.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let posts = response.json::<Vec<Value>>().await.unwrap();
    assert!(!posts.is_empty());

    node_red.close().await.unwrap();
}

#[tokio::test]
async fn environment_provisioning_should_load_flows_and_disable_editor() {
    let config = NodeRedConfig::builder()
        .provisioning_mode(ProvisioningMode::Environment)
        .disable_editor(true)
        .flows_json(resource("flows_hello.json"))
        .network(unique_network())
        .build()
        .unwrap();
    let node_red = NodeRedContainer::start(config).await.unwrap();
    let client = create_http_client();

    let hello = client
        .get(format!("{}/hello", node_red.base_url()))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    let editor = client.get(node_red.base_url()).send().await.unwrap();

    assert_eq!(hello["message"], "hello");
    assert_eq!(editor.status(), StatusCode::NOT_FOUND);
}
