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

use crate::node_red::common::create_http_client;
use nodered_testcontainers::{
    LifecycleState, NodeRedConfig, NodeRedContainer, ThirdPartyLibraryNodesDependency,
};
use serde_json::Value;

#[tokio::test]
async fn catalogue_dependency_should_be_installed() {
    let config = NodeRedConfig::builder()
        .dependencies(vec![ThirdPartyLibraryNodesDependency::new(
            "node-red-contrib-moment",
        )])
        .build()
        .unwrap();
    let node_red = NodeRedContainer::start(config).await.unwrap();
    assert_eq!(node_red.state(), LifecycleState::Operational);

    let node_sets = create_http_client()
        .get(format!("{}/nodes", node_red.base_url()))
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap()
        .json::<Vec<Value>>()
        .await
        .unwrap();

    assert!(
        node_sets
            .iter()
            .any(|node_set| node_set["module"] == "node-red-contrib-moment")
    );
    node_red.close().await.unwrap();
}
