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

use crate::node_red::common::{catalogue_url, resource, start_catalogue};
use nodered_testcontainers::{
    NodeRedConfig, NodeRedContainer, NodeRedError, ThirdPartyLibraryNodesDependency,
};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn unknown_dependency_should_fail_before_container_is_created() {
    let catalogue = start_catalogue(&["node-red-contrib-moment"]).await;
    let config = NodeRedConfig::builder()
        .catalogue_url(catalogue_url(&catalogue))
        .dependencies(vec![
            ThirdPartyLibraryNodesDependency::new("node-red-contrib-moment"),
            ThirdPartyLibraryNodesDependency::new("node-red-contrib-not-in-catalogue"),
        ])
        .build()
        .unwrap();

    let error = NodeRedContainer::start(config).await.err().unwrap();

    assert!(error.is_configuration_error());
    assert_eq!(
        error.to_string(),
        "3rd party dependency node-red-contrib-not-in-catalogue was not found in the Node-RED catalogue"
    );
    assert_eq!(catalogue.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_catalogue_should_fail_start() {
    let catalogue = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&catalogue)
        .await;
    let config = NodeRedConfig::builder()
        .catalogue_url(catalogue_url(&catalogue))
        .dependencies(vec![ThirdPartyLibraryNodesDependency::new(
            "node-red-contrib-moment",
        )])
        .build()
        .unwrap();

    let error = NodeRedContainer::start(config).await.err().unwrap();

    assert!(matches!(
        error,
        NodeRedError::UnexpectedStatus { status: 502, .. }
    ));
}

#[tokio::test]
async fn missing_flows_file_should_fail_before_container_is_created() {
    let config = NodeRedConfig::builder()
        .flows_json(resource("flows_missing.json"))
        .build()
        .unwrap();

    let error = NodeRedContainer::start(config).await.err().unwrap();

    assert!(matches!(error, NodeRedError::FileRead { .. }));
}

#[test]
fn duplicate_dependencies_should_be_reported_together() {
    let error = NodeRedConfig::builder()
        .dependencies(vec![
            ThirdPartyLibraryNodesDependency::new("node-red-node-mysql"),
            ThirdPartyLibraryNodesDependency::new("node-red-contrib-moment"),
            ThirdPartyLibraryNodesDependency::new("node-red-node-mysql"),
            ThirdPartyLibraryNodesDependency::builder()
                .name("node-red-contrib-moment")
                .version("4.0.0")
                .build(),
        ])
        .build()
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Duplicate 3rd party dependencies: node-red-contrib-moment, node-red-node-mysql"
    );
}

#[test]
fn foreign_image_should_be_rejected() {
    let error = NodeRedConfig::builder()
        .image("postgres:17".parse().unwrap())
        .build()
        .unwrap_err();

    assert_eq!(error.as_code(), "invalid_configuration");
}
