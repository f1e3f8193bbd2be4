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

#![cfg_attr(not(feature = "docker-tests"), allow(dead_code))]

use reqwest_middleware::ClientWithMiddleware as HttpClient;
use reqwest_retry::RetryTransientMiddleware;
use reqwest_retry::policies::ExponentialBackoff;
use std::path::PathBuf;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CATALOGUE_PATH: &str = "/catalogue.json";

pub fn resource(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources")
        .join(file_name)
}

pub fn unique_network() -> String {
    format!("node-red-testcontainers-{}", Uuid::now_v7())
}

pub fn create_http_client() -> HttpClient {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client");
    reqwest_middleware::ClientBuilder::new(client)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}

/// Serves a catalogue listing only the given module ids.
pub async fn start_catalogue(ids: &[&str]) -> MockServer {
    let server = MockServer::start().await;
    let modules = ids
        .iter()
        .map(|id| serde_json::json!({"id": id, "types": []}))
        .collect::<Vec<_>>();
    Mock::given(method("GET"))
        .and(path(CATALOGUE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"modules": modules})),
        )
        .mount(&server)
        .await;
    server
}

pub fn catalogue_url(server: &MockServer) -> String {
    format!("{}{CATALOGUE_PATH}", server.uri())
}
