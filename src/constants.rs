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

use std::time::Duration;

pub const NODE_RED_IMAGE: &str = "nodered/node-red";
pub const NODE_RED_TAG: &str = "latest";
pub const NODE_RED_PORT: u16 = 1880;

pub const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_millis(500);

pub const DATA_DIR: &str = "/data";
pub const FLOWS_JSON_FILE_NAME: &str = "flows.json";
pub const FLOWS_CRED_JSON_FILE_NAME: &str = "flows_cred.json";
pub const SETTINGS_JS_FILE_NAME: &str = "settings.js";
/// Flows file name used when the instance is provisioned through environment variables.
pub const LEGACY_FLOWS_JSON_FILE_NAME: &str = "node-red-testcontainers_flows.json";

pub const NODE_RED_CATALOGUE_URL: &str = "https://catalogue.nodered.org/catalogue.json";
pub const NODES_API_PATH: &str = "nodes";
pub const DEFAULT_DEPENDENCY_VERSION: &str = "latest";
pub const UNKNOWN_INSTALL_REASON: &str = "unknown";

pub const ENV_NODE_RED_CREDENTIAL_SECRET: &str = "NODE_RED_CREDENTIAL_SECRET";
pub const ENV_NODE_OPTIONS: &str = "NODE_OPTIONS";
pub const ENV_NODE_RED_DISABLE_EDITOR: &str = "NODE_RED_DISABLE_EDITOR";
pub const ENV_FLOWS: &str = "FLOWS";

/// Absolute path of a file inside the Node-RED user directory.
pub fn data_path(file_name: &str) -> String {
    format!("{DATA_DIR}/{file_name}")
}
