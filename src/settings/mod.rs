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

//! Object representation of Node-RED's `settings.js`.
//!
//! Every field defaults to the value Node-RED ships with, so a default
//! [`Settings`] behaves like an instance started without a settings file.
//! Optional fields that are left unset are omitted from the rendered file
//! and Node-RED applies its own default for them.
//!
//! ```ignore
//! use nodered_testcontainers::settings::Settings;
//!
//! let settings = Settings::builder().disable_editor(true).build();
//! ```

mod editor_theme;
mod external_modules;
mod render;

pub use editor_theme::{
    CodeEditor, CodeEditorLib, CodeEditorOptions, EditorPalette, EditorTheme, Projects, Workflow,
    WorkflowMode,
};
pub use external_modules::{ExternalModules, ModulesPolicy, PalettePolicy};
pub use render::{InternalSettings, parse_settings, render_settings};

use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// The file containing the flows.
    #[builder(into, default = "flows.json".to_string())]
    pub flow_file: String,
    /// Pretty-print the flow JSON over multiple lines.
    #[builder(default = true)]
    pub flow_file_pretty: bool,
    /// Key used to encrypt the flow credentials file.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_secret: Option<String>,
    #[builder(default = 1880)]
    pub ui_port: u16,
    /// Maximum size of HTTP request accepted by the runtime api.
    #[builder(into, default = "5mb".to_string())]
    pub api_max_length: String,
    /// Cross-origin resource sharing for the HTTP nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_node_cors: Option<HttpNodeCors>,
    /// Editor language, e.g. `en-US`, `ja`, `de`.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[builder(default)]
    pub logging: Logging,
    /// List `functionGlobalContext` keys in `global.keys()`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_global_context_keys: Option<bool>,
    #[builder(default)]
    pub external_modules: ExternalModules,
    /// Disables the editor. The admin API is not affected.
    #[builder(default)]
    pub disable_editor: bool,
    #[builder(default)]
    pub editor_theme: EditorTheme,
    /// Allow the Function node to load additional npm modules.
    #[builder(default = true)]
    pub function_external_modules: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_message_buffer_max_length: Option<u32>,
    #[builder(default = 1000)]
    pub debug_max_length: u32,
    #[builder(default = 10_000_000)]
    pub exec_max_buffer_size: u64,
    #[builder(default = 120_000)]
    pub http_request_timeout: u64,
    #[builder(default = 15_000)]
    pub mqtt_reconnect_time: u64,
    #[builder(default = 15_000)]
    pub serial_reconnect_time: u64,
    #[builder(default = 10_000)]
    pub socket_reconnect_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_timeout: Option<u64>,
    #[builder(default = 1000)]
    pub tcp_msg_queue_size: u64,
    #[builder(default = 5000)]
    pub inbound_web_socket_timeout: u64,
    /// Forbid local files for keys and certificates in the TLS configuration node.
    #[builder(default = true)]
    pub tls_config_disable_local_files: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct HttpNodeCors {
    #[builder(into, default = "*".to_string())]
    pub origin: String,
    #[builder(into, default = "GET,PUT,POST,DELETE".to_string())]
    pub methods: String,
}

impl Default for HttpNodeCors {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Only console logging is supported by Node-RED.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct Logging {
    #[builder(default)]
    pub console: ConsoleLogging,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct ConsoleLogging {
    #[builder(default)]
    pub level: LogLevel,
    #[builder(default)]
    pub metrics: bool,
    #[builder(default)]
    pub audit: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}
