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

use super::Settings;
use crate::error::NodeRedError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const MODULE_EXPORTS_PREFIX: &str = "module.exports =";

/// Shape of the `settings.js` written into the container: the user's
/// [`Settings`] plus an always-empty `functionGlobalContext`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalSettings {
    #[serde(flatten)]
    pub settings: Settings,
    #[serde(default)]
    pub function_global_context: Map<String, Value>,
}

impl From<&Settings> for InternalSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            function_global_context: Map::new(),
        }
    }
}

/// Renders `settings` as a `module.exports = {...};` Node.js module.
pub fn render_settings(settings: &Settings, pretty: bool) -> Result<String, NodeRedError> {
    let internal = InternalSettings::from(settings);
    let json = if pretty {
        serde_json::to_string_pretty(&internal)?
    } else {
        serde_json::to_string(&internal)?
    };
    Ok(format!("{MODULE_EXPORTS_PREFIX} {json};\n"))
}

/// Reads back a settings module produced by [`render_settings`].
pub fn parse_settings(module: &str) -> Result<InternalSettings, NodeRedError> {
    let json = module
        .trim()
        .strip_prefix(MODULE_EXPORTS_PREFIX)
        .ok_or_else(|| {
            NodeRedError::InvalidConfiguration(format!(
                "Settings module must start with '{MODULE_EXPORTS_PREFIX}'"
            ))
        })?
        .trim_end()
        .trim_end_matches(';');
    Ok(serde_json::from_str(json)?)
}
