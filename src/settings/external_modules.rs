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

use bon::Builder;
use serde::{Deserialize, Serialize};

fn wildcard() -> Vec<String> {
    vec!["*".to_string()]
}

/// How the runtime handles external npm modules: palette installs from the
/// editor and modules loaded dynamically by Function nodes. Allow and deny
/// lists accept `*` as a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalModules {
    #[builder(default)]
    pub auto_install: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_install_retry: Option<u32>,
    #[builder(default)]
    pub palette: PalettePolicy,
    #[builder(default)]
    pub modules: ModulesPolicy,
}

impl Default for ExternalModules {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct PalettePolicy {
    #[builder(default = true)]
    pub allow_install: bool,
    #[builder(default = true)]
    pub allow_update: bool,
    #[builder(default = true)]
    pub allow_upload: bool,
    #[builder(default = wildcard())]
    pub allow_list: Vec<String>,
    #[builder(default)]
    pub deny_list: Vec<String>,
    #[builder(default = wildcard())]
    pub allow_update_list: Vec<String>,
    #[builder(default)]
    pub deny_update_list: Vec<String>,
}

impl Default for PalettePolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct ModulesPolicy {
    #[builder(default = true)]
    pub allow_install: bool,
    #[builder(default = wildcard())]
    pub allow_list: Vec<String>,
    #[builder(default)]
    pub deny_list: Vec<String>,
}

impl Default for ModulesPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_policy_should_allow_everything() {
        let value = serde_json::to_value(ExternalModules::default()).unwrap();

        assert_eq!(
            value,
            json!({
                "autoInstall": false,
                "palette": {
                    "allowInstall": true,
                    "allowUpdate": true,
                    "allowUpload": true,
                    "allowList": ["*"],
                    "denyList": [],
                    "allowUpdateList": ["*"],
                    "denyUpdateList": []
                },
                "modules": {
                    "allowInstall": true,
                    "allowList": ["*"],
                    "denyList": []
                }
            })
        );
    }

    #[test]
    fn deny_lists_should_be_kept() {
        let modules = ExternalModules::builder()
            .auto_install(true)
            .auto_install_retry(3)
            .modules(
                ModulesPolicy::builder()
                    .deny_list(vec!["node-red-contrib-*".to_string()])
                    .build(),
            )
            .build();

        let value = serde_json::to_value(&modules).unwrap();

        assert_eq!(value["autoInstallRetry"], json!(3));
        assert_eq!(value["modules"]["denyList"], json!(["node-red-contrib-*"]));
        assert_eq!(value["modules"]["allowList"], json!(["*"]));
    }
}
