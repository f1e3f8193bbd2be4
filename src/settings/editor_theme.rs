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

const DEFAULT_PALETTE_CATEGORIES: [&str; 7] = [
    "subflows", "common", "function", "network", "sequence", "parser", "storage",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct EditorTheme {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[builder(default)]
    pub tours: bool,
    #[builder(default)]
    pub palette: EditorPalette,
    #[builder(default)]
    pub projects: Projects,
}

impl Default for EditorTheme {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_PALETTE_CATEGORIES
        .iter()
        .map(|category| category.to_string())
        .collect()
}

/// Order of the node categories in the editor palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct EditorPalette {
    #[builder(default = default_categories())]
    pub categories: Vec<String>,
}

impl Default for EditorPalette {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct Projects {
    #[builder(default)]
    pub enabled: bool,
    #[builder(default)]
    pub workflow: Workflow,
    #[builder(default)]
    pub code_editor: CodeEditor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct Workflow {
    #[builder(default)]
    pub mode: WorkflowMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowMode {
    #[default]
    Manual,
    Auto,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct CodeEditor {
    #[builder(default)]
    pub lib: CodeEditorLib,
    #[builder(default)]
    pub options: CodeEditorOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeEditorLib {
    #[default]
    Ace,
    Monaco,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeEditorOptions {
    #[builder(into, default = "vs".to_string())]
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[builder(default)]
    pub font_ligatures: bool,
}

impl Default for CodeEditorOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
