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

use crate::constants::DEFAULT_DEPENDENCY_VERSION;
use crate::error::NodeRedError;
use bon::Builder;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A third party nodes package to install from npm, e.g.
/// `node-red-contrib-moment` or `@flowfuse/node-red-dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Builder)]
pub struct ThirdPartyLibraryNodesDependency {
    /// npm scope, with or without the leading `@`.
    #[builder(into)]
    scope: Option<String>,
    #[builder(into)]
    name: String,
    #[builder(into, default = DEFAULT_DEPENDENCY_VERSION.to_string())]
    version: String,
}

impl ThirdPartyLibraryNodesDependency {
    /// Unscoped package at its latest version.
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder().name(name).build()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope
            .as_deref()
            .map(|scope| scope.trim().trim_start_matches('@'))
            .filter(|scope| !scope.is_empty())
    }

    pub fn name(&self) -> &str {
        self.name.trim()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Full npm package name, as listed in the Node-RED catalogue.
    pub fn module(&self) -> String {
        match self.scope() {
            Some(scope) => format!("@{scope}/{}", self.name()),
            None => self.name().to_string(),
        }
    }
}

impl Display for ThirdPartyLibraryNodesDependency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.module(), self.version)
    }
}

/// Rejects blank names and names requested more than once. Every duplicated
/// name is reported, sorted.
pub(crate) fn ensure_unique(
    dependencies: &[ThirdPartyLibraryNodesDependency],
) -> Result<(), NodeRedError> {
    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    for dependency in dependencies {
        if dependency.name().is_empty() {
            return Err(NodeRedError::InvalidConfiguration(
                "3rd party dependency name can't be blank".to_string(),
            ));
        }
        *occurrences.entry(dependency.name()).or_default() += 1;
    }

    let duplicates = occurrences
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect::<Vec<_>>();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(NodeRedError::DuplicateDependencies(duplicates))
    }
}
