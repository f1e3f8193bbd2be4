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

use crate::constants::{NODE_RED_IMAGE, NODE_RED_TAG};
use crate::error::NodeRedError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DEFAULT_REGISTRY_PREFIXES: [&str; 2] = ["docker.io/", "index.docker.io/"];
const OFFICIAL_LIBRARY_PREFIX: &str = "library/";

/// Docker image reference, e.g. `nodered/node-red:3.1.9` or
/// `nodered/node-red@sha256:<hex>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName {
    repository: String,
    tag: Option<String>,
    digest: Option<String>,
}

impl ImageName {
    pub fn new(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: Some(tag.into()),
            digest: None,
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Explicit tag, `latest` when the reference has none.
    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or(NODE_RED_TAG)
    }

    /// Content digest such as `sha256:<hex>`, when the reference is pinned.
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Two images are compatible when they refer to the same repository, whatever the tag.
    pub fn is_compatible_with(&self, other: &ImageName) -> bool {
        normalize_repository(&self.repository) == normalize_repository(&other.repository)
    }

    pub(crate) fn ensure_node_red(&self) -> Result<(), NodeRedError> {
        let expected = ImageName::default();
        if self.is_compatible_with(&expected) {
            return Ok(());
        }

        Err(NodeRedError::IncompatibleImage {
            image: self.to_string(),
            expected: expected.to_string(),
        })
    }

    /// Name and tag handed to the container runtime, which joins them with a
    /// colon. A digest reference is split on its algorithm separator so the
    /// joined value stays `repository[:tag]@algorithm:hex`.
    pub(crate) fn runtime_parts(&self) -> (String, String) {
        match self.digest.as_deref().and_then(|digest| digest.split_once(':')) {
            Some((algorithm, hex)) => {
                let name = match &self.tag {
                    Some(tag) => format!("{}:{tag}@{algorithm}", self.repository),
                    None => format!("{}@{algorithm}", self.repository),
                };
                (name, hex.to_string())
            }
            None => (self.repository.clone(), self.tag().to_string()),
        }
    }
}

impl Default for ImageName {
    fn default() -> Self {
        Self::new(NODE_RED_IMAGE, NODE_RED_TAG)
    }
}

impl Display for ImageName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.repository)?;
        if let Some(tag) = &self.tag {
            write!(f, ":{tag}")?;
        }
        if let Some(digest) = &self.digest {
            write!(f, "@{digest}")?;
        }
        Ok(())
    }
}

impl FromStr for ImageName {
    type Err = NodeRedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(NodeRedError::InvalidConfiguration(
                "Docker image name can't be empty".to_string(),
            ));
        }
        let invalid =
            || NodeRedError::InvalidConfiguration(format!("Invalid docker image name: {value}"));

        let (name, digest) = match value.split_once('@') {
            Some((name, digest)) => {
                let valid = digest
                    .split_once(':')
                    .is_some_and(|(algorithm, hex)| !algorithm.is_empty() && !hex.is_empty());
                if !valid {
                    return Err(invalid());
                }
                (name, Some(digest.to_string()))
            }
            None => (value, None),
        };

        // A colon before the last slash belongs to a registry host:port, not to a tag.
        let last_slash = name.rfind('/').map_or(0, |index| index + 1);
        let (repository, tag) = match name[last_slash..].rfind(':') {
            Some(index) => {
                let split = last_slash + index;
                (&name[..split], Some(&name[split + 1..]))
            }
            None => (name, None),
        };

        if repository.is_empty() || tag.is_some_and(str::is_empty) {
            return Err(invalid());
        }

        let tag = match (tag, &digest) {
            (Some(tag), _) => Some(tag.to_string()),
            (None, Some(_)) => None,
            (None, None) => Some(NODE_RED_TAG.to_string()),
        };

        Ok(Self {
            repository: repository.to_string(),
            tag,
            digest,
        })
    }
}

fn normalize_repository(repository: &str) -> &str {
    let repository = DEFAULT_REGISTRY_PREFIXES
        .iter()
        .find_map(|prefix| repository.strip_prefix(prefix))
        .unwrap_or(repository);
    repository
        .strip_prefix(OFFICIAL_LIBRARY_PREFIX)
        .unwrap_or(repository)
}
