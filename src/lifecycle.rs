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

use crate::error::NodeRedError;
use async_trait::async_trait;
use std::fmt::{Display, Formatter};
use testcontainers_modules::testcontainers::{ContainerRequest, GenericImage};
use tracing::debug;

pub type NodeRedRequest = ContainerRequest<GenericImage>;

/// Pre-start hook: validates the configuration against the outside world and
/// sets environment variables before any container resource is committed.
#[async_trait]
pub trait Configure: Send + Sync {
    async fn configure(&self, request: NodeRedRequest) -> Result<NodeRedRequest, NodeRedError>;
}

/// Injects files into the container file system before its first boot.
#[async_trait]
pub trait OnCreated: Send + Sync {
    async fn on_created(&self, request: NodeRedRequest) -> Result<NodeRedRequest, NodeRedError>;
}

/// Runs once the container reports ready, against its base URL.
#[async_trait]
pub trait OnStarted: Send + Sync {
    async fn on_started(&self, base_url: &str) -> Result<(), NodeRedError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Configured,
    Validating,
    Starting,
    WaitingReady,
    Ready,
    InstallingDependencies,
    Operational,
    Closed,
    Failed,
}

impl LifecycleState {
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        match (self, next) {
            (Configured, Validating)
            | (Validating, Starting)
            | (Starting, WaitingReady)
            | (WaitingReady, Ready)
            | (Ready, InstallingDependencies)
            | (InstallingDependencies, Operational)
            | (Operational, Closed) => true,
            (Closed | Failed, _) => false,
            (_, Failed) => true,
            _ => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, LifecycleState::Closed | LifecycleState::Failed)
    }
}

impl Display for LifecycleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifecycleState::Configured => "configured",
            LifecycleState::Validating => "validating",
            LifecycleState::Starting => "starting",
            LifecycleState::WaitingReady => "waiting_ready",
            LifecycleState::Ready => "ready",
            LifecycleState::InstallingDependencies => "installing_dependencies",
            LifecycleState::Operational => "operational",
            LifecycleState::Closed => "closed",
            LifecycleState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Tracks the lifecycle of one container instance.
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn advance(&mut self, next: LifecycleState) -> Result<(), NodeRedError> {
        if !self.state.can_transition_to(next) {
            return Err(NodeRedError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        debug!("Node-RED container lifecycle: {} -> {next}", self.state);
        self.state = next;
        Ok(())
    }

    /// Moves to `Failed` unless the lifecycle already ended.
    pub fn fail(&mut self) {
        if !self.state.is_terminal() {
            debug!("Node-RED container lifecycle: {} -> failed", self.state);
            self.state = LifecycleState::Failed;
        }
    }
}
