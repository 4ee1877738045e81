// Copyright 2024 The Kubernetes Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core Kubernetes API types (Pod, Container, Service, etc.)

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// ApiObject is a trait for Kubernetes API objects that can be used in admission.
pub trait ApiObject: Send + Sync {
    /// Returns the object as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the object as mutable Any for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the kind of this object.
    fn kind(&self) -> &str;
}

// ============================================================================
// PullPolicy
// ============================================================================

/// PullPolicy describes a policy for if/when to pull a container image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PullPolicy {
    /// Always means that kubelet always attempts to pull the latest image.
    Always,
    /// Never means that kubelet never pulls an image, but only uses a local image.
    Never,
    /// IfNotPresent means that kubelet pulls if the image isn't present on disk.
    #[default]
    IfNotPresent,
}

impl PullPolicy {
    /// Returns the string representation of the pull policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            PullPolicy::Always => "Always",
            PullPolicy::Never => "Never",
            PullPolicy::IfNotPresent => "IfNotPresent",
        }
    }
}

impl fmt::Display for PullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Container
// ============================================================================

/// Container represents a single container in a pod.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    /// Name of the container.
    pub name: String,
    /// Container image name.
    pub image: String,
    /// Image pull policy.
    pub image_pull_policy: PullPolicy,
}

impl Container {
    /// Create a new container with a specific pull policy.
    pub fn with_pull_policy(name: &str, image: &str, policy: PullPolicy) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            image_pull_policy: policy,
        }
    }
}

// ============================================================================
// PodSpec
// ============================================================================

/// PodSpec describes the specification of a pod.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PodSpec {
    /// List of containers.
    pub containers: Vec<Container>,
    /// Hostname of the pod. Empty means the kubelet falls back to the pod name.
    pub hostname: String,
    /// Subdomain of the pod. When set, the fully qualified hostname is
    /// "<hostname>.<subdomain>.<namespace>.svc.<cluster-domain>".
    pub subdomain: String,
}

// ============================================================================
// PodStatus
// ============================================================================

/// PodPhase is a label for the condition of a pod at the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PodPhase {
    /// The pod has been accepted but one or more containers have not started.
    #[default]
    Pending,
    /// The pod has been bound to a node and all containers have been created.
    Running,
    /// All containers terminated successfully and will not be restarted.
    Succeeded,
    /// All containers terminated and at least one failed.
    Failed,
    /// The state of the pod could not be obtained.
    Unknown,
}

impl PodPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PodPhase::Pending => "Pending",
            PodPhase::Running => "Running",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Failed => "Failed",
            PodPhase::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// PodStatus represents information about the status of a pod.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PodStatus {
    pub phase: PodPhase,
}

// ============================================================================
// Pod
// ============================================================================

/// Pod represents a Kubernetes Pod.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pod {
    /// Name of the pod.
    pub name: String,
    /// Optional prefix used by the server to generate a unique name when `name` is empty.
    pub generate_name: String,
    /// Namespace of the pod.
    pub namespace: String,
    /// Annotations is an unstructured key value map. `None` means no map was set at all.
    pub annotations: Option<HashMap<String, String>>,
    /// Pod specification.
    pub spec: PodSpec,
    /// Most recently observed status of the pod.
    pub status: PodStatus,
}

impl Pod {
    /// Create a new pod with the given name and namespace.
    pub fn new(name: &str, namespace: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            ..Default::default()
        }
    }

    /// Create a new unnamed pod whose name will be generated from the given prefix.
    pub fn with_generate_name(generate_name: &str, namespace: &str) -> Self {
        Self {
            generate_name: generate_name.to_string(),
            namespace: namespace.to_string(),
            ..Default::default()
        }
    }

    /// Look up a single annotation value.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .as_ref()
            .and_then(|annotations| annotations.get(key))
            .map(String::as_str)
    }

    /// Set an annotation, creating the annotation map if needed.
    pub fn set_annotation(&mut self, key: &str, value: &str) {
        self.annotations
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
    }

    /// Returns "namespace/name", falling back to the generateName prefix for unnamed pods.
    pub fn key(&self) -> String {
        if self.name.is_empty() {
            format!("{}/{}*", self.namespace, self.generate_name)
        } else {
            format!("{}/{}", self.namespace, self.name)
        }
    }
}

impl ApiObject for Pod {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&self) -> &str {
        "Pod"
    }
}

// ============================================================================
// Service
// ============================================================================

/// Service represents a Kubernetes Service (for testing non-pod resources).
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: String,
    pub namespace: String,
}

impl Service {
    /// Create a new service with the given name and namespace.
    pub fn new(name: &str, namespace: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
        }
    }
}

impl ApiObject for Service {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&self) -> &str {
        "Service"
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Helper to create a core API resource GroupResource.
pub fn resource(name: &str) -> crate::admission::attributes::GroupResource {
    crate::admission::attributes::GroupResource::new("", name)
}

// ============================================================================
// Tests
// ============================================================================
