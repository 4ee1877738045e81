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

//! Hostname admission plugins reimplemented in Rust
//!
//! This crate provides two annotation-driven pod admission hooks:
//!
//! - `HostnameSync`, an API server mutating admission plugin that copies a pod's name
//!   into `spec.hostname` on creation.
//! - `WaitForHostnameAdmitHandler`, a kubelet pod admit handler that holds a pending pod
//!   until its `spec.hostname` is populated.
//!
//! The admission interfaces follow the same architecture as the Kubernetes codebase.

pub mod admission;
pub mod api;
pub mod kubelet;
pub mod plugins;
pub mod util;

// Re-export commonly used types
pub use admission::{
    AdmissionError, AdmissionResult, Attributes, AttributesRecord, Handler, Interface,
    MutationInterface, Operation,
};
pub use api::core::{Container, Pod, PodPhase, PodSpec, PodStatus, PullPolicy};
pub use api::names::{NameGenerator, SimpleNameGenerator};
pub use kubelet::lifecycle::waitforhostname::WaitForHostnameAdmitHandler;
pub use kubelet::lifecycle::{PodAdmitAttributes, PodAdmitHandler, PodAdmitResult};
pub use plugins::hostnamesync::HostnameSync;
