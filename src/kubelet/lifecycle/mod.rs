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

//! Pod admission on the node.
//!
//! Before starting a pod, the kubelet consults a list of admit handlers. Any handler may
//! reject the pod with a reason and message; the kubelet re-runs the checks on later sync
//! passes until the pod is admitted or removed.
//!
//! This mirrors the Go interfaces from k8s.io/kubernetes/pkg/kubelet/lifecycle.

pub mod waitforhostname;

use crate::api::core::Pod;
use std::sync::Arc;

/// PodAdmitAttributes is the context for a pod admission decision.
#[derive(Debug, Clone, Copy)]
pub struct PodAdmitAttributes<'a> {
    /// The pod to evaluate for admission.
    pub pod: &'a Pod,
}

impl<'a> PodAdmitAttributes<'a> {
    /// Create attributes for the given pod.
    pub fn new(pod: &'a Pod) -> Self {
        Self { pod }
    }
}

/// PodAdmitResult provides the result of a pod admission decision.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PodAdmitResult {
    /// If true, the pod should be admitted.
    pub admit: bool,
    /// A brief single-word reason why the pod could not be admitted.
    pub reason: String,
    /// A brief message explaining why the pod could not be admitted.
    pub message: String,
}

impl PodAdmitResult {
    /// An admitting result.
    pub fn admitted() -> Self {
        Self {
            admit: true,
            ..Default::default()
        }
    }

    /// A rejecting result with the given reason and message.
    pub fn rejected(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            admit: false,
            reason: reason.into(),
            message: message.into(),
        }
    }
}

/// PodAdmitHandler is notified during pod admission.
pub trait PodAdmitHandler: Send + Sync {
    /// Admit evaluates if a pod can be admitted.
    fn admit(&self, attrs: &PodAdmitAttributes<'_>) -> PodAdmitResult;
}

/// PodAdmitHandlers maintains an ordered list of pod admit handlers.
#[derive(Default, Clone)]
pub struct PodAdmitHandlers {
    handlers: Vec<Arc<dyn PodAdmitHandler>>,
}

impl PodAdmitHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler to the end of the list.
    pub fn add(&mut self, handler: Arc<dyn PodAdmitHandler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run every handler in order and return the first rejection, if any.
    pub fn admit(&self, attrs: &PodAdmitAttributes<'_>) -> PodAdmitResult {
        for handler in &self.handlers {
            let result = handler.admit(attrs);
            if !result.admit {
                tracing::debug!(
                    pod = %attrs.pod.key(),
                    reason = %result.reason,
                    message = %result.message,
                    "pod admission rejected"
                );
                return result;
            }
        }
        PodAdmitResult::admitted()
    }
}
