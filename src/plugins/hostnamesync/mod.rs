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

//! HostnameSync admission controller.
//!
//! This admission controller modifies every new Pod to set `spec.hostname` when the
//! `pod.tess.io/hostname-sync` annotation asks for it. At the end of this admission
//! controller `spec.hostname` matches `metadata.name`.
//!
//! Pods without a subdomain are left alone: they never get a DNS name, and the kubelet
//! already uses the pod name as the hostname in /etc/hosts. Pods that already specify a
//! hostname are left alone as well.
//!
//! A pod created with only `generateName` gets its final name assigned here, earlier than
//! the registry would normally assign it, so the hostname can be derived from it.

use crate::admission::{
    AdmissionError, AdmissionResult, Attributes, Handler, Interface, MutationInterface,
    Operation, Plugins,
};
use crate::api::core::{resource, Pod};
use crate::api::names::{NameGenerator, SimpleNameGenerator};
use crate::util::strconv::parse_bool;
use std::io::Read;
use std::sync::Arc;

/// Plugin name for the HostnameSync admission controller.
pub const PLUGIN_NAME: &str = "HostnameSync";

/// Annotation that requests `spec.hostname` be synced from the pod name.
pub const ANNOTATION: &str = "pod.tess.io/hostname-sync";

/// Register the HostnameSync plugin with the plugin registry.
pub fn register(plugins: &Plugins) {
    plugins.register(PLUGIN_NAME, |_config: Option<&mut dyn Read>| {
        Ok(Arc::new(HostnameSync::new()) as Arc<dyn Interface>)
    });
}

/// HostnameSync is an implementation of admission.Interface.
/// It copies the pod name into `spec.hostname` for annotated pods with a subdomain.
pub struct HostnameSync {
    handler: Handler,
    name_generator: Arc<dyn NameGenerator>,
}

impl HostnameSync {
    /// Create a new HostnameSync admission controller.
    pub fn new() -> Self {
        // pod names cannot change, so only create needs handling
        Self {
            handler: Handler::new_create(),
            name_generator: Arc::new(SimpleNameGenerator),
        }
    }

    /// Replace the generator used for pods that only carry a generateName.
    pub fn with_name_generator(mut self, generator: Arc<dyn NameGenerator>) -> Self {
        self.name_generator = generator;
        self
    }

    /// Ignore all calls to subresources or resources other than pods, and operations
    /// this plugin does not handle.
    fn should_ignore(&self, attributes: &dyn Attributes) -> bool {
        if !self.handler.handles(attributes.get_operation()) {
            return true;
        }

        if !attributes.get_subresource().is_empty() {
            return true;
        }

        attributes.get_resource().group_resource() != resource("pods")
    }

    /// Returns the hostname the pod should get, generating and assigning its name if needed.
    /// Returns `None` when the pod should be left untouched.
    fn sync_hostname(&self, pod: &mut Pod) -> AdmissionResult<Option<String>> {
        if pod.spec.subdomain.is_empty() || !pod.spec.hostname.is_empty() {
            return Ok(None);
        }

        let Some(value) = pod.annotation(ANNOTATION) else {
            return Ok(None);
        };

        let sync = parse_bool(value)
            .map_err(|err| AdmissionError::invalid_annotation(ANNOTATION, err))?;
        if !sync {
            return Ok(None);
        }

        if pod.name.is_empty() {
            // can't ask for a hostname without a name or a prefix to generate one from
            if pod.generate_name.is_empty() {
                return Err(AdmissionError::missing_name(pod.namespace.as_str()));
            }
            pod.name = self.name_generator.generate_name(&pod.generate_name);
            tracing::debug!(
                namespace = %pod.namespace,
                generate_name = %pod.generate_name,
                name = %pod.name,
                "hostnameSync: generated pod name"
            );
        }

        Ok(Some(pod.name.clone()))
    }
}

impl Default for HostnameSync {
    fn default() -> Self {
        Self::new()
    }
}

impl Interface for HostnameSync {
    fn handles(&self, operation: Operation) -> bool {
        self.handler.handles(operation)
    }

    fn as_mutation(&self) -> Option<&dyn MutationInterface> {
        Some(self)
    }
}

impl MutationInterface for HostnameSync {
    fn admit(&self, attributes: &mut dyn Attributes) -> AdmissionResult<()> {
        if self.should_ignore(attributes) {
            return Ok(());
        }

        let pod = attributes
            .get_object_mut()
            .and_then(|obj| obj.as_any_mut().downcast_mut::<Pod>())
            .ok_or_else(|| {
                AdmissionError::bad_request(
                    "Resource was marked with kind Pod but was unable to be converted",
                )
            })?;

        if let Some(hostname) = self.sync_hostname(pod)? {
            tracing::debug!(pod = %pod.key(), hostname = %hostname, "hostnameSync: set spec.hostname");
            pod.spec.hostname = hostname;
        }

        Ok(())
    }
}
