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

//! Admission plugins module.

pub mod hostnamesync;

use crate::admission::Plugins;

/// All ordered plugins in execution order.
/// This corresponds to AllOrderedPlugins in plugins.go
pub const ALL_ORDERED_PLUGINS: &[&str] = &[
    hostnamesync::PLUGIN_NAME, // HostnameSync
];

/// Default plugins that are ON by default. HostnameSync is opt-in.
pub const DEFAULT_ON_PLUGINS: &[&str] = &[];

/// Get the list of plugins that are OFF by default.
pub fn default_off_plugins() -> Vec<&'static str> {
    ALL_ORDERED_PLUGINS
        .iter()
        .filter(|p| !DEFAULT_ON_PLUGINS.contains(p))
        .copied()
        .collect()
}

/// Register all admission plugins.
/// This corresponds to RegisterAllAdmissionPlugins in plugins.go
pub fn register_all_admission_plugins(plugins: &Plugins) {
    hostnamesync::register(plugins);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ordered_plugins_contains_hostname_sync() {
        assert!(ALL_ORDERED_PLUGINS.contains(&"HostnameSync"));
    }

    #[test]
    fn test_hostname_sync_is_off_by_default() {
        assert!(default_off_plugins().contains(&"HostnameSync"));
    }

    #[test]
    fn test_register_all_admission_plugins() {
        let plugins = Plugins::new();
        register_all_admission_plugins(&plugins);
        for name in ALL_ORDERED_PLUGINS {
            assert!(plugins.is_registered(name), "{} not registered", name);
        }
    }
}
