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

//! WaitForHostname pod admit handler.
//!
//! Holds a pending pod on the node until its `spec.hostname` has been populated, for pods
//! that opt in with the `naming.tess.io/wait-for-hostname` annotation. Another controller
//! is expected to fill in the hostname after the pod was created.

use super::{PodAdmitAttributes, PodAdmitHandler, PodAdmitResult};
use crate::api::core::PodPhase;
use crate::util::strconv::parse_bool;

/// Annotation that asks the kubelet to wait for `spec.hostname` before starting the pod.
pub const WAIT_FOR_HOSTNAME_ANNOTATION: &str = "naming.tess.io/wait-for-hostname";

/// Reason reported when a pod is held back by this handler.
pub const WAIT_FOR_HOSTNAME_REASON: &str = "WaitForHostname";

/// WaitForHostnameAdmitHandler rejects annotated pending pods whose hostname is still empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaitForHostnameAdmitHandler;

impl WaitForHostnameAdmitHandler {
    pub fn new() -> Self {
        Self
    }
}

impl PodAdmitHandler for WaitForHostnameAdmitHandler {
    fn admit(&self, attrs: &PodAdmitAttributes<'_>) -> PodAdmitResult {
        let pod = attrs.pod;
        tracing::trace!(pod = %pod.key(), "waitForHostname: begin");

        // already running or terminated, no need to recheck
        if pod.status.phase != PodPhase::Pending {
            tracing::trace!(pod = %pod.key(), phase = %pod.status.phase, "waitForHostname: pod not pending");
            return PodAdmitResult::admitted();
        }

        let Some(annotations) = pod.annotations.as_ref() else {
            tracing::trace!(pod = %pod.key(), "waitForHostname: no annotations");
            return PodAdmitResult::admitted();
        };

        let Some(value) = annotations.get(WAIT_FOR_HOSTNAME_ANNOTATION) else {
            tracing::trace!(pod = %pod.key(), "waitForHostname: no wait-for-hostname annotation");
            return PodAdmitResult::admitted();
        };

        match parse_bool(value) {
            Err(err) => {
                tracing::trace!(pod = %pod.key(), %err, "waitForHostname: annotation cannot be parsed");
                return PodAdmitResult::rejected(
                    WAIT_FOR_HOSTNAME_REASON,
                    format!(
                        "Error parsing value for annotation {:?}: {}",
                        WAIT_FOR_HOSTNAME_ANNOTATION, err
                    ),
                );
            }
            Ok(false) => {
                tracing::trace!(pod = %pod.key(), "waitForHostname: annotation is false");
                return PodAdmitResult::admitted();
            }
            Ok(true) => {}
        }

        if pod.spec.hostname.is_empty() {
            tracing::trace!(pod = %pod.key(), "waitForHostname: spec.hostname not available yet");
            return PodAdmitResult::rejected(
                WAIT_FOR_HOSTNAME_REASON,
                "Pod spec.hostname not available yet",
            );
        }

        tracing::trace!(pod = %pod.key(), "waitForHostname: end");
        PodAdmitResult::admitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::core::Pod;
    use std::collections::HashMap;

    fn pending_pod(annotations: Option<&[(&str, &str)]>, hostname: &str) -> Pod {
        let mut pod = Pod::new("web-0", "default");
        pod.annotations = annotations.map(|pairs| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>()
        });
        pod.spec.hostname = hostname.to_string();
        pod
    }

    fn admit(pod: &Pod) -> PodAdmitResult {
        WaitForHostnameAdmitHandler::new().admit(&PodAdmitAttributes::new(pod))
    }

    #[test]
    fn test_wait_for_hostname_admit_handler_admit() {
        let wait = |value: &'static str| Some(vec![(WAIT_FOR_HOSTNAME_ANNOTATION, value)]);

        struct TestCase {
            name: &'static str,
            phase: PodPhase,
            annotations: Option<Vec<(&'static str, &'static str)>>,
            hostname: &'static str,
            admit_expected: bool,
        }

        let tests = vec![
            TestCase {
                name: "not pending",
                phase: PodPhase::Running,
                annotations: wait("true"),
                hostname: "",
                admit_expected: true,
            },
            TestCase {
                name: "nil annotations",
                phase: PodPhase::Pending,
                annotations: None,
                hostname: "",
                admit_expected: true,
            },
            TestCase {
                name: "empty annotations",
                phase: PodPhase::Pending,
                annotations: Some(vec![]),
                hostname: "",
                admit_expected: true,
            },
            TestCase {
                name: "unrelated annotation",
                phase: PodPhase::Pending,
                annotations: Some(vec![("foo", "bar")]),
                hostname: "",
                admit_expected: true,
            },
            TestCase {
                name: "unparseable value",
                phase: PodPhase::Pending,
                annotations: wait("not-a-bool"),
                hostname: "",
                admit_expected: false,
            },
            TestCase {
                name: "value is false",
                phase: PodPhase::Pending,
                annotations: wait("false"),
                hostname: "",
                admit_expected: true,
            },
            TestCase {
                name: "no hostname",
                phase: PodPhase::Pending,
                annotations: wait("true"),
                hostname: "",
                admit_expected: false,
            },
            TestCase {
                name: "told to wait and value is now set",
                phase: PodPhase::Pending,
                annotations: wait("true"),
                hostname: "host1",
                admit_expected: true,
            },
            TestCase {
                name: "numeric true literal",
                phase: PodPhase::Pending,
                annotations: wait("1"),
                hostname: "",
                admit_expected: false,
            },
        ];

        for tc in tests {
            let mut pod = pending_pod(tc.annotations.as_deref(), tc.hostname);
            pod.status.phase = tc.phase;

            let res = admit(&pod);
            assert_eq!(
                res.admit, tc.admit_expected,
                "{}: expected admit={} but got {:?}",
                tc.name, tc.admit_expected, res
            );
        }
    }

    #[test]
    fn test_non_pending_phases_always_admit() {
        for phase in [
            PodPhase::Running,
            PodPhase::Succeeded,
            PodPhase::Failed,
            PodPhase::Unknown,
        ] {
            for value in ["true", "not-a-bool"] {
                let mut pod = pending_pod(Some(&[(WAIT_FOR_HOSTNAME_ANNOTATION, value)]), "");
                pod.status.phase = phase;
                assert!(admit(&pod).admit, "phase {} annotation {:?}", phase, value);
            }
        }
    }

    #[test]
    fn test_missing_hostname_reason_and_message() {
        let pod = pending_pod(Some(&[(WAIT_FOR_HOSTNAME_ANNOTATION, "true")]), "");
        let res = admit(&pod);
        assert_eq!(
            res,
            PodAdmitResult::rejected(WAIT_FOR_HOSTNAME_REASON, "Pod spec.hostname not available yet")
        );
    }

    #[test]
    fn test_parse_error_reason_and_message() {
        let pod = pending_pod(Some(&[(WAIT_FOR_HOSTNAME_ANNOTATION, "not-a-bool")]), "");
        let res = admit(&pod);
        assert!(!res.admit);
        assert_eq!(res.reason, WAIT_FOR_HOSTNAME_REASON);
        assert!(
            res.message
                .starts_with("Error parsing value for annotation \"naming.tess.io/wait-for-hostname\""),
            "unexpected message: {}",
            res.message
        );
        assert!(res.message.contains("not-a-bool"), "unexpected message: {}", res.message);
    }

    #[test]
    fn test_false_admits_regardless_of_hostname() {
        for hostname in ["", "host1"] {
            let pod = pending_pod(Some(&[(WAIT_FOR_HOSTNAME_ANNOTATION, "false")]), hostname);
            assert!(admit(&pod).admit, "hostname {:?}", hostname);
        }
    }

    #[test]
    fn test_used_through_handler_list() {
        let mut handlers = super::super::PodAdmitHandlers::new();
        handlers.add(std::sync::Arc::new(WaitForHostnameAdmitHandler::new()));

        let mut pod = pending_pod(Some(&[(WAIT_FOR_HOSTNAME_ANNOTATION, "true")]), "");
        assert!(!handlers.admit(&PodAdmitAttributes::new(&pod)).admit);

        pod.spec.hostname = "web-0".to_string();
        assert!(handlers.admit(&PodAdmitAttributes::new(&pod)).admit);
    }
}
