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

//! Admission error types.

use crate::util::strconv::ParseBoolError;
use thiserror::Error;

/// Result type for admission operations.
pub type AdmissionResult<T> = Result<T, AdmissionError>;

/// AdmissionError represents errors that can occur during admission.
#[derive(Debug, Error)]
pub enum AdmissionError {
    /// BadRequest indicates a malformed request.
    #[error("{0}")]
    BadRequest(String),

    /// InvalidAnnotation indicates an annotation value could not be parsed.
    #[error("could not parse annotation: {key:?}")]
    InvalidAnnotation {
        key: String,
        #[source]
        source: ParseBoolError,
    },

    /// MissingName indicates a pod has neither a name nor a generateName to derive one from.
    #[error("no name from which to generate hostname for pod in namespace {namespace:?}")]
    MissingName { namespace: String },

    /// Internal represents an internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AdmissionError {
    /// Create a new BadRequest error.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AdmissionError::BadRequest(msg.into())
    }

    /// Create an InvalidAnnotation error for the given annotation key.
    pub fn invalid_annotation(key: impl Into<String>, source: ParseBoolError) -> Self {
        AdmissionError::InvalidAnnotation {
            key: key.into(),
            source,
        }
    }

    /// Create a MissingName error.
    pub fn missing_name(namespace: impl Into<String>) -> Self {
        AdmissionError::MissingName {
            namespace: namespace.into(),
        }
    }

    /// Create an Internal error.
    pub fn internal_error(msg: impl Into<String>) -> Self {
        AdmissionError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::strconv::parse_bool;
    use std::error::Error as _;

    #[test]
    fn test_invalid_annotation_display() {
        let source = parse_bool("maybe").unwrap_err();
        let err = AdmissionError::invalid_annotation("pod.tess.io/hostname-sync", source);
        assert_eq!(
            err.to_string(),
            "could not parse annotation: \"pod.tess.io/hostname-sync\""
        );
        let cause = err.source().expect("parse error should be the source");
        assert!(cause.to_string().contains("maybe"));
    }

    #[test]
    fn test_missing_name_display() {
        let err = AdmissionError::missing_name("test");
        assert_eq!(
            err.to_string(),
            "no name from which to generate hostname for pod in namespace \"test\""
        );
    }

    #[test]
    fn test_internal_error_display() {
        let err = AdmissionError::internal_error("unknown admission plugin: Foo");
        assert_eq!(err.to_string(), "internal error: unknown admission plugin: Foo");
    }
}
