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

//! Parsing of boolean annotation values.

use thiserror::Error;

/// ParseBoolError is returned when a string is not one of the accepted boolean literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid boolean value {value:?}")]
pub struct ParseBoolError {
    pub value: String,
}

/// Parse a boolean the way Kubernetes annotation values are parsed.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false`, `False`.
/// Any other value, including surrounding whitespace, is an error.
pub fn parse_bool(value: &str) -> Result<bool, ParseBoolError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_true_literals() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Ok(true), "value {:?}", value);
        }
    }

    #[test]
    fn test_parse_bool_false_literals() {
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Ok(false), "value {:?}", value);
        }
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        for value in ["", "not true", "not-a-bool", "yes", "tRUE", " true", "2"] {
            assert!(parse_bool(value).is_err(), "value {:?}", value);
        }
    }

    #[test]
    fn test_parse_bool_error_display() {
        let err = parse_bool("yes").unwrap_err();
        assert_eq!(err.to_string(), "invalid boolean value \"yes\"");
    }
}
