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

//! Name generation for objects created with `generateName`.

use rand::Rng;

/// Maximum length of a generated object name.
pub const MAX_NAME_LENGTH: usize = 63;

/// Number of random characters appended to the base name.
pub const RANDOM_LENGTH: usize = 5;

/// Maximum length of the base name kept before the random suffix.
pub const MAX_GENERATED_NAME_LENGTH: usize = MAX_NAME_LENGTH - RANDOM_LENGTH;

// No vowels and no characters that are easily confused with one another.
const ALPHANUMS: &[u8] = b"bcdfghjklmnpqrstvwxz2456789";

/// NameGenerator generates names for objects. Some backends may have more information
/// available to guide selection of new names and this interface hides those details.
pub trait NameGenerator: Send + Sync {
    /// Generate a name from the given base. Uniqueness is the generator's responsibility.
    fn generate_name(&self, base: &str) -> String;
}

/// SimpleNameGenerator generates random names by appending a random suffix to the base.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleNameGenerator;

impl NameGenerator for SimpleNameGenerator {
    fn generate_name(&self, base: &str) -> String {
        let mut name = truncate(base, MAX_GENERATED_NAME_LENGTH).to_string();
        let mut rng = rand::thread_rng();
        name.extend(
            (0..RANDOM_LENGTH).map(|_| ALPHANUMS[rng.gen_range(0..ALPHANUMS.len())] as char),
        );
        name
    }
}

/// Truncate to at most `max` bytes without splitting a character.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
