/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ComponentId;

/// One permitted flow: `source` may send `operation` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Policy {
    /// Sending component.
    pub source: ComponentId,
    /// Receiving component.
    pub destination: ComponentId,
    /// Operation name.
    pub operation: String,
}

impl Policy {
    /// Builds a policy triple.
    pub fn new(
        source: impl Into<ComponentId>,
        destination: impl Into<ComponentId>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            operation: operation.into(),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.source, self.destination, self.operation)
    }
}

/// Errors from loading a policy file.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The file could not be read.
    #[error("failed to read policy file {path}: {source}")]
    Io {
        /// File that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The text is not a valid policy document.
    #[error("failed to parse policies: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PolicyDocument {
    #[serde(default, rename = "policy")]
    policies: Vec<Policy>,
}

/// The allow-list consulted by the security monitor.
///
/// Anything not in the set is denied. There are no wildcards.
///
/// ```toml
/// [[policy]]
/// source = "camera"
/// destination = "satellite"
/// operation = "post_camera_coords"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicySet {
    policies: HashSet<Policy>,
}

impl PolicySet {
    /// An empty set, which denies everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a policy. Returns `false` if it was already present.
    pub fn insert(&mut self, policy: Policy) -> bool {
        self.policies.insert(policy)
    }

    /// Exact membership test.
    pub fn contains(&self, policy: &Policy) -> bool {
        self.policies.contains(policy)
    }

    /// Returns `true` if `source` may send `operation` to `destination`.
    pub fn permits(&self, source: &str, destination: &str, operation: &str) -> bool {
        self.contains(&Policy::new(source, destination, operation))
    }

    /// Number of distinct policies.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns `true` if no policies are present.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Iterates the policies in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter()
    }

    /// Parses a `[[policy]]` TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, PolicyError> {
        let document: PolicyDocument = toml::from_str(text)?;
        Ok(document.policies.into_iter().collect())
    }

    /// Reads a `[[policy]]` TOML document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Renders the set as a `[[policy]]` document, sorted for stable output.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let mut policies: Vec<Policy> = self.policies.iter().cloned().collect();
        policies.sort();
        toml::to_string(&PolicyDocument { policies })
    }
}

impl FromIterator<Policy> for PolicySet {
    fn from_iter<I: IntoIterator<Item = Policy>>(iter: I) -> Self {
        Self {
            policies: iter.into_iter().collect(),
        }
    }
}

impl Extend<Policy> for PolicySet {
    fn extend<I: IntoIterator<Item = Policy>>(&mut self, iter: I) {
        self.policies.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PolicySet {
    type Item = &'a Policy;
    type IntoIter = std::collections::hash_set::Iter<'a, Policy>;

    fn into_iter(self) -> Self::IntoIter {
        self.policies.iter()
    }
}
