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

use std::fmt::Debug;

/// The payload carried by every [`Envelope`](crate::message::Envelope) in a Sentinel system.
///
/// A payload type is normally a single enum with one variant per operation that may
/// cross a component boundary, each variant holding its own strongly-typed
/// parameters. The operation name returned by [`operation`](Self::operation) is
/// what security policies are written against, so it must be stable and must be
/// one of [`OPERATIONS`](Self::OPERATIONS).
///
/// When the type also implements `serde::Deserialize` with adjacent tagging
/// (`tag = "operation"`, `content = "parameters"`), envelopes can be decoded from
/// the wire shape with [`Envelope::from_json`](crate::message::Envelope::from_json).
pub trait SentinelMessage: Clone + Debug + Send + Sync + 'static {
    /// Every operation name this payload type can carry.
    const OPERATIONS: &'static [&'static str];

    /// The operation name of this particular value.
    fn operation(&self) -> &'static str;

    /// Returns `true` if `name` is one of this payload type's operations.
    fn knows_operation(name: &str) -> bool {
        Self::OPERATIONS.contains(&name)
    }
}
