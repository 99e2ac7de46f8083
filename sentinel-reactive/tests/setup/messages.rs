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

use sentinel_reactive::prelude::*;

/// Operations exchanged by the test actors.
#[sentinel_message(wire)]
#[derive(PartialEq)]
#[serde(tag = "operation", content = "parameters", rename_all = "snake_case")]
pub enum TestOp {
    Ping,
    Count(u32),
    Note { text: String },
    /// Asks a relay to send `Ping` to `target` through the monitor.
    Forward { target: String },
    /// Asks a relay to send `Ping` straight to `target`.
    Hand { target: String },
    /// Makes a faulty actor panic.
    Boom,
    /// Makes a faulty actor return an error.
    Fail,
}

impl SentinelMessage for TestOp {
    const OPERATIONS: &'static [&'static str] =
        &["ping", "count", "note", "forward", "hand", "boom", "fail"];

    fn operation(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Count(_) => "count",
            Self::Note { .. } => "note",
            Self::Forward { .. } => "forward",
            Self::Hand { .. } => "hand",
            Self::Boom => "boom",
            Self::Fail => "fail",
        }
    }
}
