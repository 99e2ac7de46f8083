//! A satellite platform built from mutually distrusting components.
//!
//! Every component runs as its own actor and reaches the others only through the
//! [`SecurityMonitor`](sentinel_reactive::SecurityMonitor), which forwards an envelope
//! when its `(source, destination, operation)` triple is in the mission's policy set.
//! [`Mission::assemble`] wires the monitor and all seven components onto one runtime;
//! [`Scenario`] drives it with timed operator injections.

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

pub mod control;
pub mod mission;
pub mod names;
pub mod operation;
pub mod policies;
pub mod scenario;
pub mod simulator;

pub use mission::{Mission, MissionConfig};
pub use operation::{Capability, GeoPoint, OrbitParameters, SatelliteOperation, UserCommand};
pub use policies::mission_policies;
pub use scenario::{Scenario, ScenarioError, ScenarioStep};
