//! The mission's control components: zone, orbit and optics control, and the
//! user program executor.

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

pub use optics_control::OpticsControl;
pub use orbit_control::{OrbitControl, OrbitError, ALLOWED_ALTITUDE};
pub use restricted_zone::{RestrictedZone, ZoneError, ZoneSpec};
pub use user_program::UserProgramExecutor;
pub use zone_control::RestrictedZoneControl;

mod optics_control;
mod orbit_control;
mod restricted_zone;
mod user_program;
mod zone_control;
