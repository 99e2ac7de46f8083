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

//! Registry names of the mission's components.

pub const SATELLITE: &str = "satellite";
pub const CAMERA: &str = "camera";
pub const ORBIT_DRAWER: &str = "orbit_drawer";
pub const OPTICS_CONTROL: &str = "optics_control";
pub const ORBIT_CONTROL: &str = "orbit_control";
pub const RESTRICTED_ZONE_CONTROL: &str = "restricted_zone_control";
pub const USER_PROGRAM: &str = "user_program";
pub const SECURITY: &str = "security";

/// Every component name, monitor last.
pub const ALL: [&str; 8] = [
    SATELLITE,
    CAMERA,
    ORBIT_DRAWER,
    OPTICS_CONTROL,
    ORBIT_CONTROL,
    RESTRICTED_ZONE_CONTROL,
    USER_PROGRAM,
    SECURITY,
];
