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

use crate::names::{
    CAMERA, OPTICS_CONTROL, ORBIT_CONTROL, ORBIT_DRAWER, RESTRICTED_ZONE_CONTROL, SATELLITE,
    USER_PROGRAM,
};

/// `(source, destination, operation)` for every flow the mission needs.
pub const MISSION_FLOWS: &[(&str, &str, &str)] = &[
    (CAMERA, SATELLITE, "post_camera_coords"),
    (SATELLITE, CAMERA, "camera_update"),
    (CAMERA, OPTICS_CONTROL, "post_photo"),
    (OPTICS_CONTROL, CAMERA, "request_photo"),
    (OPTICS_CONTROL, ORBIT_DRAWER, "update_photo_map"),
    (ORBIT_DRAWER, SATELLITE, "send_data"),
    (SATELLITE, ORBIT_DRAWER, "update_orbit_data"),
    (RESTRICTED_ZONE_CONTROL, ORBIT_DRAWER, "draw_restricted_zone"),
    (RESTRICTED_ZONE_CONTROL, ORBIT_DRAWER, "clear_restricted_zone"),
    (RESTRICTED_ZONE_CONTROL, OPTICS_CONTROL, "sync_zones"),
    (ORBIT_CONTROL, SATELLITE, "change_orbit"),
    (USER_PROGRAM, ORBIT_CONTROL, "change_orbit"),
    (USER_PROGRAM, CAMERA, "request_photo"),
    (USER_PROGRAM, RESTRICTED_ZONE_CONTROL, "add_zone"),
    (USER_PROGRAM, RESTRICTED_ZONE_CONTROL, "remove_zone"),
];

/// The default allow-list. Nothing outside [`MISSION_FLOWS`] is permitted.
pub fn mission_policies() -> PolicySet {
    MISSION_FLOWS
        .iter()
        .map(|&(source, destination, operation)| Policy::new(source, destination, operation))
        .collect()
}
