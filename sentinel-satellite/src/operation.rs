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

use std::fmt;
use std::str::FromStr;

use sentinel_reactive::prelude::*;
use serde::{Deserialize, Serialize};

use crate::control::{RestrictedZone, ZoneSpec};

/// Target orbit for a maneuver. Angles are in radians, altitude in meters above
/// the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParameters {
    pub altitude: f64,
    pub raan: f64,
    pub inclination: f64,
}

impl OrbitParameters {
    pub const fn new(altitude: f64, raan: f64, inclination: f64) -> Self {
        Self {
            altitude,
            raan,
            inclination,
        }
    }
}

/// A point on the ground in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Permissions held by the user-program executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Orbit,
    Photo,
    Zones,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::Orbit, Capability::Photo, Capability::Zones];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::Photo => "photo",
            Self::Zones => "zones",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability `{0}` (expected orbit, photo or zones)")]
pub struct UnknownCapability(String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCapability(s.to_string()))
    }
}

/// Commands a user program may issue, each gated by one [`Capability`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arguments", rename_all = "snake_case")]
pub enum UserCommand {
    Orbit(OrbitParameters),
    MakePhoto,
    AddZone(ZoneSpec),
    RemoveZone { zone_id: u32 },
}

impl UserCommand {
    pub const fn required_capability(&self) -> Capability {
        match self {
            Self::Orbit(_) => Capability::Orbit,
            Self::MakePhoto => Capability::Photo,
            Self::AddZone(_) | Self::RemoveZone { .. } => Capability::Zones,
        }
    }
}

/// Every operation that crosses a component boundary in the mission.
///
/// On the wire each variant is `{"operation": "<name>", "parameters": ...}`, with
/// `parameters` omitted for the operations that take none.
#[sentinel_message(wire)]
#[derive(PartialEq)]
#[serde(tag = "operation", content = "parameters", rename_all = "snake_case")]
pub enum SatelliteOperation {
    /// Ask the camera to take a photo.
    RequestPhoto,
    /// A photo was taken at this sub-satellite point.
    PostPhoto { lat: f64, lon: f64 },
    /// The satellite's current sub-satellite point, for the camera.
    CameraUpdate { lat: f64, lon: f64 },
    /// The camera asks the satellite where it is looking.
    PostCameraCoords,
    /// A new ground-track point for the map.
    UpdateOrbitData { lat: f64, lon: f64 },
    /// A new photo location for the map.
    UpdatePhotoMap { lat: f64, lon: f64 },
    DrawRestrictedZone(RestrictedZone),
    ClearRestrictedZone { zone_id: u32 },
    /// The complete current zone list.
    SyncZones(Vec<RestrictedZone>),
    ChangeOrbit(OrbitParameters),
    AddZone(ZoneSpec),
    RemoveZone { zone_id: u32 },
    /// The map asks the satellite for a telemetry point.
    SendData,
    RunUserCommand(UserCommand),
    GrantCapability(Capability),
    RevokeCapability(Capability),
}

impl SentinelMessage for SatelliteOperation {
    const OPERATIONS: &'static [&'static str] = &[
        "request_photo",
        "post_photo",
        "camera_update",
        "post_camera_coords",
        "update_orbit_data",
        "update_photo_map",
        "draw_restricted_zone",
        "clear_restricted_zone",
        "sync_zones",
        "change_orbit",
        "add_zone",
        "remove_zone",
        "send_data",
        "run_user_command",
        "grant_capability",
        "revoke_capability",
    ];

    fn operation(&self) -> &'static str {
        match self {
            Self::RequestPhoto => "request_photo",
            Self::PostPhoto { .. } => "post_photo",
            Self::CameraUpdate { .. } => "camera_update",
            Self::PostCameraCoords => "post_camera_coords",
            Self::UpdateOrbitData { .. } => "update_orbit_data",
            Self::UpdatePhotoMap { .. } => "update_photo_map",
            Self::DrawRestrictedZone(_) => "draw_restricted_zone",
            Self::ClearRestrictedZone { .. } => "clear_restricted_zone",
            Self::SyncZones(_) => "sync_zones",
            Self::ChangeOrbit(_) => "change_orbit",
            Self::AddZone(_) => "add_zone",
            Self::RemoveZone { .. } => "remove_zone",
            Self::SendData => "send_data",
            Self::RunUserCommand(_) => "run_user_command",
            Self::GrantCapability(_) => "grant_capability",
            Self::RevokeCapability(_) => "revoke_capability",
        }
    }
}
