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

use serde::{Deserialize, Serialize};

/// Raised when a zone's corners are not ordered south-west to north-east.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoneError {
    /// `lat_min < lat_max` and `lon_min < lon_max` must both hold.
    #[error(
        "zone {zone_id}: corners must satisfy lat_min < lat_max and lon_min < lon_max \
         (got lat {lat_min}..{lat_max}, lon {lon_min}..{lon_max})"
    )]
    InvalidCorners {
        zone_id: u32,
        lat_min: f64,
        lon_min: f64,
        lat_max: f64,
        lon_max: f64,
    },
}

/// Raw zone parameters as they arrive from a command or the wire.
///
/// Positional on the wire as well as by name, so `[1, 25, 155, 35, 165]` and
/// `{"zone_id": 1, "lat_min": 25, ...}` both decode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub zone_id: u32,
    pub lat_min: f64,
    pub lon_min: f64,
    pub lat_max: f64,
    pub lon_max: f64,
}

/// An axis-aligned rectangle in latitude/longitude where photography is forbidden.
///
/// Always well-formed: the only ways to build one check the corner ordering.
/// There is no antimeridian handling, so a zone cannot span longitude ±180.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ZoneSpec", into = "ZoneSpec")]
pub struct RestrictedZone {
    id: u32,
    lat_min: f64,
    lon_min: f64,
    lat_max: f64,
    lon_max: f64,
}

impl RestrictedZone {
    pub fn new(
        id: u32,
        lat_min: f64,
        lon_min: f64,
        lat_max: f64,
        lon_max: f64,
    ) -> Result<Self, ZoneError> {
        // Negated comparisons so NaN corners are rejected too.
        if !(lat_min < lat_max) || !(lon_min < lon_max) {
            return Err(ZoneError::InvalidCorners {
                zone_id: id,
                lat_min,
                lon_min,
                lat_max,
                lon_max,
            });
        }
        Ok(Self {
            id,
            lat_min,
            lon_min,
            lat_max,
            lon_max,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    /// Inclusive containment test.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat)
            && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

impl TryFrom<ZoneSpec> for RestrictedZone {
    type Error = ZoneError;

    fn try_from(spec: ZoneSpec) -> Result<Self, Self::Error> {
        Self::new(
            spec.zone_id,
            spec.lat_min,
            spec.lon_min,
            spec.lat_max,
            spec.lon_max,
        )
    }
}

impl From<RestrictedZone> for ZoneSpec {
    fn from(zone: RestrictedZone) -> Self {
        Self {
            zone_id: zone.id,
            lat_min: zone.lat_min,
            lon_min: zone.lon_min,
            lat_max: zone.lat_max,
            lon_max: zone.lon_max,
        }
    }
}
