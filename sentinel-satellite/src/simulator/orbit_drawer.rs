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

use std::collections::{BTreeMap, VecDeque};

use sentinel_reactive::prelude::*;
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::control::RestrictedZone;
use crate::names::SATELLITE;
use crate::operation::{GeoPoint, SatelliteOperation};

/// Ground-track points kept on the map.
pub const TRAJECTORY_LEN: usize = 50;

/// What the map currently shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub trajectory: Vec<GeoPoint>,
    pub photos: Vec<GeoPoint>,
    pub zones: BTreeMap<u32, RestrictedZone>,
}

/// Headless ground-track map.
///
/// Polls the satellite for telemetry every tick and republishes its state on a
/// watch channel after each change. Senders get nothing back.
#[sentinel_actor]
pub struct OrbitDrawer {
    trajectory: VecDeque<GeoPoint>,
    photos: Vec<GeoPoint>,
    zones: BTreeMap<u32, RestrictedZone>,
    publisher: watch::Sender<MapSnapshot>,
}

impl OrbitDrawer {
    pub fn new() -> (Self, watch::Receiver<MapSnapshot>) {
        let (publisher, subscriber) = watch::channel(MapSnapshot::default());
        let drawer = Self {
            trajectory: VecDeque::with_capacity(TRAJECTORY_LEN),
            photos: Vec::new(),
            zones: BTreeMap::new(),
            publisher,
        };
        (drawer, subscriber)
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            trajectory: self.trajectory.iter().copied().collect(),
            photos: self.photos.clone(),
            zones: self.zones.clone(),
        }
    }

    fn push_position(&mut self, point: GeoPoint) {
        // Start a fresh segment when the track wraps around the antimeridian.
        if let Some(last) = self.trajectory.back() {
            if (point.lon - last.lon).abs() > 180.0 {
                self.trajectory.clear();
            }
        }
        if self.trajectory.len() == TRAJECTORY_LEN {
            self.trajectory.pop_front();
        }
        self.trajectory.push_back(point);
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }
}

#[async_trait]
impl Actor for OrbitDrawer {
    type Message = SatelliteOperation;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        envelope: Envelope<SatelliteOperation>,
    ) -> anyhow::Result<()> {
        match envelope.into_payload() {
            SatelliteOperation::UpdateOrbitData { lat, lon } => {
                self.push_position(GeoPoint { lat, lon });
            }
            SatelliteOperation::UpdatePhotoMap { lat, lon } => {
                self.photos.push(GeoPoint { lat, lon });
                debug!(lat, lon, "photo drawn");
            }
            SatelliteOperation::DrawRestrictedZone(zone) => {
                self.zones.insert(zone.id(), zone);
                debug!(zone_id = zone.id(), "zone drawn");
            }
            SatelliteOperation::ClearRestrictedZone { zone_id } => {
                if self.zones.remove(&zone_id).is_none() {
                    return Ok(());
                }
                debug!(zone_id, "zone cleared");
            }
            other => return Err(ctx.unexpected(&other).into()),
        }
        self.publish();
        Ok(())
    }

    async fn on_tick(&mut self, ctx: &ActorContext<SatelliteOperation>) -> anyhow::Result<()> {
        ctx.send_via_monitor(SATELLITE, SatelliteOperation::SendData)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_is_bounded() {
        let (mut drawer, _rx) = OrbitDrawer::new();
        for i in 0..(TRAJECTORY_LEN + 10) {
            drawer.push_position(GeoPoint {
                lat: 0.0,
                lon: i as f64,
            });
        }
        let snapshot = drawer.snapshot();
        assert_eq!(snapshot.trajectory.len(), TRAJECTORY_LEN);
        assert_eq!(snapshot.trajectory[0].lon, 10.0);
    }

    #[test]
    fn test_wraparound_starts_new_segment() {
        let (mut drawer, _rx) = OrbitDrawer::new();
        drawer.push_position(GeoPoint { lat: 0.0, lon: 179.0 });
        drawer.push_position(GeoPoint { lat: 0.0, lon: -179.0 });
        assert_eq!(drawer.snapshot().trajectory, vec![GeoPoint { lat: 0.0, lon: -179.0 }]);
    }
}
