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
use tracing::{debug, error, info};

use crate::control::RestrictedZone;
use crate::names::{CAMERA, ORBIT_DRAWER};
use crate::operation::SatelliteOperation;

/// Decides which photos may be published.
///
/// Keeps the latest zone list from zone control and refuses any photo whose
/// point falls inside one of them.
#[sentinel_actor]
#[derive(Default)]
pub struct OpticsControl {
    zones: Vec<RestrictedZone>,
}

impl OpticsControl {
    /// The first zone containing the point, if any.
    pub fn blocking_zone(&self, lat: f64, lon: f64) -> Option<&RestrictedZone> {
        self.zones.iter().find(|zone| zone.contains(lat, lon))
    }

    pub fn zones(&self) -> &[RestrictedZone] {
        &self.zones
    }
}

#[async_trait]
impl Actor for OpticsControl {
    type Message = SatelliteOperation;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        envelope: Envelope<SatelliteOperation>,
    ) -> anyhow::Result<()> {
        match envelope.into_payload() {
            SatelliteOperation::RequestPhoto => {
                ctx.send_via_monitor(CAMERA, SatelliteOperation::RequestPhoto)?;
            }
            SatelliteOperation::PostPhoto { lat, lon } => {
                if let Some(zone) = self.blocking_zone(lat, lon) {
                    error!(zone_id = zone.id(), lat, lon, "photo inside restricted zone refused");
                    return Ok(());
                }
                ctx.send_via_monitor(
                    ORBIT_DRAWER,
                    SatelliteOperation::UpdatePhotoMap { lat, lon },
                )?;
                info!(lat, lon, "photo published");
            }
            SatelliteOperation::SyncZones(zones) => {
                debug!(count = zones.len(), "zones synced");
                self.zones = zones;
            }
            other => return Err(ctx.unexpected(&other).into()),
        }
        Ok(())
    }
}
