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

use std::collections::BTreeMap;

use sentinel_reactive::prelude::*;
use tracing::info;

use crate::control::{RestrictedZone, ZoneSpec};
use crate::names::{OPTICS_CONTROL, ORBIT_DRAWER};
use crate::operation::SatelliteOperation;

/// Owns the set of restricted zones.
///
/// Every accepted change is announced twice through the monitor: a draw or clear
/// for the map, and the full zone list for optics control.
#[sentinel_actor]
#[derive(Default)]
pub struct RestrictedZoneControl {
    zones: BTreeMap<u32, RestrictedZone>,
}

impl RestrictedZoneControl {
    pub fn zones(&self) -> impl Iterator<Item = &RestrictedZone> {
        self.zones.values()
    }

    fn snapshot(&self) -> Vec<RestrictedZone> {
        self.zones.values().copied().collect()
    }

    fn add_zone(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        spec: ZoneSpec,
    ) -> anyhow::Result<()> {
        if self.zones.contains_key(&spec.zone_id) {
            info!(zone_id = spec.zone_id, "zone already exists; ignoring");
            return Ok(());
        }
        let zone = RestrictedZone::try_from(spec)?;
        self.zones.insert(zone.id(), zone);
        info!(zone_id = zone.id(), "zone added");

        ctx.send_via_monitor(ORBIT_DRAWER, SatelliteOperation::DrawRestrictedZone(zone))?;
        ctx.send_via_monitor(OPTICS_CONTROL, SatelliteOperation::SyncZones(self.snapshot()))?;
        Ok(())
    }

    fn remove_zone(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        zone_id: u32,
    ) -> anyhow::Result<()> {
        if self.zones.remove(&zone_id).is_none() {
            info!(zone_id, "no such zone; nothing to remove");
            return Ok(());
        }
        info!(zone_id, "zone removed");

        ctx.send_via_monitor(ORBIT_DRAWER, SatelliteOperation::ClearRestrictedZone { zone_id })?;
        ctx.send_via_monitor(OPTICS_CONTROL, SatelliteOperation::SyncZones(self.snapshot()))?;
        Ok(())
    }
}

#[async_trait]
impl Actor for RestrictedZoneControl {
    type Message = SatelliteOperation;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        envelope: Envelope<SatelliteOperation>,
    ) -> anyhow::Result<()> {
        match envelope.into_payload() {
            SatelliteOperation::AddZone(spec) => self.add_zone(ctx, spec),
            SatelliteOperation::RemoveZone { zone_id } => self.remove_zone(ctx, zone_id),
            other => Err(ctx.unexpected(&other).into()),
        }
    }
}
