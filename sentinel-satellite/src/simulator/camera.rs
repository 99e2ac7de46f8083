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
use tracing::debug;

use crate::names::{OPTICS_CONTROL, SATELLITE};
use crate::operation::SatelliteOperation;

/// Takes a photo by asking the satellite where it is, then hands the point to
/// optics control.
#[sentinel_actor]
#[derive(Default)]
pub struct Camera {
    pending: u32,
}

#[async_trait]
impl Actor for Camera {
    type Message = SatelliteOperation;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        envelope: Envelope<SatelliteOperation>,
    ) -> anyhow::Result<()> {
        match envelope.into_payload() {
            SatelliteOperation::RequestPhoto => {
                ctx.send_via_monitor(SATELLITE, SatelliteOperation::PostCameraCoords)?;
                self.pending += 1;
                debug!(pending = self.pending, "photo requested");
            }
            SatelliteOperation::CameraUpdate { lat, lon } => {
                self.pending = self.pending.saturating_sub(1);
                ctx.send_via_monitor(OPTICS_CONTROL, SatelliteOperation::PostPhoto { lat, lon })?;
                debug!(lat, lon, "photo taken");
            }
            other => return Err(ctx.unexpected(&other).into()),
        }
        Ok(())
    }
}
