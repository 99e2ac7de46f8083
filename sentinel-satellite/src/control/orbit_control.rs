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

use std::ops::RangeInclusive;

use sentinel_reactive::prelude::*;
use tracing::{error, info};

use crate::names::SATELLITE;
use crate::operation::{OrbitParameters, SatelliteOperation};

/// Altitudes, in meters, that orbit control will command.
pub const ALLOWED_ALTITUDE: RangeInclusive<f64> = 200_000.0..=2_000_000.0;

/// Why a maneuver was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrbitError {
    #[error("altitude {altitude} m is outside {min}..={max} m")]
    AltitudeOutOfBounds { altitude: f64, min: f64, max: f64 },
}

/// Checks maneuver requests and forwards the valid ones to the satellite.
#[sentinel_actor]
#[derive(Default)]
pub struct OrbitControl {
    maneuvers_sent: u64,
}

impl OrbitControl {
    pub fn validate(params: &OrbitParameters) -> Result<(), OrbitError> {
        if ALLOWED_ALTITUDE.contains(&params.altitude) {
            Ok(())
        } else {
            Err(OrbitError::AltitudeOutOfBounds {
                altitude: params.altitude,
                min: *ALLOWED_ALTITUDE.start(),
                max: *ALLOWED_ALTITUDE.end(),
            })
        }
    }

    pub fn maneuvers_sent(&self) -> u64 {
        self.maneuvers_sent
    }
}

#[async_trait]
impl Actor for OrbitControl {
    type Message = SatelliteOperation;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        envelope: Envelope<SatelliteOperation>,
    ) -> anyhow::Result<()> {
        let SatelliteOperation::ChangeOrbit(params) = envelope.payload() else {
            return Err(ctx.unexpected(envelope.payload()).into());
        };
        if let Err(err) = Self::validate(params) {
            error!(source = ?envelope.source(), "orbit change refused: {err}");
            return Ok(());
        }
        ctx.send_via_monitor(SATELLITE, SatelliteOperation::ChangeOrbit(*params))?;
        self.maneuvers_sent += 1;
        info!(
            altitude = params.altitude,
            raan = params.raan,
            inclination = params.inclination,
            "orbit change sent"
        );
        Ok(())
    }
}
