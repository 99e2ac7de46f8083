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

use std::collections::BTreeSet;
use std::f64::consts::FRAC_PI_3;
use std::sync::Arc;
use std::time::Duration;

use sentinel_reactive::prelude::*;
use sentinel_reactive::security::MonitorSnapshot;
use tokio::sync::watch;
use tracing::info;

use crate::control::{OpticsControl, OrbitControl, RestrictedZoneControl, UserProgramExecutor};
use crate::names::{
    CAMERA, OPTICS_CONTROL, ORBIT_CONTROL, ORBIT_DRAWER, RESTRICTED_ZONE_CONTROL, SATELLITE,
    USER_PROGRAM,
};
use crate::operation::{Capability, OrbitParameters, SatelliteOperation};
use crate::policies::mission_policies;
use crate::simulator::{Camera, MapSnapshot, OrbitDrawer, Satellite};

/// How to build a mission.
#[derive(Debug, Clone)]
pub struct MissionConfig {
    pub initial_orbit: OrbitParameters,
    /// Radians along the initial orbit.
    pub position_angle: f64,
    /// Simulated seconds per satellite tick.
    pub time_step: f64,
    pub satellite_tick: Duration,
    pub drawer_tick: Duration,
    pub capabilities: BTreeSet<Capability>,
    pub policies: PolicySet,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            initial_orbit: OrbitParameters::new(1_000_000.0, 0.0, FRAC_PI_3),
            position_angle: 0.0,
            time_step: 30.0,
            satellite_tick: Duration::from_millis(100),
            drawer_tick: Duration::from_millis(200),
            capabilities: Capability::ALL.into_iter().collect(),
            policies: mission_policies(),
        }
    }
}

/// A fully wired mission: the monitor plus all seven components, staged on one runtime.
#[derive(Debug)]
pub struct Mission {
    runtime: ActorRuntime<SatelliteOperation>,
    map: watch::Receiver<MapSnapshot>,
    stats: Arc<MonitorStats>,
}

impl Mission {
    /// Creates and stages every component. Nothing runs until [`start`](Self::start).
    pub fn assemble(
        runtime: ActorRuntime<SatelliteOperation>,
        config: MissionConfig,
    ) -> anyhow::Result<Self> {
        let monitor_id = runtime.monitor_id();
        if let Some(policy) = config.policies.iter().find(|p| p.destination == monitor_id) {
            anyhow::bail!("policy `{policy}` routes events to the security monitor itself");
        }
        let monitor = SecurityMonitor::new(config.policies);
        let stats = monitor.stats();
        let (drawer, map) = OrbitDrawer::new();

        runtime.stage(runtime.new_actor(runtime.monitor_id(), monitor)?);
        runtime.stage(runtime.new_actor_with_config(
            ActorConfig::new(SATELLITE).with_tick_interval(config.satellite_tick),
            Satellite::new(config.initial_orbit, config.position_angle, config.time_step),
        )?);
        runtime.stage(runtime.new_actor(CAMERA, Camera::default())?);
        runtime.stage(runtime.new_actor_with_config(
            ActorConfig::new(ORBIT_DRAWER).with_tick_interval(config.drawer_tick),
            drawer,
        )?);
        runtime.stage(runtime.new_actor(OPTICS_CONTROL, OpticsControl::default())?);
        runtime.stage(runtime.new_actor(ORBIT_CONTROL, OrbitControl::default())?);
        runtime.stage(
            runtime.new_actor(RESTRICTED_ZONE_CONTROL, RestrictedZoneControl::default())?,
        );
        runtime.stage(runtime.new_actor(
            USER_PROGRAM,
            UserProgramExecutor::new(config.capabilities),
        )?);

        info!(components = runtime.actor_count(), "mission assembled");
        Ok(Self {
            runtime,
            map,
            stats,
        })
    }

    /// Starts every component.
    pub fn start(&self) -> usize {
        self.runtime.start_all()
    }

    pub fn runtime(&self) -> &ActorRuntime<SatelliteOperation> {
        &self.runtime
    }

    /// A subscription to the map's state.
    pub fn map(&self) -> watch::Receiver<MapSnapshot> {
        self.map.clone()
    }

    /// Monitor counters so far.
    pub fn stats(&self) -> MonitorSnapshot {
        self.stats.snapshot()
    }

    /// Delivers an operator envelope straight to its destination.
    pub fn inject(&self, envelope: Envelope<SatelliteOperation>) -> Result<(), MessageError> {
        self.runtime.inject(envelope)
    }

    /// Stops every component and waits for them.
    pub async fn shutdown(&self) -> anyhow::Result<()> {
        self.runtime.shutdown_all().await
    }
}
