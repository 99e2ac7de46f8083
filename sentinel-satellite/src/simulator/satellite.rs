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

use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::{Add, Mul, Sub};

use sentinel_reactive::prelude::*;
use tracing::{debug, info};

use crate::names::{CAMERA, ORBIT_DRAWER};
use crate::operation::{GeoPoint, OrbitParameters, SatelliteOperation};

/// Gravitational constant, m³·kg⁻¹·s⁻².
pub const G: f64 = 6.674_30e-11;
/// kg
pub const EARTH_MASS: f64 = 5.972e24;
/// m
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Seconds of transfer per meter of displacement when changing orbit.
pub const ORBIT_CHANGE_COEF: f64 = 1e-6;

const ORBIT_SAMPLES: usize = 360;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, k: f64) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }
}

fn circular_position(radius: f64, raan: f64, angle: f64, inclination: f64) -> Vec3 {
    let (sin_raan, cos_raan) = raan.sin_cos();
    let (sin_a, cos_a) = angle.sin_cos();
    Vec3::new(
        radius * (cos_raan * cos_a - sin_raan * sin_a * inclination.cos()),
        radius * (sin_raan * cos_a + cos_raan * sin_a * inclination.cos()),
        radius * sin_a * inclination.sin(),
    )
}

fn circular_velocity(radius: f64, raan: f64, angle: f64, inclination: f64) -> Vec3 {
    let (sin_raan, cos_raan) = raan.sin_cos();
    let (sin_a, cos_a) = angle.sin_cos();
    let speed = (G * EARTH_MASS / radius).sqrt();
    Vec3::new(
        -speed * (cos_raan * sin_a + sin_raan * cos_a * inclination.cos()),
        speed * (-sin_raan * sin_a + cos_raan * cos_a * inclination.cos()),
        speed * cos_a * inclination.sin(),
    )
}

/// Angle of `position` along the orbit plane, measured from the ascending node, in `[0, TAU)`.
fn orbit_angle(position: Vec3, raan: f64, inclination: f64) -> f64 {
    let node = circular_position(1.0, raan, 0.0, inclination);
    let apex = circular_position(1.0, raan, FRAC_PI_2, inclination);
    position.dot(apex).atan2(position.dot(node)).rem_euclid(TAU)
}

fn gravity(position: Vec3) -> Vec3 {
    let r = position.norm();
    position * (-G * EARTH_MASS / (r * r * r))
}

/// Point-mass orbital integrator.
///
/// Each tick advances the state by `time_step` simulated seconds with
/// Velocity-Verlet. Maneuvers are instantaneous: the satellite jumps to the
/// closest of 360 sampled points on the target orbit and the transfer time is
/// only reported.
#[sentinel_actor]
pub struct Satellite {
    orbit: OrbitParameters,
    position_angle: f64,
    position: Vec3,
    velocity: Vec3,
    time_step: f64,
}

impl Satellite {
    pub fn new(orbit: OrbitParameters, position_angle: f64, time_step: f64) -> Self {
        let radius = EARTH_RADIUS + orbit.altitude;
        Self {
            orbit,
            position_angle,
            position: circular_position(radius, orbit.raan, position_angle, orbit.inclination),
            velocity: circular_velocity(radius, orbit.raan, position_angle, orbit.inclination),
            time_step,
        }
    }

    pub fn orbit(&self) -> OrbitParameters {
        self.orbit
    }

    /// Angle along the orbit of the current position, in radians.
    pub fn position_angle(&self) -> f64 {
        self.position_angle
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advances the state by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let acceleration = gravity(self.position);
        self.position = self.position + self.velocity * dt + acceleration * (0.5 * dt * dt);
        let next_acceleration = gravity(self.position);
        self.velocity = self.velocity + (acceleration + next_acceleration) * (0.5 * dt);
        self.position_angle = orbit_angle(self.position, self.orbit.raan, self.orbit.inclination);
    }

    /// The point directly beneath the satellite, in degrees.
    pub fn ground_point(&self) -> GeoPoint {
        let p = self.position;
        GeoPoint {
            lat: (p.z / p.norm()).asin().to_degrees(),
            lon: p.y.atan2(p.x).to_degrees(),
        }
    }

    /// Moves onto the target orbit. Returns the distance jumped, in meters.
    pub fn change_orbit(&mut self, target: OrbitParameters) -> f64 {
        let radius = EARTH_RADIUS + target.altitude;
        let (angle, position, distance) = (0..ORBIT_SAMPLES)
            .map(|i| {
                let angle = TAU * i as f64 / (ORBIT_SAMPLES - 1) as f64;
                let candidate =
                    circular_position(radius, target.raan, angle, target.inclination);
                (angle, candidate, (candidate - self.position).norm())
            })
            .fold((0.0, self.position, f64::INFINITY), |best, next| {
                if next.2 < best.2 {
                    next
                } else {
                    best
                }
            });

        self.orbit = target;
        self.position_angle = angle;
        self.position = position;
        self.velocity = circular_velocity(radius, target.raan, angle, target.inclination);
        distance
    }
}

#[async_trait]
impl Actor for Satellite {
    type Message = SatelliteOperation;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        envelope: Envelope<SatelliteOperation>,
    ) -> anyhow::Result<()> {
        match envelope.into_payload() {
            SatelliteOperation::PostCameraCoords => {
                let GeoPoint { lat, lon } = self.ground_point();
                ctx.send_via_monitor(CAMERA, SatelliteOperation::CameraUpdate { lat, lon })?;
                debug!(lat, lon, "camera coordinates sent");
            }
            SatelliteOperation::SendData => {
                let GeoPoint { lat, lon } = self.ground_point();
                ctx.send_via_monitor(
                    ORBIT_DRAWER,
                    SatelliteOperation::UpdateOrbitData { lat, lon },
                )?;
            }
            SatelliteOperation::ChangeOrbit(target) => {
                let distance = self.change_orbit(target);
                info!(
                    altitude = target.altitude,
                    raan = target.raan,
                    inclination = target.inclination,
                    distance,
                    transfer_secs = distance * ORBIT_CHANGE_COEF,
                    "orbit changed"
                );
            }
            other => return Err(ctx.unexpected(&other).into()),
        }
        Ok(())
    }

    async fn on_tick(&mut self, _ctx: &ActorContext<SatelliteOperation>) -> anyhow::Result<()> {
        self.step(self.time_step);
        Ok(())
    }

    async fn after_start(&mut self, _ctx: &ActorContext<SatelliteOperation>) -> anyhow::Result<()> {
        info!(orbit = ?self.orbit, "simulation started");
        Ok(())
    }
}
