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

//! Timed operator injections.
//!
//! ```toml
//! [[step]]
//! delay_ms = 3000
//! destination = "restricted_zone_control"
//! operation = "add_zone"
//! parameters = [1, 25.0, 155.0, 35.0, 165.0]
//! ```

use std::path::Path;
use std::time::Duration;

use sentinel_reactive::message::decode_payload;
use sentinel_reactive::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::mission::Mission;
use crate::names::{CAMERA, ORBIT_CONTROL, RESTRICTED_ZONE_CONTROL};
use crate::operation::SatelliteOperation;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("step {index}: {source}")]
    Step {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

/// One injection: wait `delay_ms`, then deliver `operation` to `destination`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStep {
    #[serde(default)]
    pub delay_ms: u64,
    pub destination: String,
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<toml::Value>,
}

impl ScenarioStep {
    fn decode(&self) -> Result<(Duration, Envelope<SatelliteOperation>), DecodeError> {
        let parameters = self
            .parameters
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let payload = decode_payload::<SatelliteOperation>(&self.operation, parameters)?;
        Ok((
            Duration::from_millis(self.delay_ms),
            Envelope::external(self.destination.as_str(), payload),
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, rename = "step")]
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Adds a restricted zone, tries an orbit below the allowed band, then asks
    /// for six photos half a second apart.
    pub fn builtin() -> Self {
        let zone = toml::Value::Array(vec![
            toml::Value::Integer(1),
            toml::Value::Float(25.0),
            toml::Value::Float(155.0),
            toml::Value::Float(35.0),
            toml::Value::Float(165.0),
        ]);
        let mut orbit = toml::map::Map::new();
        orbit.insert("altitude".into(), toml::Value::Float(50_000.0));
        orbit.insert("raan".into(), toml::Value::Float(0.0));
        orbit.insert("inclination".into(), toml::Value::Float(0.0));

        let mut steps = vec![
            ScenarioStep {
                delay_ms: 3_000,
                destination: RESTRICTED_ZONE_CONTROL.into(),
                operation: "add_zone".into(),
                parameters: Some(zone),
            },
            ScenarioStep {
                delay_ms: 2_000,
                destination: ORBIT_CONTROL.into(),
                operation: "change_orbit".into(),
                parameters: Some(toml::Value::Table(orbit)),
            },
        ];
        for i in 0..6 {
            steps.push(ScenarioStep {
                delay_ms: if i == 0 { 2_000 } else { 500 },
                destination: CAMERA.into(),
                operation: "request_photo".into(),
                parameters: None,
            });
        }
        Self { steps }
    }

    /// Decodes every step, failing on the first that does not fit the operation union.
    pub fn envelopes(
        &self,
    ) -> Result<Vec<(Duration, Envelope<SatelliteOperation>)>, ScenarioError> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                step.decode()
                    .map_err(|source| ScenarioError::Step { index, source })
            })
            .collect()
    }
}

/// Delivers each envelope after its delay. Undeliverable steps are logged and skipped.
pub async fn play(mission: &Mission, steps: Vec<(Duration, Envelope<SatelliteOperation>)>) {
    for (delay, envelope) in steps {
        tokio::time::sleep(delay).await;
        info!(
            destination = %envelope.destination(),
            operation = envelope.operation(),
            "injecting"
        );
        if let Err(err) = mission.inject(envelope) {
            error!("scenario step not delivered: {err}");
        }
    }
}
