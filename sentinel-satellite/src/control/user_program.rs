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

use sentinel_reactive::prelude::*;
use tracing::{debug, error, info};

use crate::names::{CAMERA, ORBIT_CONTROL, RESTRICTED_ZONE_CONTROL};
use crate::operation::{Capability, SatelliteOperation, UserCommand};

/// Translates user commands into mission operations, subject to capabilities.
///
/// This check runs before anything reaches the monitor; a command that passes it
/// still needs a matching policy to be delivered. Capabilities change only
/// through `grant_capability` / `revoke_capability` events in this actor's own
/// mailbox.
#[sentinel_actor]
#[derive(Default)]
pub struct UserProgramExecutor {
    capabilities: BTreeSet<Capability>,
}

impl UserProgramExecutor {
    pub fn new(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            capabilities: capabilities.into_iter().collect(),
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    fn run(
        &self,
        ctx: &ActorContext<SatelliteOperation>,
        command: UserCommand,
    ) -> anyhow::Result<()> {
        let required = command.required_capability();
        if !self.has(required) {
            error!(%required, ?command, "command refused: missing capability");
            return Ok(());
        }
        let (destination, operation) = match command {
            UserCommand::Orbit(params) => (ORBIT_CONTROL, SatelliteOperation::ChangeOrbit(params)),
            UserCommand::MakePhoto => (CAMERA, SatelliteOperation::RequestPhoto),
            UserCommand::AddZone(spec) => {
                (RESTRICTED_ZONE_CONTROL, SatelliteOperation::AddZone(spec))
            }
            UserCommand::RemoveZone { zone_id } => (
                RESTRICTED_ZONE_CONTROL,
                SatelliteOperation::RemoveZone { zone_id },
            ),
        };
        debug!(destination, operation = operation.operation(), "command accepted");
        ctx.send_via_monitor(destination, operation)?;
        Ok(())
    }
}

#[async_trait]
impl Actor for UserProgramExecutor {
    type Message = SatelliteOperation;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<SatelliteOperation>,
        envelope: Envelope<SatelliteOperation>,
    ) -> anyhow::Result<()> {
        match envelope.into_payload() {
            SatelliteOperation::RunUserCommand(command) => self.run(ctx, command)?,
            SatelliteOperation::GrantCapability(capability) => {
                if self.capabilities.insert(capability) {
                    info!(%capability, "capability granted");
                }
            }
            SatelliteOperation::RevokeCapability(capability) => {
                if self.capabilities.remove(&capability) {
                    info!(%capability, "capability revoked");
                }
            }
            other => return Err(ctx.unexpected(&other).into()),
        }
        Ok(())
    }
}
