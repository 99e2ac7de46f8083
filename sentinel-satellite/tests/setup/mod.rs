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

use std::sync::Once;
use std::time::Duration;

use sentinel_reactive::prelude::*;
use sentinel_satellite::SatelliteOperation;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static INIT: Once = Once::new();

pub fn initialize_tracing() {
    INIT.call_once(|| {
        std::fs::create_dir_all("logs").expect("could not create logs dir");

        let file_appender =
            RollingFileAppender::new(Rotation::NEVER, "logs", "satellite_tests.txt");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        Box::leak(Box::new(guard));

        let filter = EnvFilter::new("trace")
            .add_directive("sentinel_satellite=trace".parse().unwrap())
            .add_directive("sentinel_reactive::security=debug".parse().unwrap())
            .add_directive("tokio=info".parse().unwrap());

        let subscriber = FmtSubscriber::builder()
            .with_span_events(FmtSpan::NONE)
            .with_max_level(Level::TRACE)
            .compact()
            .with_line_number(true)
            .without_time()
            .with_target(true)
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}

pub fn fast_config() -> SentinelConfig {
    let mut config = SentinelConfig::default();
    config.limits.poll_interval_ms = 2;
    config.timeouts.actor_shutdown_timeout_ms = 2_000;
    config.timeouts.system_shutdown_timeout_ms = 2_000;
    config
}

/// A runtime whose monitor slot is taken by a bare mailbox, so everything a
/// component sends through the monitor can be inspected.
pub fn runtime_with_monitor_tap() -> (
    ActorRuntime<SatelliteOperation>,
    MailboxReceiver<SatelliteOperation>,
) {
    let runtime = SentinelApp::launch_with_config::<SatelliteOperation>(fast_config());
    let (mailbox, receiver) = Mailbox::channel();
    runtime
        .registry()
        .register(runtime.monitor_id(), mailbox)
        .expect("monitor name is free");
    (runtime, receiver)
}

pub async fn next_envelope(
    receiver: &mut MailboxReceiver<SatelliteOperation>,
) -> Option<Envelope<SatelliteOperation>> {
    tokio::time::timeout(Duration::from_secs(1), receiver.recv())
        .await
        .ok()
        .flatten()
}

/// Asserts nothing arrives within a short window.
pub async fn assert_silent(receiver: &mut MailboxReceiver<SatelliteOperation>) {
    let outcome = tokio::time::timeout(Duration::from_millis(100), receiver.recv()).await;
    if let Ok(Some(envelope)) = outcome {
        panic!("unexpected envelope: {envelope:?}");
    }
}
