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
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub mod actors;
pub mod messages;

pub use messages::TestOp;

// Ensures tracing initialization happens only once across all tests.
static INIT: Once = Once::new();

/// Initializes the global tracing subscriber for tests, writing to `logs/`.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        std::fs::create_dir_all("logs").expect("could not create logs dir");

        let file_appender = RollingFileAppender::new(Rotation::NEVER, "logs", "sentinel_tests.txt");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Leak the guard so the non-blocking writer is not dropped before process exit
        Box::leak(Box::new(guard));

        let filter = EnvFilter::new("trace")
            .add_directive(
                "sentinel_reactive::actor::managed_actor::started=trace"
                    .parse()
                    .unwrap(),
            )
            .add_directive("sentinel_reactive::security=trace".parse().unwrap())
            .add_directive("tokio=info".parse().unwrap())
            .add_directive(tracing_subscriber::filter::LevelFilter::TRACE.into());

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

/// Configuration with a short poll interval and short timeouts so tests finish quickly.
pub fn fast_config() -> SentinelConfig {
    let mut config = SentinelConfig::default();
    config.limits.poll_interval_ms = 2;
    config.timeouts.actor_shutdown_timeout_ms = 2_000;
    config.timeouts.system_shutdown_timeout_ms = 2_000;
    config
}

/// Registers a bare mailbox under `name` and returns its receiving side.
///
/// Taps stand in for components whose only job in a test is to be observed.
pub fn tap(runtime: &ActorRuntime<TestOp>, name: &str) -> MailboxReceiver<TestOp> {
    let (mailbox, receiver) = Mailbox::channel();
    runtime
        .registry()
        .register(name, mailbox)
        .expect("tap name is free");
    receiver
}

/// Waits up to a second for the next envelope on a tap.
pub async fn next_envelope(receiver: &mut MailboxReceiver<TestOp>) -> Option<Envelope<TestOp>> {
    tokio::time::timeout(Duration::from_secs(1), receiver.recv())
        .await
        .ok()
        .flatten()
}

/// Gives running actors time to work through a few iterations.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
