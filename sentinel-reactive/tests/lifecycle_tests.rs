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

use std::sync::atomic::Ordering;
use std::time::Duration;

use sentinel_reactive::prelude::*;
use sentinel_test::prelude::*;

use crate::setup::actors::{Echo, Recorder};
use crate::setup::{fast_config, initialize_tracing, settle, TestOp};

mod setup;

/// Events already in the mailbox when the stop signal lands are still handled,
/// in order, before the loop exits.
#[sentinel_test]
async fn test_events_queued_before_stop_are_handled() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let recorder = Recorder::new();
    let seen = recorder.seen.clone();
    let stopped = recorder.stopped.clone();

    let actor = runtime.new_actor("recorder", recorder)?;
    let handle = actor.handle().clone();
    for n in 0..100 {
        handle.post(Envelope::external("recorder", TestOp::Count(n)))?;
    }
    handle.signal_stop()?;

    let handle = actor.start();
    handle.stop().await?;

    let expected: Vec<TestOp> = (0..100).map(TestOp::Count).collect();
    assert_eq!(Recorder::payloads(&seen), expected);
    assert!(*stopped.lock(), "before_stop hook should have run");
    assert!(handle.is_stopped());
    Ok(())
}

#[sentinel_test]
async fn test_tick_runs_while_idle() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let recorder = Recorder::new();
    let ticks = recorder.ticks.clone();

    let handle = runtime.new_actor("ticker", recorder)?.start();
    settle().await;
    handle.stop().await?;

    assert!(*ticks.lock() > 1, "expected several ticks, saw {}", *ticks.lock());
    Ok(())
}

#[sentinel_test]
async fn test_per_actor_tick_interval() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let config = ActorConfig::new("slow").with_tick_interval(Duration::from_millis(250));
    let actor = runtime.new_actor_with_config(config, Recorder::new())?;
    assert_eq!(actor.tick_interval(), Duration::from_millis(250));

    let other = runtime.new_actor("fast", Recorder::new())?;
    assert_eq!(other.tick_interval(), Duration::from_millis(2));
    Ok(())
}

#[sentinel_test]
async fn test_start_all_then_shutdown_all() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let alpha = Recorder::new();
    let alpha_seen = alpha.seen.clone();
    let beta = Recorder::new();
    let beta_stopped = beta.stopped.clone();

    runtime.stage(runtime.new_actor("alpha", alpha)?);
    runtime.stage(runtime.new_actor("beta", beta)?);
    assert_eq!(runtime.actor_count(), 2);
    assert_eq!(runtime.start_all(), 2);
    assert_eq!(runtime.start_all(), 0, "staged actors start once");

    runtime.inject(Envelope::external("alpha", TestOp::Ping))?;
    settle().await;
    runtime.shutdown_all().await?;

    assert_eq!(Recorder::payloads(&alpha_seen), vec![TestOp::Ping]);
    assert!(*beta_stopped.lock());
    assert_eq!(runtime.actor_count(), 0);
    Ok(())
}

#[sentinel_test]
async fn test_stopping_twice_is_harmless() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let handle = runtime.new_actor("twice", Recorder::new())?.start();
    handle.stop().await?;
    handle.stop().await?;
    assert!(handle.is_stopped());
    Ok(())
}

#[sentinel_test]
async fn test_inject_to_unknown_destination_fails() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let err = runtime
        .inject(Envelope::external("nobody", TestOp::Ping))
        .expect_err("nothing is registered");
    assert!(matches!(err, MessageError::UnknownDestination(ref id) if id == "nobody"));
    Ok(())
}

#[sentinel_test]
async fn test_idle_model_can_be_adjusted_before_start() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let mut actor = runtime.new_actor("adjusted", Recorder::new())?;
    let replacement = Recorder::new();
    let seen = replacement.seen.clone();
    *actor.model_mut() = replacement;
    runtime.stage(actor);
    runtime.start_all();

    let handle = runtime.handle("adjusted").expect("handle kept by the runtime");
    assert_eq!(handle.id(), "adjusted");
    assert!(runtime.handle("missing").is_none());

    runtime.inject(Envelope::external("adjusted", TestOp::Ping))?;
    settle().await;
    handle.stop().await?;
    assert_eq!(Recorder::payloads(&seen), vec![TestOp::Ping]);
    Ok(())
}

/// Once the loop has exited, the mailbox is closed and nothing more is handled.
#[sentinel_test]
async fn test_no_events_handled_after_stop() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let recorder = Recorder::new();
    let seen = recorder.seen.clone();
    let stopped = recorder.stopped.clone();

    let handle = runtime.new_actor("finished", recorder)?.start();
    handle.post(Envelope::external("finished", TestOp::Ping))?;
    handle.stop().await?;
    assert!(*stopped.lock());
    settle().await;

    let err = handle
        .post(Envelope::external("finished", TestOp::Count(7)))
        .expect_err("the actor has stopped");
    assert!(matches!(err, MessageError::SendFailed(_)));
    settle().await;
    assert_eq!(Recorder::payloads(&seen), vec![TestOp::Ping]);
    Ok(())
}

/// Events a handler posts to its own mailbox wait for the next pass, so the
/// stop signal is still seen.
#[sentinel_test]
async fn test_self_posting_actor_still_stops() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let echo = Echo::default();
    let echoed = echo.echoed.clone();

    let handle = runtime.new_actor("echo", echo)?.start();
    handle.post(Envelope::external("echo", TestOp::Count(0)))?;
    settle().await;
    tokio::time::timeout(Duration::from_secs(1), handle.stop()).await??;

    assert!(echoed.load(Ordering::SeqCst) > 1);
    assert!(handle.is_stopped());
    Ok(())
}
