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

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use sentinel_reactive::prelude::*;
use sentinel_satellite::{
    mission_policies, Capability, Mission, MissionConfig, OrbitParameters, SatelliteOperation,
    Scenario,
};
use tracing::{info, subscriber, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

const LOG_FILENAME: &str = "sentinel-mission.log";

/// Runs the simulated satellite mission behind the security monitor.
#[derive(Debug, Parser)]
#[command(name = "sentinel-mission", version, about)]
struct Cli {
    /// Policy file (`[[policy]]` entries). Defaults to the built-in mission policies.
    #[arg(long)]
    policies: Option<PathBuf>,

    /// Scenario file (`[[step]]` entries). Defaults to the built-in scenario.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Seconds to keep running after the last scenario step.
    #[arg(long, default_value_t = 5)]
    duration: u64,

    /// Initial altitude in metres.
    #[arg(long, default_value_t = 1_000_000.0)]
    altitude: f64,

    /// Initial right ascension of the ascending node, in radians.
    #[arg(long, default_value_t = 0.0)]
    raan: f64,

    /// Initial inclination, in radians.
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_3)]
    inclination: f64,

    /// Capability granted to the user program. Repeat for several; defaults to all.
    #[arg(long = "capability", value_name = "CAPABILITY")]
    capabilities: Vec<Capability>,

    /// Runtime configuration file. Defaults to the XDG lookup.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, env = "SENTINEL_LOG", default_value = "info")]
    log_level: String,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn init_logging(cli: &Cli) -> anyhow::Result<WorkerGuard> {
    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("invalid log filter `{}`", cli.log_level))?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &cli.log_dir, LOG_FILENAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = FmtSubscriber::builder()
        .with_span_events(FmtSpan::NONE)
        .compact()
        .with_line_number(false)
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();

    subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;
    Ok(guard)
}

#[sentinel_main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli)?;

    let runtime = match &cli.config {
        Some(path) => {
            SentinelApp::launch_with_config::<SatelliteOperation>(SentinelConfig::load_from(path)?)
        }
        None => SentinelApp::launch::<SatelliteOperation>(),
    };

    let policies = match &cli.policies {
        Some(path) => PolicySet::load(path)?,
        None => mission_policies(),
    };
    if policies.is_empty() {
        warn!("policy set is empty; every cross-component message will be denied");
    }

    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::builtin(),
    };
    let steps = scenario.envelopes()?;

    let mut config = MissionConfig {
        initial_orbit: OrbitParameters::new(cli.altitude, cli.raan, cli.inclination),
        policies,
        ..MissionConfig::default()
    };
    if !cli.capabilities.is_empty() {
        config.capabilities = cli.capabilities.iter().copied().collect();
    }

    let mission = Mission::assemble(runtime, config)?;
    let started = mission.start();
    info!(started, steps = steps.len(), "mission started");

    sentinel_satellite::scenario::play(&mission, steps).await;
    tokio::time::sleep(Duration::from_secs(cli.duration)).await;

    let stats = mission.stats();
    let map = mission.map().borrow().clone();
    println!(
        "monitor: {} forwarded, {} denied, {} undeliverable",
        stats.forwarded, stats.denied, stats.undeliverable
    );
    println!(
        "map: {} trajectory points, {} photos, {} restricted zones",
        map.trajectory.len(),
        map.photos.len(),
        map.zones.len()
    );

    mission.shutdown().await?;
    info!("mission complete");
    Ok(())
}
