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

use std::fs;
use std::time::Duration;

use sentinel_reactive::common::ConfigError;
use sentinel_reactive::prelude::*;
use tempfile::TempDir;

#[test]
fn test_load_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sentinel.toml");
    fs::write(
        &path,
        r#"
        [timeouts]
        actor_shutdown_timeout_ms = 500

        [limits]
        poll_interval_ms = 25
        drain_batch_limit = 8

        [defaults]
        monitor_name = "gatekeeper"
        "#,
    )
    .unwrap();

    let config = SentinelConfig::load_from(&path).expect("valid config");
    assert_eq!(config.actor_shutdown_timeout(), Duration::from_millis(500));
    assert_eq!(config.system_shutdown_timeout(), Duration::from_secs(30));
    assert_eq!(config.poll_interval(), Duration::from_millis(25));
    assert_eq!(config.limits.drain_batch_limit, 8);
    assert_eq!(config.monitor_id(), "gatekeeper");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = SentinelConfig::load_from(temp_dir.path().join("absent.toml"))
        .expect_err("file does not exist");
    assert!(matches!(err, ConfigError::Io { .. }));
}

/// `load` reads `sentinel/config.toml` under `XDG_CONFIG_HOME`, and a runtime
/// launched with that configuration routes through the configured monitor name.
#[test]
fn test_xdg_directory_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("sentinel");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
        [limits]
        poll_interval_ms = 40

        [defaults]
        monitor_name = "gatekeeper"
        "#,
    )
    .unwrap();
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

    let config = SentinelConfig::load();
    assert_eq!(config.poll_interval(), Duration::from_millis(40));

    #[derive(Debug, Clone, PartialEq)]
    struct Beacon;
    impl SentinelMessage for Beacon {
        const OPERATIONS: &'static [&'static str] = &["beacon"];
        fn operation(&self) -> &'static str {
            "beacon"
        }
    }
    let runtime = SentinelApp::launch_with_config::<Beacon>(config);
    assert_eq!(runtime.monitor_id(), "gatekeeper");

    temp_dir.close().unwrap();
}
