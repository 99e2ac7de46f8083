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

use std::io::Write;

use sentinel_reactive::prelude::*;
use sentinel_satellite::names::{CAMERA, SATELLITE};
use sentinel_satellite::{mission_policies, Scenario};

#[test]
fn test_policy_file_with_three_entries() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"
[[policy]]
source = "camera"
destination = "satellite"
operation = "post_camera_coords"

[[policy]]
source = "satellite"
destination = "camera"
operation = "camera_update"

[[policy]]
source = "orbit_control"
destination = "satellite"
operation = "change_orbit"
"#
    )?;

    let policies = PolicySet::load(file.path())?;
    assert_eq!(policies.len(), 3);
    assert!(policies.permits(CAMERA, SATELLITE, "post_camera_coords"));
    assert!(!policies.permits(SATELLITE, CAMERA, "post_camera_coords"));
    Ok(())
}

#[test]
fn test_mission_policies_survive_a_toml_round() -> anyhow::Result<()> {
    let policies = mission_policies();
    let reloaded = PolicySet::from_toml_str(&policies.to_toml_string()?)?;
    assert_eq!(reloaded, policies);
    Ok(())
}

#[test]
fn test_demo_files_load() -> anyhow::Result<()> {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos");

    let policies = PolicySet::load(root.join("policies.toml"))?;
    assert_eq!(policies.len(), 6);

    let scenario = Scenario::load(root.join("scenario.toml"))?;
    let steps = scenario.envelopes()?;
    assert_eq!(steps.len(), scenario.steps.len());
    assert!(steps.iter().all(|(_, envelope)| envelope.source().is_none()));
    Ok(())
}
