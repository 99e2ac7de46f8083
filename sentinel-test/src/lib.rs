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

//! Test support for Sentinel actors.
//!
//! ```rust,ignore
//! use sentinel_test::prelude::*;
//!
//! #[sentinel_test]
//! async fn monitor_starts() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use sentinel_test_macro::sentinel_test;

/// Everything a test module usually needs.
pub mod prelude {
    pub use sentinel_test_macro::sentinel_test;
}

#[doc(hidden)]
pub mod __private {
    pub use parking_lot;
    pub use tokio;
    pub use tracing;
}
