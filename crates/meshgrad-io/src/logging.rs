// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logger initialisation for applications embedding the gradient codec.

use env_logger::{Builder, Env};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` once.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` applies (e.g.
/// `"info"` or `"meshgrad_data=debug"`). Later calls are ignored, and a
/// logger installed by someone else is left in place.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        let result = Builder::from_env(Env::default().default_filter_or(default_filter))
            .format_timestamp_millis()
            .try_init();
        if result.is_ok() {
            log::debug!("Logging initialized.");
        }
    });
}
