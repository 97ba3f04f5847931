//! Export and pacing configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_output() -> PathBuf {
    PathBuf::from("club_members_with_all_stats.csv")
}

/// Default pause between members, in milliseconds.
const fn default_throttle_ms() -> u64 {
    200
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// CSV file written at the end of a run.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Pause after each member's per-user fetches.
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            throttle_ms: default_throttle_ms(),
        }
    }
}

impl ExportConfig {
    pub const fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}
