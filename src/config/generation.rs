//! Generation run settings

use serde::{Deserialize, Serialize};

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Whether to abort the run on the first failed source document
    #[serde(default)]
    pub fail_fast: bool,

    /// Whether to empty the output directory before generating
    #[serde(default = "default_clean_output")]
    pub clean_output: bool,
}

fn default_clean_output() -> bool {
    true
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            clean_output: default_clean_output(),
        }
    }
}
