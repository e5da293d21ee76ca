//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Deepest search accepted by configuration validation.
pub const MAX_SEARCH_DEPTH: u32 = 12;

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched from the root, counting the root move.
    pub depth: u32,

    /// Prune with alpha-beta bounds.
    /// Disabling gives plain minimax; the chosen move is the same, only slower.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            alpha_beta: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with pruning on or off.
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }
}
