//! Classification options.

use serde::{Deserialize, Serialize};

/// Switches that change how a candidate is classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// When false, a network-path reference (`//host/path`) is treated as
    /// absolute instead of relative.
    #[serde(default = "default_allow_protocol_relative", alias = "allowProtocolRelative")]
    pub allow_protocol_relative: bool,
}

fn default_allow_protocol_relative() -> bool {
    true
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            allow_protocol_relative: true,
        }
    }
}

impl ClassifyOptions {
    /// Options that treat `//host/path` as absolute.
    pub fn strict() -> Self {
        Self {
            allow_protocol_relative: false,
        }
    }

    /// Sets `allow_protocol_relative`.
    pub fn allow_protocol_relative(mut self, allow: bool) -> Self {
        self.allow_protocol_relative = allow;
        self
    }
}
