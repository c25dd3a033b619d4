//! Argument resolution configuration types

use argwire_domain::constants::DEFAULT_VALUE_TAG;
use argwire_engine::ResolveOptions;
use serde::{Deserialize, Serialize};

/// Settings the container applies when resolving callable arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Property tag bound to value parameters that have no selector
    pub default_value_tag: String,

    /// Emit a trace event for every argument lookup
    pub trace_arguments: bool,
}

impl ResolutionConfig {
    /// Engine options equivalent to this configuration
    pub fn options(&self) -> ResolveOptions {
        ResolveOptions {
            default_value_tag: self.default_value_tag.clone(),
            trace_arguments: self.trace_arguments,
        }
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            default_value_tag: DEFAULT_VALUE_TAG.to_string(),
            trace_arguments: true,
        }
    }
}
