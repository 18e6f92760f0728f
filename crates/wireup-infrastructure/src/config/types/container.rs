//! Container bootstrap configuration types

use serde::{Deserialize, Serialize};

/// Which catalog modules to install and how to report resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Catalog modules to install, in order. Empty installs every linked module.
    pub modules: Vec<String>,

    /// Print the invocation report after a resolution
    pub report: bool,
}
