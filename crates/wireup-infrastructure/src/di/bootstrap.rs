//! Container bootstrap from configuration
//!
//! ```text
//! AppConfig.container.modules ──► selected_modules() ──► install_module() ──► Container
//!                                        ↑
//!                                 CONSTRUCTOR_MODULES
//!                                  (linkme catalog)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let container = build_container(&config)?;
//! let app: DemoApp = container.resolve()?;
//! ```

use tracing::{debug, info};
use wireup_application::Container;
use wireup_application::ports::registry::list_modules;
use wireup_domain::error::Result;

use crate::config::AppConfig;

/// Module names the configuration selects, in install order.
///
/// An empty `container.modules` list selects every linked module in link
/// order.
pub fn selected_modules(config: &AppConfig) -> Vec<String> {
    if config.container.modules.is_empty() {
        list_modules()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect()
    } else {
        config.container.modules.clone()
    }
}

/// Create a container and install the configured catalog modules
///
/// Fails with a registration error naming the available modules when a
/// configured module is not linked into the binary.
pub fn build_container(config: &AppConfig) -> Result<Container> {
    let mut container = Container::new();
    let modules = selected_modules(config);

    for module in &modules {
        container.install(module)?;
    }

    if container.registry().capabilities().is_empty() {
        debug!("No capability declarations installed; only exact types will match");
    }
    info!(
        modules = modules.len(),
        constructors = container.registry().len(),
        capabilities = container.registry().capabilities().len(),
        "Container bootstrapped"
    );
    Ok(container)
}
