//! Constructor Module Catalog
//!
//! Named groups of constructors contributed through a `linkme` distributed
//! slice and installed into a [`Registry`] on demand.

use wireup_domain::{Error, Result};

use crate::domain_services::Registry;

/// Registry entry for a constructor module
///
/// Each module registers itself with this entry using
/// `#[linkme::distributed_slice(CONSTRUCTOR_MODULES)]`. Installing the module
/// runs `install` against the target registry.
pub struct ModuleEntry {
    /// Unique module name (e.g., "greeting", "clock")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Registers the module's constructors and capability declarations
    pub install: fn(&mut Registry) -> Result<()>,
}

// Auto-collection via linkme distributed slices - modules submit entries at link time
#[linkme::distributed_slice]
pub static CONSTRUCTOR_MODULES: [ModuleEntry] = [..];

/// Find a linked module by name
pub fn find_module(name: &str) -> Option<&'static ModuleEntry> {
    CONSTRUCTOR_MODULES.iter().find(|entry| entry.name == name)
}

/// Install a linked module by name
///
/// # Returns
/// * `Ok(())` - Every constructor of the module was registered
/// * `Err(Error::Registration)` - No module has that name, or one of its
///   registrations was rejected
pub fn install_module(registry: &mut Registry, name: &str) -> Result<()> {
    let Some(entry) = find_module(name) else {
        let available: Vec<&str> = CONSTRUCTOR_MODULES.iter().map(|e| e.name).collect();
        return Err(Error::registration(
            name,
            format!("Unknown constructor module. Available modules: {available:?}"),
        ));
    };

    (entry.install)(registry)?;
    tracing::info!(module = entry.name, constructors = registry.len(), "Installed constructor module");
    Ok(())
}

/// List all linked modules
///
/// Returns `(name, description)` pairs in link order. Useful for CLI help
/// and configuration validation.
pub fn list_modules() -> Vec<(&'static str, &'static str)> {
    CONSTRUCTOR_MODULES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
