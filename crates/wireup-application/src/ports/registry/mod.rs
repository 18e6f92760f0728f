//! Constructor Module Registry
//!
//! Link-time registration of constructor modules. Uses the `linkme` crate so
//! any crate linked into the final binary can contribute named groups of
//! constructors and capability declarations, which configuration then
//! selects by name.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Module Registration Flow                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Crate defines:   #[linkme::distributed_slice(               │
//! │                          CONSTRUCTOR_MODULES)]                  │
//! │                      static ENTRY: ModuleEntry = ...            │
//! │                              ↓                                  │
//! │  2. Slice declared:  pub static CONSTRUCTOR_MODULES:            │
//! │                          [ModuleEntry] = [..]                   │
//! │                              ↓                                  │
//! │  3. Config selects:  container.modules = ["greeting"]           │
//! │                              ↓                                  │
//! │  4. Bootstrap:       install_module(&mut registry, "greeting")  │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Module
//!
//! ```ignore
//! use wireup_application::ports::registry::{ModuleEntry, CONSTRUCTOR_MODULES};
//!
//! #[linkme::distributed_slice(CONSTRUCTOR_MODULES)]
//! static GREETING_MODULE: ModuleEntry = ModuleEntry {
//!     name: "greeting",
//!     description: "Greeters behind the Greeter capability",
//!     install: install_greeting,
//! };
//! ```

pub mod modules;

pub use modules::{
    CONSTRUCTOR_MODULES, ModuleEntry, find_module, install_module, list_modules,
};
