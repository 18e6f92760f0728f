//! Demo Modules
//!
//! Small catalog used by the `wireup` binary. Three modules contribute to
//! one graph:
//!
//! | Module | Provides |
//! |--------|----------|
//! | `clock` | [`Clock`], shared by everything that asks for it |
//! | `greeting` | [`English`] and [`Spanish`], both declared as `dyn Greeter` |
//! | `banner` | [`Banner`], built from every `dyn Greeter` |

use std::sync::Arc;
use std::time::{Duration, Instant};

use wireup_application::ports::registry::{CONSTRUCTOR_MODULES, ModuleEntry};
use wireup_application::{Registry, capability, root};
use wireup_domain::Result;

/// Something that can greet
pub trait Greeter: Send + Sync {
    /// Language tag
    fn language(&self) -> &'static str;

    /// Greeting for `name`
    fn greet(&self, name: &str) -> String;
}

/// Monotonic clock started when the graph is built
#[derive(Debug)]
pub struct Clock {
    started: Instant,
}

impl Clock {
    /// Start a clock
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since the clock was constructed
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// English greeter
pub struct English {
    clock: Arc<Clock>,
}

impl English {
    /// Greeter bound to a clock
    pub fn new(clock: Arc<Clock>) -> Self {
        Self { clock }
    }

    /// Clock this greeter was built with
    pub fn clock(&self) -> &Arc<Clock> {
        &self.clock
    }
}

impl Greeter for English {
    fn language(&self) -> &'static str {
        "en"
    }

    fn greet(&self, name: &str) -> String {
        format!("Hello, {name}!")
    }
}

/// Spanish greeter
pub struct Spanish;

impl Greeter for Spanish {
    fn language(&self) -> &'static str {
        "es"
    }

    fn greet(&self, name: &str) -> String {
        format!("¡Hola, {name}!")
    }
}

/// Every greeting, in registration order
pub struct Banner {
    greeters: Vec<Arc<dyn Greeter>>,
    clock: Arc<Clock>,
}

impl Banner {
    /// Banner over all greeters
    pub fn new(greeters: Vec<Arc<dyn Greeter>>, clock: Arc<Clock>) -> Self {
        Self { greeters, clock }
    }

    /// One `language: greeting` line per greeter
    pub fn render(&self, name: &str) -> Vec<String> {
        self.greeters
            .iter()
            .map(|greeter| format!("{}: {}", greeter.language(), greeter.greet(name)))
            .collect()
    }

    /// Clock this banner was built with
    pub fn clock(&self) -> &Arc<Clock> {
        &self.clock
    }
}

root! {
    /// Root resolved by `wireup run`
    pub struct DemoApp {
        /// Banner over every greeter
        pub banner: Arc<Banner>,
        /// The shared clock
        pub clock: Arc<Clock>,
        /// Every greeter, also seen by the banner
        pub greeters: Vec<Arc<dyn Greeter>>,
    }
}

fn install_clock(registry: &mut Registry) -> Result<()> {
    registry.register(Clock::new)?;
    Ok(())
}

fn install_greeting(registry: &mut Registry) -> Result<()> {
    registry.register(English::new)?;
    registry.register(|| Spanish)?;
    capability!(registry, dyn Greeter => English, Spanish)
}

fn install_banner(registry: &mut Registry) -> Result<()> {
    registry.register(Banner::new)?;
    Ok(())
}

#[linkme::distributed_slice(CONSTRUCTOR_MODULES)]
static CLOCK_MODULE: ModuleEntry = ModuleEntry {
    name: "clock",
    description: "Monotonic clock shared by the whole graph",
    install: install_clock,
};

#[linkme::distributed_slice(CONSTRUCTOR_MODULES)]
static GREETING_MODULE: ModuleEntry = ModuleEntry {
    name: "greeting",
    description: "English and Spanish greeters behind the Greeter capability",
    install: install_greeting,
};

#[linkme::distributed_slice(CONSTRUCTOR_MODULES)]
static BANNER_MODULE: ModuleEntry = ModuleEntry {
    name: "banner",
    description: "Banner rendering every registered greeter",
    install: install_banner,
};
