//! Registry implementations: per-instance and process-wide.
//!
//! [`InstanceRegistry`] owns its entries; every `new()` starts empty.
//! [`SingletonRegistry`] is a zero-sized handle to one shared registry that is
//! created lazily on first use and lives for the rest of the process.
//!
//! # Examples
//!
//! ```
//! use request_mediator::{
//!     Dependencies, FromDependencies, Handler, HandlerRegistry, InstanceRegistry, MediatorError,
//! };
//!
//! struct Ping;
//! struct PingHandler;
//!
//! impl Handler<Ping> for PingHandler {
//!     type Output = &'static str;
//!
//!     fn handle(&mut self, _: Ping) -> &'static str {
//!         "pong"
//!     }
//! }
//!
//! impl FromDependencies for PingHandler {
//!     fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
//!         Ok(PingHandler)
//!     }
//! }
//!
//! let registry = InstanceRegistry::new();
//! registry.register::<Ping, PingHandler>().unwrap();
//!
//! assert!(registry.get_handler(&Ping).unwrap().is::<PingHandler>());
//! assert!(registry.register::<Ping, PingHandler>().is_err());
//! ```

use std::fmt;
use std::sync::LazyLock;

use crate::registry_trait::{Entries, HandlerRegistry, TraceSlot};

/// Registry owning its own entry mapping.
#[derive(Default)]
pub struct InstanceRegistry {
    entries: Entries,
    trace: TraceSlot,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HandlerRegistry for InstanceRegistry {
    fn entries(&self) -> &Entries {
        &self.entries
    }

    fn trace(&self) -> &TraceSlot {
        &self.trace
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("len", &self.len())
            .finish()
    }
}

/// The process-wide registry behind every [`SingletonRegistry`] handle.
///
/// `LazyLock` runs the initializer exactly once; concurrent first callers block
/// on its internal lock until the single instance exists, later callers read it
/// without further synchronization.
static SHARED: LazyLock<InstanceRegistry> = LazyLock::new(|| {
    tracing::debug!(target: "request_mediator::registry", "creating shared registry");
    InstanceRegistry::new()
});

/// Handle to the process-wide shared registry.
///
/// Every handle observes the same entries and the same trace callback.
/// `clear` empties the shared registry but never destroys it.
///
/// ```
/// use request_mediator::{HandlerRegistry, SingletonRegistry};
///
/// let a = SingletonRegistry::shared();
/// let b = SingletonRegistry::shared();
/// assert!(std::ptr::eq(a.entries(), b.entries()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SingletonRegistry;

impl SingletonRegistry {
    /// Returns a handle to the shared registry, creating it on first use.
    pub fn shared() -> Self {
        LazyLock::force(&SHARED);
        SingletonRegistry
    }
}

impl HandlerRegistry for SingletonRegistry {
    fn entries(&self) -> &Entries {
        SHARED.entries()
    }

    fn trace(&self) -> &TraceSlot {
        SHARED.trace()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
