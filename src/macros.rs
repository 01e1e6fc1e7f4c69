//! Macros for creating additional process-wide registries.

/// Creates a named, process-wide handler registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Lazily created shared storage (hidden)
/// - A zero-sized `Registry` handle that implements `HandlerRegistry`
/// - Free functions delegating to the handle, and a `mediator()` factory
///
/// Every registry defined this way is isolated from the others and from
/// [`SingletonRegistry`](crate::SingletonRegistry).
///
/// # Examples
///
/// ```rust
/// use request_mediator::{define_registry, Dependencies, FromDependencies, Handler, MediatorError};
///
/// define_registry!(billing);
///
/// struct Total(Vec<u32>);
/// struct TotalHandler;
///
/// impl Handler<Total> for TotalHandler {
///     type Output = u32;
///
///     fn handle(&mut self, request: Total) -> u32 {
///         request.0.iter().sum()
///     }
/// }
///
/// impl FromDependencies for TotalHandler {
///     fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
///         Ok(TotalHandler)
///     }
/// }
///
/// billing::register::<Total, TotalHandler>().unwrap();
///
/// let total: u32 = billing::mediator().send(Total(vec![1, 2, 3])).unwrap();
/// assert_eq!(total, 6);
/// ```
///
/// # Trait-Based Usage
///
/// The `REGISTRY` constant gives access to the full `HandlerRegistry` API:
///
/// ```rust
/// use request_mediator::{define_registry, HandlerRegistry};
///
/// define_registry!(jobs);
///
/// assert!(jobs::REGISTRY.is_empty());
/// assert!(!jobs::REGISTRY.contains::<String>().unwrap());
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::sync::{Arc, LazyLock};

            // Shared storage for this registry (module-private)
            static SHARED: LazyLock<$crate::InstanceRegistry> =
                LazyLock::new($crate::InstanceRegistry::new);

            /// Zero-sized handle to this module's shared registry.
            #[derive(Debug, Clone, Copy, Default)]
            pub struct Registry;

            impl $crate::HandlerRegistry for Registry {
                fn entries(&self) -> &$crate::Entries {
                    $crate::HandlerRegistry::entries(&*SHARED)
                }

                fn trace(&self) -> &$crate::TraceSlot {
                    $crate::HandlerRegistry::trace(&*SHARED)
                }
            }

            /// Convenient constant for accessing the registry API.
            pub const REGISTRY: Registry = Registry;

            /// Mediator dispatching through this registry.
            pub fn mediator() -> $crate::Mediator<Registry> {
                $crate::Mediator::new(Arc::new(Registry))
            }

            /// Associate handler `H` with request type `R`.
            pub fn register<R, H>() -> Result<(), $crate::MediatorError>
            where
                R: $crate::Request,
                H: $crate::Handler<R> + $crate::FromDependencies,
            {
                use $crate::HandlerRegistry;
                REGISTRY.register::<R, H>()
            }

            /// Retrieve the handler type registered for `request`.
            pub fn get_handler<R: $crate::Request>(
                request: &R,
            ) -> Result<$crate::HandlerType, $crate::MediatorError> {
                use $crate::HandlerRegistry;
                REGISTRY.get_handler(request)
            }

            /// Check if request type `R` has a handler.
            pub fn contains<R: $crate::Request>() -> Result<bool, $crate::MediatorError> {
                use $crate::HandlerRegistry;
                REGISTRY.contains::<R>()
            }

            /// Remove every association.
            pub fn clear() {
                use $crate::HandlerRegistry;
                REGISTRY.clear()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::HandlerRegistry;
                REGISTRY.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::HandlerRegistry;
                REGISTRY.clear_trace_callback()
            }
        }
    };
}
