//! Request dispatch.
//!
//! A [`Mediator`] resolves the handler type registered for a request, builds the
//! handler from the injected [`Dependencies`], checks that the built value
//! actually handles the request and returns whatever the handler returns.
//!
//! ```
//! use request_mediator::{
//!     Dependencies, FromDependencies, Handler, HandlerRegistry, InstanceRegistry, Mediator,
//!     MediatorError,
//! };
//! use std::sync::Arc;
//!
//! struct SumRequest {
//!     x: i32,
//!     y: i32,
//! }
//!
//! struct SumHandler;
//!
//! impl Handler<SumRequest> for SumHandler {
//!     type Output = i32;
//!
//!     fn handle(&mut self, request: SumRequest) -> i32 {
//!         request.x + request.y
//!     }
//! }
//!
//! impl FromDependencies for SumHandler {
//!     fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
//!         Ok(SumHandler)
//!     }
//! }
//!
//! let registry = Arc::new(InstanceRegistry::new());
//! registry.register::<SumRequest, SumHandler>().unwrap();
//!
//! let mediator = Mediator::new(registry);
//! let sum: i32 = mediator.send(SumRequest { x: 3, y: 5 }).unwrap();
//! assert_eq!(sum, 8);
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::{Dependencies, Handler, HandlerRegistry, MediatorError, Request, SingletonRegistry};

/// Dispatches requests to the handlers registered in a shared registry.
///
/// Cloning a mediator and calling [`Mediator::inject`] are both cheap: the
/// registry and the dependency map are reference counted and never mutated
/// through the mediator.
pub struct Mediator<G: HandlerRegistry> {
    registry: Arc<G>,
    dependencies: Arc<Dependencies>,
}

impl Mediator<SingletonRegistry> {
    /// Mediator over the process-wide [`SingletonRegistry`].
    pub fn shared() -> Self {
        Mediator::new(Arc::new(SingletonRegistry::shared()))
    }
}

impl<G: HandlerRegistry> Mediator<G> {
    /// Mediator over `registry` with no injected dependencies.
    pub fn new(registry: Arc<G>) -> Self {
        Mediator {
            registry,
            dependencies: Arc::new(Dependencies::new()),
        }
    }

    pub fn registry(&self) -> &Arc<G> {
        &self.registry
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    /// Returns a mediator over the same registry whose dependencies are exactly
    /// `dependencies`.
    ///
    /// Previously injected values are dropped, not merged. `self` is unchanged.
    #[must_use]
    pub fn inject(&self, dependencies: Dependencies) -> Self {
        Mediator {
            registry: Arc::clone(&self.registry),
            dependencies: Arc::new(dependencies),
        }
    }

    /// Dispatch `request` to its handler and return the handler's output.
    ///
    /// `O` is the output the caller expects; it must match the `Output` of the
    /// registered handler.
    ///
    /// # Errors
    ///
    /// - [`MediatorError::HandlerNotFound`] if nothing is registered for `R`
    /// - any error returned by the handler's [`FromDependencies`](crate::FromDependencies)
    ///   constructor, such as [`MediatorError::MissingDependency`]
    /// - [`MediatorError::HandlerProtocolViolation`] if the constructed handler
    ///   does not implement `Handler<R, Output = O>`
    pub fn send<R, O>(&self, request: R) -> Result<O, MediatorError>
    where
        R: Request,
        O: 'static,
    {
        let handler_type = self.registry.get_handler(&request)?;

        tracing::debug!(
            request = type_name::<R>(),
            handler = handler_type.type_name(),
            dependencies = self.dependencies.len(),
            "dispatching request"
        );

        let handler = handler_type.construct(&self.dependencies)?;

        let mut handler = handler
            .downcast::<Box<dyn Handler<R, Output = O>>>()
            .map_err(|_| MediatorError::HandlerProtocolViolation {
                handler: handler_type.type_name(),
            })?;

        Ok(handler.handle(request))
    }

    /// Shorthand for `self.inject(dependencies).send(request)`.
    pub fn send_with<R, O>(&self, request: R, dependencies: Dependencies) -> Result<O, MediatorError>
    where
        R: Request,
        O: 'static,
    {
        self.inject(dependencies).send(request)
    }
}

impl<G: HandlerRegistry> Clone for Mediator<G> {
    fn clone(&self) -> Self {
        Mediator {
            registry: Arc::clone(&self.registry),
            dependencies: Arc::clone(&self.dependencies),
        }
    }
}

impl<G: HandlerRegistry> fmt::Debug for Mediator<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mediator")
            .field("registry", &type_name::<G>())
            .field("dependencies", &self.dependencies)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FromDependencies, HandlerType, InstanceRegistry, RequestType};
    use serial_test::serial;

    struct SumRequest {
        x: i32,
        y: i32,
    }

    struct SumHandler;

    impl Handler<SumRequest> for SumHandler {
        type Output = i32;

        fn handle(&mut self, request: SumRequest) -> i32 {
            request.x + request.y
        }
    }

    impl FromDependencies for SumHandler {
        fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
            Ok(SumHandler)
        }
    }

    struct Label(&'static str);

    /// Reports which label, if any, it was built with.
    struct LabelHandler {
        label: Option<Arc<Label>>,
    }

    impl Handler<SumRequest> for LabelHandler {
        type Output = Option<&'static str>;

        fn handle(&mut self, _: SumRequest) -> Option<&'static str> {
            self.label.as_ref().map(|l| l.0)
        }
    }

    impl FromDependencies for LabelHandler {
        fn from_dependencies(dependencies: &Dependencies) -> Result<Self, MediatorError> {
            Ok(LabelHandler {
                label: dependencies.get("label").ok(),
            })
        }
    }

    struct OtherRequest;

    fn mediator_with<H>() -> Mediator<InstanceRegistry>
    where
        H: Handler<SumRequest> + FromDependencies,
    {
        let registry = Arc::new(InstanceRegistry::new());
        registry.register::<SumRequest, H>().unwrap();
        Mediator::new(registry)
    }

    #[test]
    fn test_send() {
        let mediator = mediator_with::<SumHandler>();
        let sum: i32 = mediator.send(SumRequest { x: 3, y: 5 }).unwrap();
        assert_eq!(sum, 8);
    }

    #[test]
    fn test_send_unregistered_request() {
        let mediator = mediator_with::<SumHandler>();
        let err = mediator.send::<_, ()>(OtherRequest).unwrap_err();
        assert!(matches!(err, MediatorError::HandlerNotFound { .. }));
    }

    #[test]
    fn test_send_with_wrong_output_type() {
        let mediator = mediator_with::<SumHandler>();
        let err = mediator
            .send::<_, String>(SumRequest { x: 1, y: 1 })
            .unwrap_err();
        assert_eq!(
            err,
            MediatorError::HandlerProtocolViolation {
                handler: type_name::<SumHandler>()
            }
        );
    }

    #[test]
    fn test_send_with_handler_for_other_request() {
        impl Handler<OtherRequest> for SumHandler {
            type Output = i32;

            fn handle(&mut self, _: OtherRequest) -> i32 {
                0
            }
        }

        let registry = Arc::new(InstanceRegistry::new());
        registry
            .register_type(
                RequestType::of::<SumRequest>(),
                HandlerType::of::<OtherRequest, SumHandler>(),
            )
            .unwrap();

        let err = Mediator::new(registry)
            .send::<_, i32>(SumRequest { x: 3, y: 5 })
            .unwrap_err();
        assert!(matches!(err, MediatorError::HandlerProtocolViolation { handler } if handler.ends_with("SumHandler")));
    }

    #[test]
    fn test_inject_does_not_mutate_receiver() {
        let original = mediator_with::<LabelHandler>();
        let injected = original.inject(Dependencies::new().with("label", Label("injected")));

        let from_original: Option<&str> = original.send(SumRequest { x: 0, y: 0 }).unwrap();
        let from_injected: Option<&str> = injected.send(SumRequest { x: 0, y: 0 }).unwrap();

        assert_eq!(from_original, None);
        assert_eq!(from_injected, Some("injected"));
        assert!(original.dependencies().is_empty());
    }

    #[test]
    fn test_inject_replaces_instead_of_merging() {
        let mediator = mediator_with::<LabelHandler>()
            .inject(Dependencies::new().with("label", Label("first")))
            .inject(Dependencies::new().with("unused", 1u8));

        let label: Option<&str> = mediator.send(SumRequest { x: 0, y: 0 }).unwrap();
        assert_eq!(label, None);
        assert!(!mediator.dependencies().contains("label"));
    }

    #[test]
    fn test_inject_shares_registry() {
        let mediator = mediator_with::<SumHandler>();
        let injected = mediator.inject(Dependencies::new());
        assert!(Arc::ptr_eq(mediator.registry(), injected.registry()));
    }

    #[test]
    fn test_send_with() {
        let mediator = mediator_with::<LabelHandler>();
        let label: Option<&str> = mediator
            .send_with(
                SumRequest { x: 0, y: 0 },
                Dependencies::new().with("label", Label("once")),
            )
            .unwrap();

        assert_eq!(label, Some("once"));
        assert!(mediator.dependencies().is_empty());
    }

    #[test]
    fn test_clone_shares_state() {
        let mediator = mediator_with::<SumHandler>().inject(Dependencies::new().with("n", 1i32));
        let cloned = mediator.clone();

        assert!(Arc::ptr_eq(mediator.registry(), cloned.registry()));
        assert!(cloned.dependencies().contains("n"));
    }

    #[test]
    fn test_debug() {
        let mediator = mediator_with::<SumHandler>().inject(Dependencies::new().with("n", 1i32));
        let debug = format!("{:?}", mediator);
        assert!(debug.contains("InstanceRegistry"));
        assert!(debug.contains(r#"names: ["n"]"#));
    }

    #[test]
    fn test_mediator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mediator<InstanceRegistry>>();
        assert_send_sync::<Mediator<SingletonRegistry>>();
    }

    #[test]
    #[serial]
    fn test_shared_mediator() {
        let registry = SingletonRegistry::shared();
        registry.clear();
        registry.register::<SumRequest, SumHandler>().unwrap();

        let sum: i32 = Mediator::shared().send(SumRequest { x: 2, y: 2 }).unwrap();
        assert_eq!(sum, 4);

        registry.clear();
    }
}
