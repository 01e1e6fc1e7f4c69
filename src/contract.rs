//! Capability contracts for requests and handlers.
//!
//! Requests are identified by their type alone. Handlers are any type that can
//! be built from injected [`Dependencies`] and that implements [`Handler`] for
//! the request it serves.

use std::any::Any;

use crate::{Dependencies, MediatorError};

/// A value that can be dispatched through a mediator.
///
/// Every `'static` type is a request; only its `TypeId` is used as the lookup
/// key. The trait is blanket-implemented and cannot be implemented by hand:
///
/// ```compile_fail
/// use request_mediator::Request;
///
/// struct Ping;
///
/// impl Request for Ping {}
/// ```
pub trait Request: Any {}

impl<T: Any> Request for T {}

/// Processes one request type.
///
/// Handler failures are part of `Output` (typically `Result<T, E>`) and are
/// returned to the sender as-is.
///
/// ```
/// use request_mediator::Handler;
///
/// struct SumRequest {
///     x: i32,
///     y: i32,
/// }
///
/// struct SumHandler;
///
/// impl Handler<SumRequest> for SumHandler {
///     type Output = i32;
///
///     fn handle(&mut self, request: SumRequest) -> i32 {
///         request.x + request.y
///     }
/// }
///
/// assert_eq!(SumHandler.handle(SumRequest { x: 3, y: 5 }), 8);
/// ```
pub trait Handler<R: Request>: 'static {
    type Output: 'static;

    fn handle(&mut self, request: R) -> Self::Output;
}

/// Builds a handler from the dependencies injected into the mediator.
///
/// Names the handler does not ask for are ignored. Asking for a name that was
/// not injected yields [`MediatorError::MissingDependency`].
pub trait FromDependencies: Sized {
    fn from_dependencies(dependencies: &Dependencies) -> Result<Self, MediatorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Handler<String> for Echo {
        type Output = String;

        fn handle(&mut self, request: String) -> String {
            request
        }
    }

    impl FromDependencies for Echo {
        fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
            Ok(Echo)
        }
    }

    fn assert_request<R: Request>(_: &R) {}

    #[test]
    fn test_any_static_type_is_a_request() {
        assert_request(&1u8);
        assert_request(&"text");
        assert_request(&(1, 2.0));
        assert_request(&Echo);
    }

    #[test]
    fn test_handler_is_constructed_and_invoked() {
        let mut handler = Echo::from_dependencies(&Dependencies::new()).unwrap();
        assert_eq!(handler.handle("hello".to_string()), "hello");
    }
}
