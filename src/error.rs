use thiserror::Error;

/// Errors surfaced by registries and mediators.
///
/// Errors raised by a handler itself are not represented here: they travel
/// inside the handler's `Output` and reach the caller of `send` untouched.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum MediatorError {
    /// A handler is already associated with this request type.
    #[error("a handler is already registered for request type `{request}`")]
    RequestAlreadyRegistered { request: &'static str },

    /// No handler is associated with this request type.
    #[error("handler not found for request type `{request}`")]
    HandlerNotFound { request: &'static str },

    /// The constructed handler does not satisfy the expected `Handler` contract.
    #[error("the type `{handler}` does not conform to the expected Handler contract")]
    HandlerProtocolViolation { handler: &'static str },

    /// The handler constructor asked for a dependency that was not injected.
    #[error("missing dependency `{name}`")]
    MissingDependency { name: String },

    /// The injected dependency exists but has a different type.
    #[error("dependency `{name}` is not of type `{expected}`")]
    DependencyTypeMismatch {
        name: String,
        expected: &'static str,
    },

    #[error("failed to acquire registry lock")]
    RegistryLock,
}
