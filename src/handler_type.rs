//! Type-identity tokens stored in the registry.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::{Dependencies, FromDependencies, Handler, MediatorError, Request};

/// Constructor that builds a handler and erases it behind `dyn Any`.
///
/// The boxed value is a `Box<dyn Handler<R, Output = O>>` for the `R` and `O`
/// the token was created with.
pub(crate) type ErasedConstructor = fn(&Dependencies) -> Result<Box<dyn Any>, MediatorError>;

/// Identity of a request type, the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestType {
    type_id: TypeId,
    type_name: &'static str,
}

impl RequestType {
    pub fn of<R: Request>() -> Self {
        RequestType {
            type_id: TypeId::of::<R>(),
            type_name: type_name::<R>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Identity of a handler type together with the means to construct it.
///
/// Two tokens are equal when they name the same handler type built for the
/// same request type.
#[derive(Clone, Copy)]
pub struct HandlerType {
    type_id: TypeId,
    type_name: &'static str,
    request: RequestType,
    construct: ErasedConstructor,
}

impl HandlerType {
    /// Token for handler `H` serving requests of type `R`.
    pub fn of<R, H>() -> Self
    where
        R: Request,
        H: Handler<R> + FromDependencies,
    {
        HandlerType {
            type_id: TypeId::of::<H>(),
            type_name: type_name::<H>(),
            request: RequestType::of::<R>(),
            construct: construct_erased::<R, H>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The request type this handler was built to serve.
    pub fn request_type(&self) -> RequestType {
        self.request
    }

    /// Returns `true` if this token names handler type `H`.
    pub fn is<H: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<H>()
    }

    pub(crate) fn construct(&self, dependencies: &Dependencies) -> Result<Box<dyn Any>, MediatorError> {
        (self.construct)(dependencies)
    }
}

fn construct_erased<R, H>(dependencies: &Dependencies) -> Result<Box<dyn Any>, MediatorError>
where
    R: Request,
    H: Handler<R> + FromDependencies,
{
    let handler: Box<dyn Handler<R, Output = H::Output>> =
        Box::new(H::from_dependencies(dependencies)?);
    Ok(Box::new(handler))
}

impl PartialEq for HandlerType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.request == other.request
    }
}

impl Eq for HandlerType {}

impl fmt::Debug for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerType")
            .field("type_name", &self.type_name)
            .field("request", &self.request.type_name)
            .finish()
    }
}
