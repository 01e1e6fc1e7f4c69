//! # Request Mediator
//!
//! A single-dispatch request mediator: every request type is routed to exactly one
//! registered handler type, which is constructed on demand with named dependencies
//! and then asked to handle the request.
//!
//! Callers only know the request they send, never the concrete handler.
//!
//! ## Quick Start
//!
//! ```rust
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
//! struct SumUtils;
//!
//! impl SumUtils {
//!     fn sum(&self, x: i32, y: i32) -> i32 {
//!         x + y
//!     }
//! }
//!
//! struct SumHandler {
//!     sum_utils: Arc<SumUtils>,
//! }
//!
//! impl FromDependencies for SumHandler {
//!     fn from_dependencies(deps: &Dependencies) -> Result<Self, MediatorError> {
//!         Ok(SumHandler {
//!             sum_utils: deps.get("sum_utils")?,
//!         })
//!     }
//! }
//!
//! impl Handler<SumRequest> for SumHandler {
//!     type Output = i32;
//!
//!     fn handle(&mut self, request: SumRequest) -> i32 {
//!         self.sum_utils.sum(request.x, request.y)
//!     }
//! }
//!
//! let registry = Arc::new(InstanceRegistry::new());
//! registry.register::<SumRequest, SumHandler>().unwrap();
//!
//! let mediator = Mediator::new(registry);
//! let sum: i32 = mediator
//!     .inject(Dependencies::new().with("sum_utils", SumUtils))
//!     .send(SumRequest { x: 3, y: 5 })
//!     .unwrap();
//! assert_eq!(sum, 8);
//!
//! // Without the dependency the handler cannot be built
//! assert!(mediator.send::<_, i32>(SumRequest { x: 3, y: 5 }).is_err());
//! ```
//!
//! ## Features
//!
//! - **Type-keyed**: handlers are looked up by the exact `TypeId` of the request
//! - **One handler per request type**: duplicate registrations are rejected
//! - **Two registry lifetimes**: [`InstanceRegistry`] and the process-wide [`SingletonRegistry`]
//!   (plus any number of named ones via [`define_registry!`])
//! - **Immutable injection**: [`Mediator::inject`] returns a new mediator
//! - **Tracing support**: optional callback receiving every [`RegistryEvent`],
//!   mirrored to the `tracing` crate
//!
//! ## Main Types
//!
//! - [`Handler`] / [`FromDependencies`] - what a handler type implements
//! - [`HandlerRegistry`] - register, look up and clear associations
//! - [`Mediator`] - `send` and `inject`
//! - [`MediatorError`] - every failure the mediator reports

mod contract;
mod dependencies;
mod error;
mod handler_type;
mod macros;
mod mediator;
mod registry;
mod registry_event;
mod registry_trait;

pub use contract::{FromDependencies, Handler, Request};
pub use dependencies::Dependencies;
pub use error::MediatorError;
pub use handler_type::{HandlerType, RequestType};
pub use mediator::Mediator;
pub use registry::{InstanceRegistry, SingletonRegistry};
pub use registry_event::RegistryEvent;
pub use registry_trait::{Entries, HandlerRegistry, TraceCallback, TraceSlot};
