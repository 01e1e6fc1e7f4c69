//! Core trait defining handler registry behavior.
//!
//! This module provides the `HandlerRegistry` trait with default implementations
//! for registering, looking up and clearing request/handler associations.
//!
//! The registry is keyed by request type (`TypeId`): each request type has at most
//! one handler type at any time. Registering a second handler for the same request
//! type fails and leaves the first association in place.

use std::any::TypeId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    FromDependencies, Handler, HandlerType, MediatorError, RegistryEvent, Request, RequestType,
};

/// Storage backing a registry: request `TypeId` to handler token.
pub type Entries = Mutex<HashMap<TypeId, HandlerType>>;

/// User-supplied callback receiving every registry event.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Slot holding the optional trace callback of a registry.
pub type TraceSlot = Mutex<Option<Arc<TraceCallback>>>;

/// Core trait defining handler registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// two accessor methods (`entries` and `trace`) from the implementor.
pub trait HandlerRegistry: Send + Sync {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback slot.
    fn trace(&self) -> &TraceSlot;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback will be invoked for every registry operation
    /// (register, get_handler, contains, clear).
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method recovers by extracting the inner value.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static)
    where
        Self: Sized,
    {
        let mut guard = self.trace().lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Registered handlers are not affected.
    fn clear_trace_callback(&self) {
        let mut guard = self.trace().lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Emit a registry event to `tracing` and to the current callback, if any.
    ///
    /// The callback runs after the trace lock is released, so it may call back
    /// into the registry.
    fn emit_event(&self, event: &RegistryEvent) {
        tracing::trace!(target: "request_mediator::registry", %event);

        let callback = self
            .trace()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the entry storage.
    fn entries(&self) -> &Entries;

    /// Associate handler `H` with request type `R`.
    ///
    /// # Errors
    ///
    /// - [`MediatorError::RequestAlreadyRegistered`] if `R` already has a handler
    /// - [`MediatorError::RegistryLock`] if the storage lock is poisoned
    fn register<R, H>(&self) -> Result<(), MediatorError>
    where
        Self: Sized,
        R: Request,
        H: Handler<R> + FromDependencies,
    {
        self.register_type(RequestType::of::<R>(), HandlerType::of::<R, H>())
    }

    /// Associate a handler token with a request type token.
    ///
    /// The handler token is not required to serve `request`; a mismatch is
    /// reported when a request is sent, once the handler has been constructed.
    ///
    /// # Errors
    ///
    /// Same as [`HandlerRegistry::register`].
    fn register_type(&self, request: RequestType, handler: HandlerType) -> Result<(), MediatorError> {
        self.emit_event(&RegistryEvent::Register {
            request: request.type_name(),
            handler: handler.type_name(),
        });

        let mut map = self
            .entries()
            .lock()
            .map_err(|_| MediatorError::RegistryLock)?;

        match map.entry(request.type_id()) {
            Entry::Occupied(_) => Err(MediatorError::RequestAlreadyRegistered {
                request: request.type_name(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(handler);
                Ok(())
            }
        }
    }

    /// Retrieve the handler type registered for the runtime type of `request`.
    ///
    /// # Errors
    ///
    /// - [`MediatorError::HandlerNotFound`] if no handler is registered for `R`
    /// - [`MediatorError::RegistryLock`] if the storage lock is poisoned
    fn get_handler<R: Request>(&self, _request: &R) -> Result<HandlerType, MediatorError>
    where
        Self: Sized,
    {
        let request_name = std::any::type_name::<R>();

        let map = self
            .entries()
            .lock()
            .map_err(|_| MediatorError::RegistryLock)?;

        let handler = map.get(&TypeId::of::<R>()).copied();

        drop(map);

        self.emit_event(&RegistryEvent::GetHandler {
            request: request_name,
            found: handler.is_some(),
        });

        handler.ok_or(MediatorError::HandlerNotFound {
            request: request_name,
        })
    }

    /// Check whether request type `R` has a handler.
    ///
    /// # Errors
    ///
    /// - Registry lock is poisoned
    fn contains<R: Request>(&self) -> Result<bool, MediatorError>
    where
        Self: Sized,
    {
        let found = self
            .entries()
            .lock()
            .map(|m| m.contains_key(&TypeId::of::<R>()))
            .map_err(|_| MediatorError::RegistryLock)?;

        self.emit_event(&RegistryEvent::Contains {
            request: std::any::type_name::<R>(),
            found,
        });

        Ok(found)
    }

    /// Number of registered request types.
    fn len(&self) -> usize {
        self.entries()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every association.
    ///
    /// Always succeeds. A poisoned storage lock is recovered and its poison
    /// flag reset, so the emptied registry accepts registrations again. Does
    /// not affect the tracing callback.
    fn clear(&self) {
        self.emit_event(&RegistryEvent::Clear);

        self.entries()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();

        self.entries().clear_poison();
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
