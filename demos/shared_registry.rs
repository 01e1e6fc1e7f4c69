//! Shared registry example for request-mediator.
//!
//! Demonstrates:
//! - Registering handlers once at startup in the process-wide registry
//! - Reaching the same registry from other threads via `SingletonRegistry::shared()`
//! - Named process-wide registries with `define_registry!`
//! - Observing registry events with a trace callback
//!
//! Run with: `cargo run --example shared_registry`

use request_mediator::{
    define_registry, Dependencies, FromDependencies, Handler, HandlerRegistry, Mediator,
    MediatorError, SingletonRegistry,
};
use std::thread;

define_registry!(audit);

struct Ping(u32);

struct PingHandler;

impl FromDependencies for PingHandler {
    fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
        Ok(PingHandler)
    }
}

impl Handler<Ping> for PingHandler {
    type Output = String;

    fn handle(&mut self, request: Ping) -> String {
        format!("pong #{}", request.0)
    }
}

struct AuditPingHandler;

impl FromDependencies for AuditPingHandler {
    fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
        Ok(AuditPingHandler)
    }
}

impl Handler<Ping> for AuditPingHandler {
    type Output = String;

    fn handle(&mut self, request: Ping) -> String {
        format!("audited ping #{}", request.0)
    }
}

fn register_handlers() -> Result<(), MediatorError> {
    SingletonRegistry::shared().register::<Ping, PingHandler>()?;
    audit::register::<Ping, AuditPingHandler>()?;
    Ok(())
}

fn main() -> Result<(), MediatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== request-mediator: Shared Registry ===\n");

    SingletonRegistry::shared().set_trace_callback(|event| println!("   [trace] {}", event));

    // -------------------------------------------------------------------------
    // 1. Startup registration
    // -------------------------------------------------------------------------
    println!("1. Registering handlers at startup...");
    register_handlers()?;

    // -------------------------------------------------------------------------
    // 2. Dispatch from worker threads
    // -------------------------------------------------------------------------
    println!("\n2. Dispatching from worker threads...");
    let workers: Vec<_> = (1..=3)
        .map(|n| thread::spawn(move || Mediator::shared().send::<_, String>(Ping(n))))
        .collect();

    for worker in workers {
        match worker.join() {
            Ok(reply) => println!("   {}", reply?),
            Err(_) => println!("   worker panicked"),
        }
    }

    // -------------------------------------------------------------------------
    // 3. Named registries are isolated
    // -------------------------------------------------------------------------
    println!("\n3. Dispatching through the audit registry...");
    let reply: String = audit::mediator().send(Ping(99))?;
    println!("   {}", reply);

    SingletonRegistry::shared().clear_trace_callback();

    println!("\n=== Done ===");
    Ok(())
}
