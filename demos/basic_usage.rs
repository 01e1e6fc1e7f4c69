//! Basic usage example for request-mediator.
//!
//! Demonstrates:
//! - Registering one handler per request type
//! - Sending requests and reading typed responses
//! - The errors reported for duplicate registrations and unknown requests
//!
//! Run with: `cargo run --example basic_usage`

use request_mediator::{
    Dependencies, FromDependencies, Handler, HandlerRegistry, InstanceRegistry, Mediator,
    MediatorError,
};
use std::sync::Arc;

#[derive(Debug)]
struct SumRequest {
    x: i32,
    y: i32,
}

#[derive(Debug)]
struct ShoutRequest(String);

struct SumHandler;

impl FromDependencies for SumHandler {
    fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
        Ok(SumHandler)
    }
}

impl Handler<SumRequest> for SumHandler {
    type Output = i32;

    fn handle(&mut self, request: SumRequest) -> i32 {
        request.x + request.y
    }
}

struct ShoutHandler;

impl FromDependencies for ShoutHandler {
    fn from_dependencies(_: &Dependencies) -> Result<Self, MediatorError> {
        Ok(ShoutHandler)
    }
}

impl Handler<ShoutRequest> for ShoutHandler {
    type Output = String;

    fn handle(&mut self, request: ShoutRequest) -> String {
        request.0.to_uppercase()
    }
}

fn main() -> Result<(), MediatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== request-mediator: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Register handlers
    // -------------------------------------------------------------------------
    println!("1. Registering handlers...");

    let registry = Arc::new(InstanceRegistry::new());
    registry.register::<SumRequest, SumHandler>()?;
    registry.register::<ShoutRequest, ShoutHandler>()?;

    println!("   Registered: {} request types", registry.len());

    // -------------------------------------------------------------------------
    // 2. Send requests
    // -------------------------------------------------------------------------
    println!("\n2. Sending requests...");

    let mediator = Mediator::new(registry.clone());

    let sum: i32 = mediator.send(SumRequest { x: 3, y: 5 })?;
    println!("   SumRequest(3, 5)        -> {}", sum);

    let shout: String = mediator.send(ShoutRequest("hello".into()))?;
    println!("   ShoutRequest(\"hello\")   -> {}", shout);

    // -------------------------------------------------------------------------
    // 3. Errors
    // -------------------------------------------------------------------------
    println!("\n3. Errors...");

    if let Err(err) = registry.register::<SumRequest, SumHandler>() {
        println!("   duplicate registration: {}", err);
    }

    if let Err(err) = mediator.send::<_, ()>(42u8) {
        println!("   unknown request:        {}", err);
    }

    if let Err(err) = mediator.send::<_, String>(SumRequest { x: 1, y: 1 }) {
        println!("   wrong response type:    {}", err);
    }

    println!("\n=== Done ===");
    Ok(())
}
