//! Dependency injection example for request-mediator.
//!
//! Demonstrates:
//! - Handlers that declare named constructor dependencies
//! - `inject` returning a new mediator without touching the original
//! - Several request types routed through one injected mediator
//!
//! Run with: `RUST_LOG=request_mediator=debug cargo run --example dependency_injection`

use request_mediator::{
    Dependencies, FromDependencies, Handler, HandlerRegistry, InstanceRegistry, Mediator,
    MediatorError,
};
use std::sync::Arc;

// =============================================================================
// Services
// =============================================================================

struct SumUtils;

impl SumUtils {
    fn sum(&self, x: i32, y: i32) -> i32 {
        x + y
    }
}

struct MultiplyUtils {
    factor: i32,
}

impl MultiplyUtils {
    fn multiply(&self, x: i32, y: i32) -> i32 {
        x * y * self.factor
    }
}

// =============================================================================
// Requests and handlers
// =============================================================================

struct SumRequest {
    x: i32,
    y: i32,
}

struct MultiplyRequest {
    x: i32,
    y: i32,
}

struct SumHandler {
    sum_utils: Arc<SumUtils>,
}

impl FromDependencies for SumHandler {
    fn from_dependencies(deps: &Dependencies) -> Result<Self, MediatorError> {
        Ok(SumHandler {
            sum_utils: deps.get("sum_utils")?,
        })
    }
}

impl Handler<SumRequest> for SumHandler {
    type Output = i32;

    fn handle(&mut self, request: SumRequest) -> i32 {
        self.sum_utils.sum(request.x, request.y)
    }
}

struct MultiplyHandler {
    multiply_utils: Arc<MultiplyUtils>,
}

impl FromDependencies for MultiplyHandler {
    fn from_dependencies(deps: &Dependencies) -> Result<Self, MediatorError> {
        Ok(MultiplyHandler {
            multiply_utils: deps.get("multiply_utils")?,
        })
    }
}

impl Handler<MultiplyRequest> for MultiplyHandler {
    type Output = i32;

    fn handle(&mut self, request: MultiplyRequest) -> i32 {
        self.multiply_utils.multiply(request.x, request.y)
    }
}

fn main() -> Result<(), MediatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== request-mediator: Dependency Injection ===\n");

    let registry = Arc::new(InstanceRegistry::new());
    registry.register::<SumRequest, SumHandler>()?;
    registry.register::<MultiplyRequest, MultiplyHandler>()?;

    let mediator = Mediator::new(registry);

    // -------------------------------------------------------------------------
    // 1. Without dependencies the handlers cannot be built
    // -------------------------------------------------------------------------
    println!("1. Sending without injected dependencies...");
    match mediator.send::<_, i32>(SumRequest { x: 3, y: 5 }) {
        Ok(sum) => println!("   unexpected result: {}", sum),
        Err(err) => println!("   error: {}", err),
    }

    // -------------------------------------------------------------------------
    // 2. Inject and send
    // -------------------------------------------------------------------------
    println!("\n2. Injecting sum_utils and multiply_utils...");
    let injected = mediator.inject(
        Dependencies::new()
            .with("sum_utils", SumUtils)
            .with("multiply_utils", MultiplyUtils { factor: 1 }),
    );

    let sum: i32 = injected.send(SumRequest { x: 3, y: 5 })?;
    let product: i32 = injected.send(MultiplyRequest { x: 3, y: 5 })?;
    println!("   3 + 5 = {}", sum);
    println!("   3 * 5 = {}", product);

    // -------------------------------------------------------------------------
    // 3. Injecting again replaces everything
    // -------------------------------------------------------------------------
    println!("\n3. Re-injecting only multiply_utils (factor 10)...");
    let scaled = injected.inject(Dependencies::new().with("multiply_utils", MultiplyUtils { factor: 10 }));

    let product: i32 = scaled.send(MultiplyRequest { x: 3, y: 5 })?;
    println!("   3 * 5 * 10 = {}", product);
    if let Err(err) = scaled.send::<_, i32>(SumRequest { x: 3, y: 5 }) {
        println!("   sum now fails: {}", err);
    }

    println!("\n   original mediator dependencies: {:?}", mediator.dependencies());
    println!("   injected mediator dependencies: {:?}", injected.dependencies());

    println!("\n=== Done ===");
    Ok(())
}
