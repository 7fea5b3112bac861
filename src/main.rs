use std::f64::consts::FRAC_PI_2;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vector2d::Vector2d;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vector2d=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn basic_operations(a: Vector2d, b: Vector2d) {
    info!(%a, %b, "basic operations");
    info!(result = %a.add(b), "add");
    info!(result = %a.subtract(b), "subtract");
    info!(result = a.dot(b), "dot");
    info!(result = %a.scale(2.0), "scale by 2");
    info!(result = %a.sub_scalar(1.0), "sub_scalar 1");
    info!(result = %a.sub_scalar_reversed(1.0), "sub_scalar_reversed 1");
    info!(result = a.magnitude(), "magnitude");
    info!(result = %a.unit(), "unit");
    info!(result = %a.negate(), "negate");
    info!(max = a.max_component(), min = a.min_component(), "components");
    info!(result = %a.project(b), "project a onto b");
}

fn geometry() {
    let rotated = Vector2d::RIGHT.rotate(FRAC_PI_2);
    info!(%rotated, angle = rotated.angle(), "rotate (1, 0) by pi/2");
}

fn degenerate_inputs(a: Vector2d) {
    // These are defined results, not failures.
    warn!(result = %a.divide(0.0), "divide by zero");
    warn!(result = %Vector2d::ZERO.unit(), "unit of zero vector");
    warn!(result = %a.project(Vector2d::ZERO), "project onto zero vector");
}

fn main() {
    init_logging();

    let a = Vector2d::new(3.0, 4.0);
    let b = Vector2d::new(1.0, 2.0);

    basic_operations(a, b);
    geometry();
    degenerate_inputs(a);
}
