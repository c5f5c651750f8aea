/// Permissive CORS headers on every response and the `OPTIONS` pre-flight
/// short-circuit.
pub mod cors;

pub mod request_trace;

pub use cors::Cors;
pub use request_trace::{RequestId, RequestTrace};
