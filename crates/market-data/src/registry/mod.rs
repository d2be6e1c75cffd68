//! Provider health tracking shared across requests.

mod circuit_breaker;

pub use circuit_breaker::{CircuitBreaker, CircuitState, CircuitStatus};
