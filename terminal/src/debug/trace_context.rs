//! Trace ids for correlating the logs of one user action
//!
//! A swap submission runs across several tasks (quote check, execute call,
//! result handling). Each submission gets a fresh id that is recorded on the
//! span wrapping that work.

use tracing::Span;
use uuid::Uuid;

/// Generate a new trace ID
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span for one swap execution attempt
pub fn execution_span(trace_id: &str, pair: &str, amount: &str) -> Span {
    tracing::info_span!("swap_execution", trace_id = %trace_id, pair = %pair, amount = %amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_ids_are_unique_uuids() {
        let a = new_trace_id();
        let b = new_trace_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
