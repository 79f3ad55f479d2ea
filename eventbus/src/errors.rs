//! Error types for the `eventbus` crate.
//!
//! Dispatch itself is infallible by design: publishing to an unknown event
//! is a no-op, and duplicate subscriptions are permitted. The only failure
//! mode at the API boundary is constructing an invalid event name, which is
//! rejected before it can ever reach the registry.

use crate::types::EventNameError;
use thiserror::Error;

/// Result type for fallible `eventbus` operations.
pub type BusResult<T> = Result<T, EventBusError>;

/// Errors surfaced at the `eventbus` API boundary.
#[derive(Debug, Error)]
pub enum EventBusError {
    /// The supplied event name failed validation.
    #[error("invalid event name: {0}")]
    InvalidEventName(#[from] EventNameError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventName;

    #[test]
    fn invalid_name_converts_into_bus_error() {
        let err = EventName::try_new("").unwrap_err();
        let bus_err = EventBusError::from(err);
        assert!(bus_err.to_string().starts_with("invalid event name"));
    }
}
