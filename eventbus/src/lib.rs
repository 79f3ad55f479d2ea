//! `EventBus` - minimal synchronous in-process publish/subscribe
//!
//! This library implements a single-threaded event dispatcher: callbacks are
//! registered against validated event names and invoked synchronously, in
//! registration order, whenever a value is published under that name.
//!
//! There is deliberately no persistence, no concurrency, and no subscriber
//! lifecycle beyond registration; the registry only ever grows.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bus;
pub mod errors;
pub mod types;

pub use bus::EventBus;
pub use errors::{BusResult, EventBusError};
pub use types::EventName;
