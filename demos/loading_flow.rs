//! Loading Flow
//!
//! Drives the canonical loading table the way a list page would: load,
//! fail, retry, succeed, then refresh.
//!
//! Run with: RUST_LOG=flowstate=debug cargo run --example loading_flow

use flowstate::flows::{loading_config, LoadingEvent};
use flowstate::machine::{Machine, UnhandledPolicy};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Loading Flow Example ===\n");

    let mut machine = Machine::create(loading_config()).with_policy(UnhandledPolicy::Warn);
    println!("Initial state: {:?}", machine.state());

    for event in [
        LoadingEvent::Load,
        LoadingEvent::Error,
        LoadingEvent::Retry,
        LoadingEvent::Success,
        LoadingEvent::Success, // ignored, logged as a warning
        LoadingEvent::Load,
    ] {
        let state = machine.send(event);
        println!(
            "{:<8} -> {:?}{}",
            format!("{event:?}"),
            state,
            if state.is_busy() { " (spinner)" } else { "" }
        );
    }

    println!("\n=== Example Complete ===");
}
