//! Stale Requests
//!
//! Two loads race; the slower, older one answers last and is discarded.
//!
//! Run with: RUST_LOG=flowstate=debug cargo run --example stale_requests

use flowstate::flows::{loading_config, LoadingEvent};
use flowstate::machine::{Settlement, TrackedMachine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Stale Requests Example ===\n");

    let mut page = TrackedMachine::create(loading_config());

    let slow = page.begin(LoadingEvent::Load);
    println!("Request #{} sent, state {:?}", slow.epoch(), page.state());

    // Pull-to-refresh before the first request answers.
    page.send(LoadingEvent::Error);
    let fast = page.begin(LoadingEvent::Retry);
    println!("Request #{} sent, state {:?}", fast.epoch(), page.state());

    for (ticket, event) in [(fast, LoadingEvent::Success), (slow, LoadingEvent::Error)] {
        match page.settle(ticket, event) {
            Settlement::Applied(state) => {
                println!("Request #{} applied -> {state:?}", ticket.epoch())
            }
            Settlement::Stale { current, .. } => println!(
                "Request #{} discarded, #{current} is newer",
                ticket.epoch()
            ),
        }
    }

    println!("\nFinal state: {:?}", page.state());
    println!("\n=== Example Complete ===");
}
