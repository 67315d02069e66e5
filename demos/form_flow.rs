//! Form Flow
//!
//! Submits a withdrawal form through an effect, rejects it, then resubmits
//! with a valid amount.
//!
//! Run with: RUST_LOG=flowstate=debug cargo run --example form_flow

use flowstate::core::State;
use flowstate::effects::drive;
use flowstate::flows::{form_config, FormEvent};
use flowstate::machine::SharedMachine;
use stillwater::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct Wallet {
    balance: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Form Flow Example ===\n");

    let wallet = Wallet { balance: 500 };
    let form = SharedMachine::create(form_config());

    for amount in [800u64, 200] {
        let withdraw = from_fn(move |wallet: &Wallet| {
            if amount <= wallet.balance {
                Ok(wallet.balance - amount)
            } else {
                Err(format!("insufficient balance for {amount}"))
            }
        });

        let settled = drive(&form, &FormEvent::flow(), withdraw, &wallet).await;
        match &settled.outcome {
            Ok(remaining) => println!("Withdrew {amount}, {remaining} left"),
            Err(reason) => println!("Rejected: {reason}"),
        }
        println!("Form state: {:?}\n", form.state());

        if form.state().is_error() {
            form.send(FormEvent::Reset);
        }
    }

    println!("=== Example Complete ===");
}
