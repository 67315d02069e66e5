//! Run an effect inside a tracked flow.

use crate::core::{Event, State};
use crate::effects::flow::AsyncFlow;
use crate::machine::{Settlement, SharedMachine};
use stillwater::effect::Effect;

/// What happened when a driven effect finished.
#[derive(Debug)]
pub struct Settled<S: State, T, Err> {
    /// How the result event was applied
    pub settlement: Settlement<S>,
    /// The decoded result of the effect
    pub outcome: Result<T, Err>,
}

impl<S: State, T, Err> Settled<S, T, Err> {
    pub fn is_stale(&self) -> bool {
        self.settlement.is_stale()
    }
}

/// Begin `flow`, run `effect`, then settle with the matching event.
///
/// The effect's `Result` is decoded once: `Ok` settles with `flow.success`,
/// `Err` with `flow.failure`. The machine is not locked while the effect
/// runs, so other handles can send events or start newer operations in the
/// meantime. If one did, the settlement is stale and the state is untouched;
/// the outcome is still returned so the caller can decide what to do with it.
pub async fn drive<S, E, Eff>(
    machine: &SharedMachine<S, E>,
    flow: &AsyncFlow<E>,
    effect: Eff,
    env: &Eff::Env,
) -> Settled<S, Eff::Output, Eff::Error>
where
    S: State,
    E: Event,
    Eff: Effect,
{
    let ticket = machine.begin(flow.start.clone());
    let outcome = effect.run(env).await;
    let settlement = machine.settle(ticket, flow.event_for(&outcome));

    Settled {
        settlement,
        outcome,
    }
}
