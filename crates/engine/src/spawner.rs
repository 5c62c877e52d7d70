// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Passenger spawner

use crate::context::FerryContext;
use crate::error::EngineError;
use crate::passenger::{PassengerAgent, PassengerOutcome};
use ferry_core::PassengerIdGen;
use rand::Rng;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::Instrument;

pub type PassengerTask = JoinHandle<Result<PassengerOutcome, EngineError>>;

/// Uniformly random duration in `[min, max]`, at microsecond resolution
pub(crate) fn random_between(min: Duration, max: Duration) -> Duration {
    if max <= min {
        return min;
    }
    let lo = u64::try_from(min.as_micros()).unwrap_or(u64::MAX);
    let hi = u64::try_from(max.as_micros()).unwrap_or(u64::MAX);
    Duration::from_micros(rand::thread_rng().gen_range(lo..=hi))
}

/// Releases passengers into the harbour at random intervals
pub struct PassengerSpawner {
    ctx: FerryContext,
    ids: PassengerIdGen,
}

impl PassengerSpawner {
    pub fn new(ctx: FerryContext) -> Self {
        Self {
            ctx,
            ids: PassengerIdGen::new(),
        }
    }

    /// Spawn the configured number of passengers, stopping early at end of
    /// day. Returns the handles of every passenger spawned.
    pub async fn run(self) -> Vec<PassengerTask> {
        let total = self.ctx.config.passengers;
        let mut tasks = Vec::with_capacity(total as usize);

        for _ in 0..total {
            if self.ctx.state.snapshot().end_of_day_signalled {
                tracing::info!(spawned = tasks.len(), "harbour closed, no more arrivals");
                break;
            }
            tasks.push(self.spawn_one());

            let gap = random_between(
                self.ctx.config.min_arrival_gap,
                self.ctx.config.max_arrival_gap,
            );
            tokio::time::sleep(gap).await;
        }
        tasks
    }

    fn spawn_one(&self) -> PassengerTask {
        let id = self.ids.next();
        let mailbox = self.ctx.mailboxes.register(id);
        let agent = PassengerAgent::new(self.ctx.clone(), mailbox);
        tracing::debug!(passenger = %id, "arrived at the harbour");
        tokio::spawn(
            agent
                .run()
                .instrument(tracing::info_span!("passenger", id = %id)),
        )
    }
}
