// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation wiring
//!
//! Creates the shared state, bridge, request channel and mailboxes, then runs
//! the scheduler, spawner and every passenger to the end of the day.

use crate::bridge::BridgeAdmission;
use crate::context::{FerryContext, REQUEST_BUFFER};
use crate::error::EngineError;
use crate::executor::{EventSender, Executor};
use crate::mailbox::Mailboxes;
use crate::operator::OperatorHandle;
use crate::report::DayReport;
use crate::scheduler::VoyageScheduler;
use crate::spawner::PassengerSpawner;
use ferry_core::{FerryConfig, SharedVoyageState};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct Simulation {
    ctx: FerryContext,
    scheduler: VoyageScheduler,
    operator: OperatorHandle,
}

impl Simulation {
    pub fn new(config: FerryConfig) -> Result<Self, EngineError> {
        Self::build(config, None)
    }

    /// Like [`Simulation::new`], also forwarding every event to `observer`
    pub fn with_observer(config: FerryConfig, observer: EventSender) -> Result<Self, EngineError> {
        Self::build(config, Some(observer))
    }

    fn build(config: FerryConfig, observer: Option<EventSender>) -> Result<Self, EngineError> {
        config.validate()?;

        let config = Arc::new(config);
        let state = SharedVoyageState::new();
        let bridge = BridgeAdmission::new(config.bridge_capacity)?;
        let mailboxes = Mailboxes::new();
        let (requests_tx, requests_rx) = mpsc::channel(REQUEST_BUFFER);
        let (control_tx, control_rx) = mpsc::unbounded_channel();

        let mut executor = Executor::new(mailboxes.clone());
        if let Some(observer) = observer {
            executor = executor.with_observer(observer);
        }
        let scheduler = VoyageScheduler::new(
            Arc::clone(&config),
            state.clone(),
            requests_rx,
            control_rx,
            executor,
        );

        Ok(Self {
            ctx: FerryContext {
                config,
                state,
                bridge,
                requests: requests_tx,
                mailboxes,
            },
            scheduler,
            operator: OperatorHandle::new(control_tx),
        })
    }

    /// Handle for early-departure and end-of-day requests
    pub fn operator(&self) -> OperatorHandle {
        self.operator.clone()
    }

    pub fn state(&self) -> SharedVoyageState {
        self.ctx.state.clone()
    }

    /// Run the day to completion
    pub async fn run(self) -> Result<DayReport, EngineError> {
        let Simulation { ctx, scheduler, .. } = self;

        let scheduler = tokio::spawn(scheduler.run());
        let spawner = tokio::spawn(PassengerSpawner::new(ctx.clone()).run());
        drop(ctx);

        let mut report = scheduler.await?;
        let passengers = spawner.await?;
        for task in passengers {
            match task.await? {
                Ok(outcome) => report.passengers.push(outcome),
                Err(e) => tracing::error!(error = %e, "passenger failed"),
            }
        }
        report.passengers.sort_by_key(|p| p.passenger());

        tracing::info!(
            voyages = report.voyages.len(),
            carried = report.passengers_carried(),
            stayed_ashore = report.stayed_ashore(),
            "day complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
