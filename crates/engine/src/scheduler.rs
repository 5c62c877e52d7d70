// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Voyage scheduler
//!
//! Drives `Boarding -> Closing -> Sailing -> Arrived -> Boarding` until the
//! daily trip limit or an end-of-day request, draining the sequencer's
//! request channel on every iteration. Phase waits are polling loops with a
//! bounded sleep so operator events stay responsive; operator events are
//! applied at the top of each iteration, never mid-update.

use crate::executor::Executor;
use crate::report::{DayReport, Voyage};
use ferry_core::{
    BoardingSequencer, BridgeRequest, CloseReason, ControlEvent, FerryConfig, FerryEvent,
    QueueDirection, SharedVoyageState, VoyagePhase, VoyageState,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};

pub struct VoyageScheduler {
    config: Arc<FerryConfig>,
    state: SharedVoyageState,
    sequencer: BoardingSequencer,
    requests: mpsc::Receiver<BridgeRequest>,
    control: mpsc::UnboundedReceiver<ControlEvent>,
    executor: Executor,
    phase: VoyagePhase,
    early_departure: bool,
    end_of_day: bool,
    voyages: Vec<Voyage>,
}

impl VoyageScheduler {
    pub fn new(
        config: Arc<FerryConfig>,
        state: SharedVoyageState,
        requests: mpsc::Receiver<BridgeRequest>,
        control: mpsc::UnboundedReceiver<ControlEvent>,
        executor: Executor,
    ) -> Self {
        Self {
            sequencer: BoardingSequencer::new(config.ship_capacity),
            config,
            state,
            requests,
            control,
            executor,
            phase: VoyagePhase::Boarding,
            early_departure: false,
            end_of_day: false,
            voyages: Vec::new(),
        }
    }

    /// Run the day to completion
    pub async fn run(mut self) -> DayReport {
        tracing::info!(
            trips = self.config.trips_per_day,
            ship_capacity = self.config.ship_capacity,
            bridge_capacity = self.config.bridge_capacity,
            "harbour open"
        );

        loop {
            let voyage = self.state.snapshot().current_voyage + 1;
            self.enter(VoyagePhase::Boarding);
            self.early_departure = false;
            let effects = self.sequencer.open_boarding(voyage);
            self.executor.execute_all(effects);

            let reason = self.boarding().await;
            if reason == CloseReason::EndOfDay {
                break;
            }
            self.closing(reason).await;
            self.sailing(voyage).await;
            let completed = self.arrived(voyage).await;

            if self.end_of_day || completed >= self.config.trips_per_day {
                break;
            }
            self.state
                .mutate(|s| s.queue_direction = QueueDirection::TowardShip);
        }

        self.close_day().await;
        DayReport {
            voyages: self.voyages,
            ended_early: self.end_of_day,
            passengers: Vec::new(),
        }
    }

    fn enter(&mut self, phase: VoyagePhase) {
        tracing::debug!(from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
    }

    /// Apply operator events, then answer every queued passenger request
    fn pump(&mut self) {
        while let Ok(event) = self.control.try_recv() {
            self.handle_control(event);
        }
        while let Ok(request) = self.requests.try_recv() {
            let effects = self.sequencer.handle(request, &self.state);
            self.executor.execute_all(effects);
        }
    }

    fn handle_control(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::EarlyDeparture => {
                if !self.phase.accepts_early_departure() {
                    self.executor
                        .emit(FerryEvent::EarlyDepartureRejected { phase: self.phase });
                } else if !self.early_departure {
                    self.early_departure = true;
                    tracing::info!("early departure requested");
                }
            }
            ControlEvent::EndOfDay => {
                if self.end_of_day {
                    return;
                }
                self.end_of_day = true;
                self.executor
                    .emit(FerryEvent::EndOfDayLatched { phase: self.phase });
                if self.phase.departure_committed() {
                    tracing::info!("ship already departing, end of day applies on arrival");
                } else {
                    // requests drained later in this pump must not be admitted
                    let effects = self.sequencer.close_boarding(CloseReason::EndOfDay);
                    self.executor.execute_all(effects);
                }
            }
        }
    }

    /// Loading window; returns why it ended
    async fn boarding(&mut self) -> CloseReason {
        let deadline = Instant::now() + self.config.time_between_trips;
        loop {
            self.pump();
            if self.end_of_day {
                return CloseReason::EndOfDay;
            }
            if self.early_departure {
                return CloseReason::EarlyDeparture;
            }
            if self.sequencer.is_full() {
                return CloseReason::ShipFull;
            }
            let now = Instant::now();
            if now >= deadline {
                return CloseReason::Timer;
            }
            sleep(self.config.poll_interval.min(deadline - now)).await;
        }
    }

    async fn closing(&mut self, reason: CloseReason) {
        self.enter(VoyagePhase::Closing);
        self.state.mutate(|s| {
            s.queue_direction = QueueDirection::TowardLand;
            s.ship_sailing = true;
        });
        let effects = self.sequencer.close_boarding(reason);
        self.executor.execute_all(effects);
        self.wait_until(|s| s.people_on_bridge == 0).await;
    }

    async fn sailing(&mut self, voyage: u32) {
        self.enter(VoyagePhase::Sailing);
        let snapshot = self.state.snapshot();
        self.executor.emit(FerryEvent::VoyageDeparted {
            voyage,
            people_on_ship: snapshot.people_on_ship,
            people_on_bridge: snapshot.people_on_bridge,
        });
        self.wait_for(self.config.trip_duration).await;
    }

    /// Returns the number of completed voyages
    async fn arrived(&mut self, voyage: u32) -> u32 {
        self.enter(VoyagePhase::Arrived);
        let (passengers, completed) = self.state.mutate(|s| {
            s.ship_sailing = false;
            s.current_voyage += 1;
            (s.people_on_ship, s.current_voyage)
        });
        self.voyages.push(Voyage {
            ordinal: voyage,
            passenger_count: passengers,
        });
        self.executor
            .emit(FerryEvent::VoyageArrived { voyage, passengers });

        let effects = self.sequencer.reset();
        self.executor.execute_all(effects);
        self.wait_until(VoyageState::is_empty).await;
        completed
    }

    async fn close_day(&mut self) {
        self.enter(VoyagePhase::EndOfDay);
        self.state.mutate(|s| {
            s.queue_direction = QueueDirection::TowardLand;
            s.end_of_day_signalled = true;
        });
        let effects = self.sequencer.close_boarding(CloseReason::EndOfDay);
        self.executor.execute_all(effects);
        self.wait_until(VoyageState::is_empty).await;

        let voyages_completed = self.state.snapshot().current_voyage;
        self.executor
            .emit(FerryEvent::DayEnded { voyages_completed });
    }

    /// Poll until `done` holds, serving requests in between
    async fn wait_until(&mut self, done: impl Fn(&VoyageState) -> bool) {
        loop {
            self.pump();
            if done(&self.state.snapshot()) {
                return;
            }
            sleep(self.config.poll_interval).await;
        }
    }

    /// Wait out a fixed duration against a deadline, so interruptions never
    /// shorten it
    async fn wait_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            self.pump();
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            sleep(self.config.poll_interval.min(deadline - now)).await;
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
