// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Passenger agent
//!
//! One task per passenger. Presence on the bridge is always bracketed by a
//! [`BridgeSlot`] and the shared counters, and the ticket exchange runs
//! entirely while standing on the bridge.

use crate::bridge::BridgeSlot;
use crate::context::FerryContext;
use crate::error::EngineError;
use crate::mailbox::Mailbox;
use crate::spawner::random_between;
use ferry_core::{BoardingDecision, BridgeReply, BridgeRequest, PassengerId, PassengerPhase};
use tokio::time::sleep;

/// How a passenger's day ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerOutcome {
    Travelled { passenger: PassengerId, voyage: u32 },
    StayedAshore { passenger: PassengerId, attempts: u32 },
}

impl PassengerOutcome {
    pub fn passenger(&self) -> PassengerId {
        match self {
            PassengerOutcome::Travelled { passenger, .. }
            | PassengerOutcome::StayedAshore { passenger, .. } => *passenger,
        }
    }
}

/// Result of a single trip across the bridge toward the ship
enum Attempt {
    Boarded { voyage: u32 },
    Denied { attempted_voyage: u32 },
    BridgeClosed,
}

pub struct PassengerAgent {
    id: PassengerId,
    ctx: FerryContext,
    mailbox: Mailbox,
    phase: PassengerPhase,
    attempts: u32,
}

impl PassengerAgent {
    /// The mailbox must already be registered so no reply can be missed
    pub fn new(ctx: FerryContext, mailbox: Mailbox) -> Self {
        Self {
            id: mailbox.passenger(),
            ctx,
            mailbox,
            phase: PassengerPhase::Idle,
            attempts: 0,
        }
    }

    pub async fn run(mut self) -> Result<PassengerOutcome, EngineError> {
        let voyage = loop {
            if !self.wait_for_open_bridge().await {
                return Ok(self.go_home());
            }
            match self.attempt_boarding().await? {
                Attempt::Boarded { voyage } => break voyage,
                Attempt::Denied { attempted_voyage } => {
                    if !self.wait_for_next_voyage(attempted_voyage).await {
                        return Ok(self.go_home());
                    }
                }
                Attempt::BridgeClosed => sleep(self.ctx.config.poll_interval).await,
            }
        };

        self.set_phase(PassengerPhase::OnBoard);
        self.set_phase(PassengerPhase::AwaitingDisembark);
        self.wait_until(|s| s.disembarking()).await;
        self.disembark().await?;

        let sailed = self.ctx.state.snapshot().current_voyage >= voyage;
        self.set_phase(PassengerPhase::Done);
        if sailed {
            Ok(PassengerOutcome::Travelled {
                passenger: self.id,
                voyage,
            })
        } else {
            tracing::info!(passenger = %self.id, "ship never left, went ashore");
            Ok(PassengerOutcome::StayedAshore {
                passenger: self.id,
                attempts: self.attempts,
            })
        }
    }

    fn set_phase(&mut self, phase: PassengerPhase) {
        tracing::debug!(passenger = %self.id, from = %self.phase, to = %phase, "passenger");
        self.phase = phase;
    }

    fn go_home(&mut self) -> PassengerOutcome {
        let phase = self.phase.on_end_of_day();
        self.set_phase(phase);
        PassengerOutcome::StayedAshore {
            passenger: self.id,
            attempts: self.attempts,
        }
    }

    /// Returns false once the harbour has closed for the day
    async fn wait_for_open_bridge(&self) -> bool {
        loop {
            let state = self.ctx.state.snapshot();
            if state.end_of_day_signalled {
                return false;
            }
            if state.boarding_open() {
                return true;
            }
            sleep(self.ctx.config.poll_interval).await;
        }
    }

    /// Returns false if the day ends before the attempted voyage returns
    async fn wait_for_next_voyage(&self, attempted_voyage: u32) -> bool {
        loop {
            let state = self.ctx.state.snapshot();
            if state.current_voyage > attempted_voyage {
                return true;
            }
            if state.end_of_day_signalled {
                return false;
            }
            sleep(self.ctx.config.poll_interval).await;
        }
    }

    async fn wait_until(&self, ready: impl Fn(&ferry_core::VoyageState) -> bool) {
        while !ready(&self.ctx.state.snapshot()) {
            sleep(self.ctx.config.poll_interval).await;
        }
    }

    async fn attempt_boarding(&mut self) -> Result<Attempt, EngineError> {
        let slot = self.ctx.bridge.acquire().await?;
        let stepped_on = self.ctx.state.mutate(|s| {
            if s.boarding_open() {
                s.step_onto_bridge();
                Some(s.current_voyage)
            } else {
                None
            }
        });
        let Some(completed) = stepped_on else {
            return Ok(Attempt::BridgeClosed);
        };
        self.attempts += 1;

        match self.cross_and_board(&slot).await {
            Ok(BoardingDecision::Admitted { sequence }) => {
                tracing::debug!(passenger = %self.id, sequence, "aboard");
                Ok(Attempt::Boarded {
                    voyage: completed + 1,
                })
            }
            Ok(BoardingDecision::Denied) => {
                self.ctx.state.mutate(|s| s.step_off_bridge());
                drop(slot);
                self.set_phase(PassengerPhase::DeniedAwaitingNextVoyage {
                    attempted_voyage: completed,
                });
                Ok(Attempt::Denied {
                    attempted_voyage: completed,
                })
            }
            Err(e) => {
                self.ctx.state.mutate(|s| s.step_off_bridge());
                Err(e)
            }
        }
    }

    /// Ticket exchange and crossing, all while holding `_slot`
    async fn cross_and_board(&mut self, _slot: &BridgeSlot) -> Result<BoardingDecision, EngineError> {
        self.set_phase(PassengerPhase::RequestingTicket);
        self.send(BridgeRequest::EnterBridge { passenger: self.id })
            .await?;

        self.set_phase(PassengerPhase::AwaitingTicket);
        let ticket = loop {
            match self.recv().await? {
                BridgeReply::Sequence(ticket) if ticket.passenger == self.id => break ticket,
                other => tracing::warn!(passenger = %self.id, ?other, "unexpected reply"),
            }
        };

        let config = &self.ctx.config;
        let crossing = random_between(
            config.crossing_time,
            config.crossing_time + config.crossing_jitter,
        );
        sleep(crossing).await;

        self.set_phase(PassengerPhase::AttemptingBoard);
        self.send(BridgeRequest::WantToBoard {
            passenger: self.id,
            sequence: ticket.sequence,
        })
        .await?;

        loop {
            match self.recv().await? {
                BridgeReply::Boarding { passenger, decision } if passenger == self.id => {
                    tracing::debug!(passenger = %self.id, code = decision.wire_code(), "decision");
                    return Ok(decision);
                }
                other => tracing::warn!(passenger = %self.id, ?other, "unexpected reply"),
            }
        }
    }

    async fn disembark(&mut self) -> Result<(), EngineError> {
        let slot = self.ctx.bridge.acquire().await?;
        self.set_phase(PassengerPhase::Disembarking);
        self.ctx.state.mutate(|s| s.leave_ship());
        sleep(self.ctx.config.crossing_time).await;
        self.ctx.state.mutate(|s| s.step_off_bridge());
        drop(slot);
        Ok(())
    }

    async fn send(&self, request: BridgeRequest) -> Result<(), EngineError> {
        self.ctx
            .requests
            .send(request)
            .await
            .map_err(|_| EngineError::SchedulerGone(self.id))
    }

    async fn recv(&mut self) -> Result<BridgeReply, EngineError> {
        self.mailbox
            .recv()
            .await
            .ok_or(EngineError::MailboxClosed(self.id))
    }
}
