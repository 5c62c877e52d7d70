// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boarding sequencer
//!
//! Hands out tickets to passengers stepping onto the bridge and admits them
//! to the ship strictly in ticket order, whatever order they finish crossing
//! in. A passenger whose ticket is not next parks in the wait queue; each
//! admission cascades through the queue until it hits a gap or the ship fills.
//!
//! The sequencer is single-writer state owned by the scheduler loop, so it
//! carries no lock of its own. Ship and bridge counters live in the
//! [`SharedVoyageState`] and are only touched inside its lock.

use crate::effect::{CloseReason, Effect, FerryEvent};
use crate::id::PassengerId;
use crate::protocol::{BoardingDecision, BridgeReply, BridgeRequest, Sequence, Ticket};
use crate::state::SharedVoyageState;
use std::collections::BTreeMap;

/// Ticket queue for one voyage cycle
#[derive(Debug, Clone)]
pub struct BoardingSequencer {
    ship_capacity: u32,
    voyage: u32,
    /// Ticket holders, indexed by sequence
    issued: Vec<PassengerId>,
    next_to_board: Sequence,
    waiting: BTreeMap<Sequence, PassengerId>,
    open: bool,
    full: bool,
}

impl BoardingSequencer {
    /// A closed sequencer; call [`open_boarding`](Self::open_boarding) to start loading
    pub fn new(ship_capacity: u32) -> Self {
        Self {
            ship_capacity,
            voyage: 0,
            issued: Vec::new(),
            next_to_board: 0,
            waiting: BTreeMap::new(),
            open: false,
            full: false,
        }
    }

    pub fn voyage(&self) -> u32 {
        self.voyage
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The ship filled during this loading window
    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn tickets_issued(&self) -> Sequence {
        self.issued.len() as Sequence
    }

    pub fn next_to_board(&self) -> Sequence {
        self.next_to_board
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Start the loading window for `voyage` with fresh counters
    pub fn open_boarding(&mut self, voyage: u32) -> Vec<Effect> {
        let mut effects = self.reset();
        self.voyage = voyage;
        self.open = true;
        effects.push(Effect::Emit(FerryEvent::BoardingOpened { voyage }));
        effects
    }

    /// Stop admitting and deny everyone still queued
    pub fn close_boarding(&mut self, reason: CloseReason) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.open {
            self.open = false;
            effects.push(Effect::Emit(FerryEvent::BoardingClosed {
                voyage: self.voyage,
                reason,
            }));
        }
        effects.extend(self.dump_waiting_replies());
        effects
    }

    /// Clear the queue and counters between voyages.
    ///
    /// Pending tickets are flushed with a denial so nobody blocks forever.
    pub fn reset(&mut self) -> Vec<Effect> {
        let effects = self.dump_waiting_replies();
        self.issued.clear();
        self.next_to_board = 0;
        self.open = false;
        self.full = false;
        effects
    }

    /// Dispatch an inbound request
    pub fn handle(&mut self, request: BridgeRequest, state: &SharedVoyageState) -> Vec<Effect> {
        match request {
            BridgeRequest::EnterBridge { passenger } => self.issue_ticket(passenger),
            BridgeRequest::WantToBoard {
                passenger,
                sequence,
            } => self.request_boarding(passenger, sequence, state),
        }
    }

    /// Hand out the next sequence number.
    ///
    /// No capacity check here; a full ship turns the ticket away at boarding time.
    pub fn issue_ticket(&mut self, passenger: PassengerId) -> Vec<Effect> {
        let sequence = self.tickets_issued();
        self.issued.push(passenger);
        vec![
            Effect::Reply {
                passenger,
                reply: BridgeReply::Sequence(Ticket {
                    passenger,
                    sequence,
                }),
            },
            Effect::Emit(FerryEvent::TicketIssued {
                voyage: self.voyage,
                passenger,
                sequence,
            }),
        ]
    }

    /// Decide a boarding request: admit (and cascade), park, or deny
    pub fn request_boarding(
        &mut self,
        passenger: PassengerId,
        sequence: Sequence,
        state: &SharedVoyageState,
    ) -> Vec<Effect> {
        let holder = usize::try_from(sequence)
            .ok()
            .and_then(|index| self.issued.get(index).copied());
        match holder {
            None => {
                return self.violation(passenger, format!("ticket {} was never issued", sequence));
            }
            Some(holder) if holder != passenger => {
                return self.violation(
                    passenger,
                    format!("ticket {} belongs to {}", sequence, holder),
                );
            }
            Some(_) => {}
        }
        if sequence < self.next_to_board {
            return self.violation(
                passenger,
                format!(
                    "stale ticket {}, next to board is {}",
                    sequence, self.next_to_board
                ),
            );
        }

        let mut effects = Vec::new();
        if !self.full && state.snapshot().people_on_ship >= self.ship_capacity {
            self.mark_full(&mut effects);
        }
        if !self.open || self.full {
            effects.extend(self.deny(passenger, sequence));
            return effects;
        }

        if sequence == self.next_to_board {
            self.admit_cascade(passenger, sequence, state, &mut effects);
        } else {
            self.waiting.insert(sequence, passenger);
        }
        effects
    }

    fn admit_cascade(
        &mut self,
        passenger: PassengerId,
        sequence: Sequence,
        state: &SharedVoyageState,
        effects: &mut Vec<Effect>,
    ) {
        let capacity = self.ship_capacity;
        let mut candidate = Some((passenger, sequence));

        while let Some((passenger, sequence)) = candidate.take() {
            let boarded = state.mutate(|s| {
                if s.people_on_ship < capacity {
                    s.board();
                    Some(s.people_on_ship)
                } else {
                    None
                }
            });
            let Some(people_on_ship) = boarded else {
                effects.extend(self.deny(passenger, sequence));
                self.mark_full(effects);
                return;
            };

            effects.push(Effect::Reply {
                passenger,
                reply: BridgeReply::Boarding {
                    passenger,
                    decision: BoardingDecision::Admitted { sequence },
                },
            });
            effects.push(Effect::Emit(FerryEvent::PassengerBoarded {
                voyage: self.voyage,
                passenger,
                sequence,
                people_on_ship,
            }));
            self.next_to_board += 1;

            if people_on_ship >= capacity {
                self.mark_full(effects);
                return;
            }
            let next = self.next_to_board;
            candidate = self.waiting.remove(&next).map(|p| (p, next));
        }
    }

    fn mark_full(&mut self, effects: &mut Vec<Effect>) {
        if !self.full {
            self.full = true;
            effects.push(Effect::Emit(FerryEvent::ShipFull {
                voyage: self.voyage,
            }));
        }
        effects.extend(self.dump_waiting_replies());
    }

    fn dump_waiting_replies(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.waiting)
            .into_iter()
            .flat_map(|(sequence, passenger)| self.deny(passenger, sequence))
            .collect()
    }

    fn deny(&self, passenger: PassengerId, sequence: Sequence) -> [Effect; 2] {
        [
            Effect::Reply {
                passenger,
                reply: BridgeReply::Boarding {
                    passenger,
                    decision: BoardingDecision::Denied,
                },
            },
            Effect::Emit(FerryEvent::PassengerDenied {
                voyage: self.voyage,
                passenger,
                sequence,
            }),
        ]
    }

    /// Contract violations are reported and dropped without a reply
    fn violation(&self, passenger: PassengerId, detail: String) -> Vec<Effect> {
        vec![Effect::Emit(FerryEvent::ProtocolViolation { passenger, detail })]
    }
}

#[cfg(test)]
#[path = "sequencer_tests.rs"]
mod tests;
