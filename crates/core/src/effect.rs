// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration

use crate::id::PassengerId;
use crate::phase::VoyagePhase;
use crate::protocol::{BridgeReply, Sequence};
use serde::{Deserialize, Serialize};

/// Effects are side effects that state machines request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver a protocol reply to one passenger's mailbox
    Reply {
        passenger: PassengerId,
        reply: BridgeReply,
    },
    /// Emit an event for other components to observe
    Emit(FerryEvent),
}

/// Why a loading window ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    /// The loading window elapsed
    Timer,
    EarlyDeparture,
    ShipFull,
    EndOfDay,
    /// Counters reset between voyages
    Reset,
}

impl std::fmt::Display for CloseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CloseReason::Timer => "timer",
            CloseReason::EarlyDeparture => "early-departure",
            CloseReason::ShipFull => "ship-full",
            CloseReason::EndOfDay => "end-of-day",
            CloseReason::Reset => "reset",
        };
        write!(f, "{}", name)
    }
}

/// Observable facts about the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FerryEvent {
    BoardingOpened {
        voyage: u32,
    },
    TicketIssued {
        voyage: u32,
        passenger: PassengerId,
        sequence: Sequence,
    },
    PassengerBoarded {
        voyage: u32,
        passenger: PassengerId,
        sequence: Sequence,
        people_on_ship: u32,
    },
    PassengerDenied {
        voyage: u32,
        passenger: PassengerId,
        sequence: Sequence,
    },
    ShipFull {
        voyage: u32,
    },
    BoardingClosed {
        voyage: u32,
        reason: CloseReason,
    },
    VoyageDeparted {
        voyage: u32,
        people_on_ship: u32,
        people_on_bridge: u32,
    },
    VoyageArrived {
        voyage: u32,
        passengers: u32,
    },
    EarlyDepartureRejected {
        phase: VoyagePhase,
    },
    EndOfDayLatched {
        phase: VoyagePhase,
    },
    DayEnded {
        voyages_completed: u32,
    },
    ProtocolViolation {
        passenger: PassengerId,
        detail: String,
    },
}

impl FerryEvent {
    /// Stable event name, `<subject>:<verb>`
    pub fn name(&self) -> &'static str {
        match self {
            FerryEvent::BoardingOpened { .. } => "boarding:opened",
            FerryEvent::TicketIssued { .. } => "ticket:issued",
            FerryEvent::PassengerBoarded { .. } => "passenger:boarded",
            FerryEvent::PassengerDenied { .. } => "passenger:denied",
            FerryEvent::ShipFull { .. } => "ship:full",
            FerryEvent::BoardingClosed { .. } => "boarding:closed",
            FerryEvent::VoyageDeparted { .. } => "voyage:departed",
            FerryEvent::VoyageArrived { .. } => "voyage:arrived",
            FerryEvent::EarlyDepartureRejected { .. } => "operator:early-departure-rejected",
            FerryEvent::EndOfDayLatched { .. } => "operator:end-of-day",
            FerryEvent::DayEnded { .. } => "day:ended",
            FerryEvent::ProtocolViolation { .. } => "protocol:violation",
        }
    }

    /// Voyage the event belongs to, if any
    pub fn voyage(&self) -> Option<u32> {
        match self {
            FerryEvent::BoardingOpened { voyage }
            | FerryEvent::TicketIssued { voyage, .. }
            | FerryEvent::PassengerBoarded { voyage, .. }
            | FerryEvent::PassengerDenied { voyage, .. }
            | FerryEvent::ShipFull { voyage }
            | FerryEvent::BoardingClosed { voyage, .. }
            | FerryEvent::VoyageDeparted { voyage, .. }
            | FerryEvent::VoyageArrived { voyage, .. } => Some(*voyage),
            _ => None,
        }
    }

    pub fn is_violation(&self) -> bool {
        matches!(self, FerryEvent::ProtocolViolation { .. })
    }
}

impl std::fmt::Display for FerryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FerryEvent::BoardingOpened { voyage } => {
                write!(f, "boarding opened for voyage {}", voyage)
            }
            FerryEvent::TicketIssued {
                passenger,
                sequence,
                ..
            } => write!(f, "{} entered the bridge with ticket {}", passenger, sequence),
            FerryEvent::PassengerBoarded {
                passenger,
                sequence,
                people_on_ship,
                ..
            } => write!(
                f,
                "{} boarded with ticket {} ({} aboard)",
                passenger, sequence, people_on_ship
            ),
            FerryEvent::PassengerDenied {
                passenger,
                sequence,
                ..
            } => write!(f, "{} denied boarding with ticket {}", passenger, sequence),
            FerryEvent::ShipFull { voyage } => write!(f, "ship full for voyage {}", voyage),
            FerryEvent::BoardingClosed { voyage, reason } => {
                write!(f, "boarding closed for voyage {} ({})", voyage, reason)
            }
            FerryEvent::VoyageDeparted {
                voyage,
                people_on_ship,
                ..
            } => write!(
                f,
                "voyage {} departed with {} passengers",
                voyage, people_on_ship
            ),
            FerryEvent::VoyageArrived { voyage, passengers } => {
                write!(f, "voyage {} arrived with {} passengers", voyage, passengers)
            }
            FerryEvent::EarlyDepartureRejected { phase } => {
                write!(f, "early departure rejected while {}", phase)
            }
            FerryEvent::EndOfDayLatched { phase } => {
                write!(f, "end of day requested while {}", phase)
            }
            FerryEvent::DayEnded { voyages_completed } => {
                write!(f, "day ended after {} voyages", voyages_completed)
            }
            FerryEvent::ProtocolViolation { passenger, detail } => {
                write!(f, "protocol violation by {}: {}", passenger, detail)
            }
        }
    }
}
