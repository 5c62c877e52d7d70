// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket and boarding protocol
//!
//! Passengers send [`BridgeRequest`]s on a shared channel; the sequencer answers
//! with [`BridgeReply`]s delivered to each passenger's private mailbox.

use crate::id::PassengerId;
use serde::{Deserialize, Serialize};

/// Position in the boarding order of the current voyage cycle
pub type Sequence = u64;

/// A boarding ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub passenger: PassengerId,
    pub sequence: Sequence,
}

/// Passenger to sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeRequest {
    /// "I am on the bridge, give me a sequence number"
    EnterBridge { passenger: PassengerId },
    /// "I crossed the bridge holding this ticket, let me aboard"
    WantToBoard {
        passenger: PassengerId,
        sequence: Sequence,
    },
}

impl BridgeRequest {
    pub fn passenger(&self) -> PassengerId {
        match self {
            BridgeRequest::EnterBridge { passenger }
            | BridgeRequest::WantToBoard { passenger, .. } => *passenger,
        }
    }
}

/// Outcome of a boarding request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardingDecision {
    Admitted { sequence: Sequence },
    Denied,
}

impl BoardingDecision {
    /// Wire form: the admitted sequence, or -1 for a denial
    pub fn wire_code(&self) -> i64 {
        match self {
            BoardingDecision::Admitted { sequence } => i64::try_from(*sequence).unwrap_or(i64::MAX),
            BoardingDecision::Denied => -1,
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, BoardingDecision::Admitted { .. })
    }
}

/// Sequencer to passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeReply {
    /// Ticket granted
    Sequence(Ticket),
    /// Admission decision for a ticket
    Boarding {
        passenger: PassengerId,
        decision: BoardingDecision,
    },
}

impl BridgeReply {
    pub fn passenger(&self) -> PassengerId {
        match self {
            BridgeReply::Sequence(ticket) => ticket.passenger,
            BridgeReply::Boarding { passenger, .. } => *passenger,
        }
    }
}

/// Operator commands delivered asynchronously to the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    EarlyDeparture,
    EndOfDay,
}

impl std::fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlEvent::EarlyDeparture => write!(f, "early-departure"),
            ControlEvent::EndOfDay => write!(f, "end-of-day"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_follow_protocol_table() {
        assert_eq!(BoardingDecision::Admitted { sequence: 0 }.wire_code(), 0);
        assert_eq!(BoardingDecision::Admitted { sequence: 42 }.wire_code(), 42);
        assert_eq!(BoardingDecision::Denied.wire_code(), -1);
    }

    #[test]
    fn replies_know_their_addressee() {
        let ticket = Ticket {
            passenger: PassengerId(3),
            sequence: 9,
        };
        assert_eq!(BridgeReply::Sequence(ticket).passenger(), PassengerId(3));
        let reply = BridgeReply::Boarding {
            passenger: PassengerId(4),
            decision: BoardingDecision::Denied,
        };
        assert_eq!(reply.passenger(), PassengerId(4));
    }

    #[test]
    fn requests_know_their_sender() {
        let request = BridgeRequest::WantToBoard {
            passenger: PassengerId(5),
            sequence: 1,
        };
        assert_eq!(request.passenger(), PassengerId(5));
    }
}
