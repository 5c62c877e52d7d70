// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler and passenger phases

use serde::{Deserialize, Serialize};

/// Voyage lifecycle as driven by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoyagePhase {
    /// Loading window open, tickets and boarding requests accepted
    Boarding,
    /// Bridge turned toward land, waiting for it to clear
    Closing,
    /// Underway
    Sailing,
    /// Back in port, waiting for everyone to disembark
    Arrived,
    /// Terminal
    EndOfDay,
}

impl VoyagePhase {
    /// Early departure only shortens an open loading window
    pub fn accepts_early_departure(&self) -> bool {
        matches!(self, VoyagePhase::Boarding)
    }

    /// Departure is committed; an end-of-day request must wait for arrival
    pub fn departure_committed(&self) -> bool {
        matches!(self, VoyagePhase::Closing | VoyagePhase::Sailing)
    }
}

impl std::fmt::Display for VoyagePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VoyagePhase::Boarding => "boarding",
            VoyagePhase::Closing => "closing",
            VoyagePhase::Sailing => "sailing",
            VoyagePhase::Arrived => "arrived",
            VoyagePhase::EndOfDay => "end-of-day",
        };
        write!(f, "{}", name)
    }
}

/// Client-side state of one passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerPhase {
    Idle,
    /// Holding a bridge slot, about to ask for a ticket
    RequestingTicket,
    AwaitingTicket,
    /// Crossed the bridge with a ticket, waiting for the boarding decision
    AttemptingBoard,
    /// Turned away; waits until the voyage it tried has departed and returned
    DeniedAwaitingNextVoyage { attempted_voyage: u32 },
    OnBoard,
    AwaitingDisembark,
    Disembarking,
    Done,
}

impl PassengerPhase {
    /// Where end-of-day sends a passenger from this phase
    pub fn on_end_of_day(self) -> PassengerPhase {
        match self {
            PassengerPhase::OnBoard
            | PassengerPhase::AwaitingDisembark
            | PassengerPhase::Disembarking => PassengerPhase::Disembarking,
            _ => PassengerPhase::Done,
        }
    }
}

impl std::fmt::Display for PassengerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassengerPhase::Idle => write!(f, "idle"),
            PassengerPhase::RequestingTicket => write!(f, "requesting-ticket"),
            PassengerPhase::AwaitingTicket => write!(f, "awaiting-ticket"),
            PassengerPhase::AttemptingBoard => write!(f, "attempting-board"),
            PassengerPhase::DeniedAwaitingNextVoyage { attempted_voyage } => {
                write!(f, "denied(after voyage {})", attempted_voyage)
            }
            PassengerPhase::OnBoard => write!(f, "on-board"),
            PassengerPhase::AwaitingDisembark => write!(f, "awaiting-disembark"),
            PassengerPhase::Disembarking => write!(f, "disembarking"),
            PassengerPhase::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[test]
    fn only_boarding_accepts_early_departure() {
        assert!(VoyagePhase::Boarding.accepts_early_departure());
        assert!(!VoyagePhase::Closing.accepts_early_departure());
        assert!(!VoyagePhase::Sailing.accepts_early_departure());
        assert!(!VoyagePhase::Arrived.accepts_early_departure());
        assert!(!VoyagePhase::EndOfDay.accepts_early_departure());
    }

    #[test]
    fn end_of_day_waits_only_once_departure_is_committed() {
        assert!(!VoyagePhase::Boarding.departure_committed());
        assert!(VoyagePhase::Closing.departure_committed());
        assert!(VoyagePhase::Sailing.departure_committed());
        assert!(!VoyagePhase::Arrived.departure_committed());
    }

    #[parameterized(
        idle = { PassengerPhase::Idle },
        requesting = { PassengerPhase::RequestingTicket },
        awaiting_ticket = { PassengerPhase::AwaitingTicket },
        attempting = { PassengerPhase::AttemptingBoard },
        denied = { PassengerPhase::DeniedAwaitingNextVoyage { attempted_voyage: 1 } },
    )]
    fn end_of_day_sends_shore_passengers_home(phase: PassengerPhase) {
        assert_eq!(phase.on_end_of_day(), PassengerPhase::Done);
    }

    #[parameterized(
        on_board = { PassengerPhase::OnBoard },
        awaiting_disembark = { PassengerPhase::AwaitingDisembark },
    )]
    fn end_of_day_disembarks_passengers_aboard(phase: PassengerPhase) {
        assert_eq!(phase.on_end_of_day(), PassengerPhase::Disembarking);
    }
}
