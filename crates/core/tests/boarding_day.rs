// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! Integration tests for the boarding protocol
//!
//! Drives the sequencer and the shared voyage state by hand through whole
//! voyage cycles, playing every passenger's side of the protocol.

use ferry_core::{
    BoardingDecision, BoardingSequencer, BridgeReply, BridgeRequest, CloseReason, Effect,
    FerryConfig, FerryEvent, PassengerId, QueueDirection, SharedVoyageState, Ticket,
};
use std::io::Write;

fn replies(effects: &[Effect]) -> Vec<BridgeReply> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Reply { reply, .. } => Some(*reply),
            Effect::Emit(_) => None,
        })
        .collect()
}

fn events(effects: &[Effect]) -> Vec<FerryEvent> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Emit(event) => Some(event.clone()),
            Effect::Reply { .. } => None,
        })
        .collect()
}

/// Step onto the bridge and take a ticket
fn enter(seq: &mut BoardingSequencer, state: &SharedVoyageState, id: u32) -> Ticket {
    state.mutate(|s| {
        assert!(s.boarding_open());
        s.step_onto_bridge();
    });
    let effects = seq.handle(
        BridgeRequest::EnterBridge {
            passenger: PassengerId(id),
        },
        state,
    );
    match replies(&effects).as_slice() {
        [BridgeReply::Sequence(ticket)] => *ticket,
        other => panic!("expected a ticket, got {:?}", other),
    }
}

fn want_to_board(
    seq: &mut BoardingSequencer,
    state: &SharedVoyageState,
    ticket: Ticket,
) -> Vec<Effect> {
    seq.handle(
        BridgeRequest::WantToBoard {
            passenger: ticket.passenger,
            sequence: ticket.sequence,
        },
        state,
    )
}

/// Everyone aboard walks ashore
fn disembark_all(state: &SharedVoyageState) {
    state.mutate(|s| {
        assert!(s.disembarking());
        while s.people_on_ship > 0 {
            s.leave_ship();
            s.step_off_bridge();
        }
    });
}

#[test]
fn two_voyage_cycles_with_out_of_order_crossings() {
    let state = SharedVoyageState::new();
    let mut seq = BoardingSequencer::new(3);

    // voyage 1: four passengers, three seats
    seq.open_boarding(1);
    let tickets: Vec<Ticket> = (1..=4).map(|id| enter(&mut seq, &state, id)).collect();
    assert_eq!(
        tickets.iter().map(|t| t.sequence).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );

    // crossings finish in reverse order; nobody boards until ticket 0 arrives
    for ticket in tickets[1..].iter().rev() {
        assert!(replies(&want_to_board(&mut seq, &state, *ticket)).is_empty());
    }
    assert_eq!(seq.waiting_count(), 3);

    let effects = want_to_board(&mut seq, &state, tickets[0]);
    let decisions: Vec<BoardingDecision> = replies(&effects)
        .into_iter()
        .map(|r| match r {
            BridgeReply::Boarding { decision, .. } => decision,
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert_eq!(
        decisions,
        vec![
            BoardingDecision::Admitted { sequence: 0 },
            BoardingDecision::Admitted { sequence: 1 },
            BoardingDecision::Admitted { sequence: 2 },
            BoardingDecision::Denied,
        ]
    );
    assert!(events(&effects).contains(&FerryEvent::ShipFull { voyage: 1 }));
    assert_eq!(seq.waiting_count(), 0);

    // the denied passenger walks back; the bridge is clear for departure
    state.mutate(|s| s.step_off_bridge());
    let snapshot = state.snapshot();
    assert_eq!((snapshot.people_on_ship, snapshot.people_on_bridge), (3, 0));

    // sail and return
    state.mutate(|s| {
        s.queue_direction = QueueDirection::TowardLand;
        s.ship_sailing = true;
    });
    seq.close_boarding(CloseReason::ShipFull);
    state.mutate(|s| {
        s.ship_sailing = false;
        s.current_voyage += 1;
    });
    seq.reset();
    disembark_all(&state);
    assert!(state.snapshot().is_empty());

    // voyage 2: the denied passenger gets a fresh ticket numbered from zero
    state.mutate(|s| s.queue_direction = QueueDirection::TowardShip);
    seq.open_boarding(2);
    let again = enter(&mut seq, &state, 4);
    assert_eq!(again.sequence, 0);
    let effects = want_to_board(&mut seq, &state, again);
    assert_eq!(
        events(&effects),
        vec![FerryEvent::PassengerBoarded {
            voyage: 2,
            passenger: PassengerId(4),
            sequence: 0,
            people_on_ship: 1,
        }]
    );
}

#[test]
fn ticket_from_a_previous_voyage_is_a_violation() {
    let state = SharedVoyageState::new();
    let mut seq = BoardingSequencer::new(3);
    seq.open_boarding(1);
    let stale = enter(&mut seq, &state, 1);
    let second = enter(&mut seq, &state, 2);

    seq.close_boarding(CloseReason::Timer);
    seq.reset();
    seq.open_boarding(2);
    let fresh = enter(&mut seq, &state, 3);
    assert_eq!(fresh.sequence, 0);

    // passenger 2 replays its old ticket 1, which nobody holds this voyage
    let effects = want_to_board(&mut seq, &state, second);
    assert!(replies(&effects).is_empty());
    assert!(events(&effects).iter().all(FerryEvent::is_violation));

    // passenger 1 replays ticket 0, now owned by passenger 3
    let effects = want_to_board(&mut seq, &state, stale);
    assert!(replies(&effects).is_empty());
    assert!(matches!(
        events(&effects).as_slice(),
        [FerryEvent::ProtocolViolation { passenger: PassengerId(1), .. }]
    ));
}

#[test]
fn config_file_round_trip_through_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "ship_capacity = 20\nbridge_capacity = 4\ntime_between_trips = \"2m\"\ntrip_duration = \"90s\""
    )
    .unwrap();

    let config = FerryConfig::load(file.path()).unwrap();
    assert_eq!(config.ship_capacity, 20);
    assert_eq!(config.bridge_capacity, 4);
    assert_eq!(config.time_between_trips.as_secs(), 120);
    assert_eq!(config.trip_duration.as_secs(), 90);
    assert_eq!(config.trips_per_day, FerryConfig::default().trips_per_day);
    config.validate().unwrap();
}
