// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ferry-core: domain model for the ferry boarding simulation
//!
//! This crate provides:
//! - Configuration with startup validation
//! - The mutex-guarded voyage state shared by every actor
//! - The ticket/boarding protocol messages
//! - The boarding sequencer, a pure state machine returning effects
//! - Scheduler and passenger phases

pub mod config;
pub mod effect;
pub mod id;
pub mod phase;
pub mod protocol;
pub mod sequencer;
pub mod state;

pub use config::{ConfigError, FerryConfig};
pub use effect::{CloseReason, Effect, FerryEvent};
pub use id::{PassengerId, PassengerIdGen};
pub use phase::{PassengerPhase, VoyagePhase};
pub use protocol::{BoardingDecision, BridgeReply, BridgeRequest, ControlEvent, Sequence, Ticket};
pub use sequencer::BoardingSequencer;
pub use state::{QueueDirection, SharedVoyageState, VoyageState};
