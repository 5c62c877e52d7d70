// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Ferry harbour runtime: scheduler, passengers and bridge

mod bridge;
mod context;
mod error;
mod executor;
mod mailbox;
mod operator;
mod passenger;
mod report;
mod scheduler;
mod simulation;
mod spawner;

pub use bridge::{BridgeAdmission, BridgeSlot};
pub use context::{FerryContext, REQUEST_BUFFER};
pub use error::EngineError;
pub use executor::{EventReceiver, EventSender, Executor};
pub use mailbox::{Mailbox, Mailboxes};
pub use operator::OperatorHandle;
pub use passenger::{PassengerAgent, PassengerOutcome};
pub use report::{DayReport, Voyage};
pub use scheduler::VoyageScheduler;
pub use simulation::Simulation;
pub use spawner::{PassengerSpawner, PassengerTask};
