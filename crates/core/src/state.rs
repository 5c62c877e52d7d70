// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared voyage state
//!
//! The counters and flags every actor can see. All access goes through
//! [`SharedVoyageState::snapshot`] or [`SharedVoyageState::mutate`]; the lock is
//! never held across an await point.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Which way the bridge currently lets people walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueDirection {
    #[default]
    TowardShip,
    TowardLand,
}

impl std::fmt::Display for QueueDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueDirection::TowardShip => write!(f, "toward-ship"),
            QueueDirection::TowardLand => write!(f, "toward-land"),
        }
    }
}

/// Point-in-time view of the harbour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoyageState {
    pub people_on_ship: u32,
    pub people_on_bridge: u32,
    /// Completed voyages today
    pub current_voyage: u32,
    pub queue_direction: QueueDirection,
    pub ship_sailing: bool,
    pub end_of_day_signalled: bool,
}

impl VoyageState {
    /// Passengers may step onto the bridge toward the ship
    pub fn boarding_open(&self) -> bool {
        self.queue_direction == QueueDirection::TowardShip
            && !self.ship_sailing
            && !self.end_of_day_signalled
    }

    /// The ship is in port and the bridge leads ashore
    pub fn disembarking(&self) -> bool {
        !self.ship_sailing && self.queue_direction == QueueDirection::TowardLand
    }

    /// Nobody aboard and nobody on the bridge
    pub fn is_empty(&self) -> bool {
        self.people_on_ship == 0 && self.people_on_bridge == 0
    }

    pub fn step_onto_bridge(&mut self) {
        self.people_on_bridge += 1;
    }

    pub fn step_off_bridge(&mut self) {
        if self.people_on_bridge == 0 {
            tracing::warn!("bridge count underflow");
        }
        self.people_on_bridge = self.people_on_bridge.saturating_sub(1);
    }

    /// Move one person from the bridge onto the ship
    pub fn board(&mut self) {
        self.step_off_bridge();
        self.people_on_ship += 1;
    }

    /// Move one person from the ship onto the bridge
    pub fn leave_ship(&mut self) {
        if self.people_on_ship == 0 {
            tracing::warn!("ship count underflow");
        }
        self.people_on_ship = self.people_on_ship.saturating_sub(1);
        self.people_on_bridge += 1;
    }
}

/// Mutex-guarded [`VoyageState`] shared by the scheduler and every passenger
#[derive(Clone, Default)]
pub struct SharedVoyageState {
    inner: Arc<Mutex<VoyageState>>,
}

impl SharedVoyageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state, for decisions that will be re-validated
    pub fn snapshot(&self) -> VoyageState {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Atomic read-modify-write
    pub fn mutate<R>(&self, f: impl FnOnce(&mut VoyageState) -> R) -> R {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }
}

impl std::fmt::Debug for SharedVoyageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedVoyageState")
            .field(&self.snapshot())
            .finish()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
