// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-of-day report

use crate::passenger::PassengerOutcome;

/// One completed sailing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voyage {
    pub ordinal: u32,
    pub passenger_count: u32,
}

#[derive(Debug, Clone, Default)]
pub struct DayReport {
    pub voyages: Vec<Voyage>,
    /// The operator closed the harbour before the daily trip limit
    pub ended_early: bool,
    pub passengers: Vec<PassengerOutcome>,
}

impl DayReport {
    pub fn passengers_carried(&self) -> u32 {
        self.voyages.iter().map(|v| v.passenger_count).sum()
    }

    /// Passengers that never made it aboard
    pub fn stayed_ashore(&self) -> usize {
        self.passengers
            .iter()
            .filter(|p| matches!(p, PassengerOutcome::StayedAshore { .. }))
            .count()
    }
}
