// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Passenger identity

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Identity of one passenger agent; replies are addressed by it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PassengerId(pub u32);

impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "passenger-{}", self.0)
    }
}

/// Hands out sequential passenger ids, starting at 1
#[derive(Clone)]
pub struct PassengerIdGen {
    counter: Arc<AtomicU32>,
}

impl PassengerIdGen {
    pub fn new() -> Self {
        Self {
            counter: Arc::new(AtomicU32::new(1)),
        }
    }

    pub fn next(&self) -> PassengerId {
        PassengerId(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for PassengerIdGen {
    fn default() -> Self {
        Self::new()
    }
}
