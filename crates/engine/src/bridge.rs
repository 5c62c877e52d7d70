// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge admission
//!
//! Counting gate on physical presence on the bridge. A slot is held for as
//! long as a passenger stands on the bridge and is released when the
//! [`BridgeSlot`] drops, on every exit path.

use crate::error::EngineError;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Clone)]
pub struct BridgeAdmission {
    slots: Arc<Semaphore>,
}

/// One occupied place on the bridge
#[derive(Debug)]
pub struct BridgeSlot {
    _permit: OwnedSemaphorePermit,
}

impl BridgeAdmission {
    pub fn new(capacity: u32) -> Result<Self, EngineError> {
        let permits = usize::try_from(capacity)
            .ok()
            .filter(|permits| *permits <= Semaphore::MAX_PERMITS)
            .ok_or_else(|| {
                EngineError::Startup(format!("bridge capacity {} is too large", capacity))
            })?;
        Ok(Self {
            slots: Arc::new(Semaphore::new(permits)),
        })
    }

    /// Wait for a free slot
    pub async fn acquire(&self) -> Result<BridgeSlot, EngineError> {
        let permit = Arc::clone(&self.slots)
            .acquire_owned()
            .await
            .map_err(|_| EngineError::BridgeClosed)?;
        Ok(BridgeSlot { _permit: permit })
    }

    /// Slots currently free
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }
}
