// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator handle
//!
//! Console and signal handlers only enqueue [`ControlEvent`]s here; the
//! scheduler applies them at the top of its own loop.

use ferry_core::ControlEvent;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct OperatorHandle {
    tx: mpsc::UnboundedSender<ControlEvent>,
}

impl OperatorHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<ControlEvent>) -> Self {
        Self { tx }
    }

    /// Ask the ship to leave before the loading window ends
    pub fn early_departure(&self) -> bool {
        self.send(ControlEvent::EarlyDeparture)
    }

    /// Ask the harbour to close after the current voyage
    pub fn end_of_day(&self) -> bool {
        self.send(ControlEvent::EndOfDay)
    }

    /// Returns false once the scheduler has stopped
    pub fn send(&self, event: ControlEvent) -> bool {
        let sent = self.tx.send(event).is_ok();
        if !sent {
            tracing::debug!(%event, "scheduler gone, control event dropped");
        }
        sent
    }
}
