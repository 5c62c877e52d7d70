// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use crate::mailbox::Mailboxes;
use ferry_core::{Effect, FerryEvent};
use tokio::sync::mpsc;

/// Sender for observed events
pub type EventSender = mpsc::UnboundedSender<FerryEvent>;
/// Receiver for observed events
pub type EventReceiver = mpsc::UnboundedReceiver<FerryEvent>;

/// Carries out the effects requested by the sequencer and scheduler
pub struct Executor {
    mailboxes: Mailboxes,
    observer: Option<EventSender>,
}

impl Executor {
    pub fn new(mailboxes: Mailboxes) -> Self {
        Self {
            mailboxes,
            observer: None,
        }
    }

    /// Forward every emitted event to `observer` as well as the log
    pub fn with_observer(mut self, observer: EventSender) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn execute(&self, effect: Effect) {
        match effect {
            Effect::Reply { passenger, reply } => {
                if !self.mailboxes.deliver(passenger, reply) {
                    tracing::warn!(%passenger, ?reply, "misdelivered reply dropped");
                }
            }
            Effect::Emit(event) => self.emit(event),
        }
    }

    /// Execute effects in order
    pub fn execute_all(&self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.execute(effect);
        }
    }

    pub fn emit(&self, event: FerryEvent) {
        if event.is_violation() {
            tracing::warn!(event = event.name(), "{}", event);
        } else {
            tracing::info!(event = event.name(), voyage = ?event.voyage(), "{}", event);
        }
        if let Some(observer) = &self.observer {
            let _ = observer.send(event);
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
