// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Private reply routes, one per passenger

use ferry_core::{BridgeReply, PassengerId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

type ReplySender = mpsc::UnboundedSender<BridgeReply>;

/// Routes sequencer replies to the passenger they are addressed to
#[derive(Clone, Default)]
pub struct Mailboxes {
    routes: Arc<RwLock<HashMap<PassengerId, ReplySender>>>,
}

/// A passenger's private inbox; unregisters itself on drop
pub struct Mailbox {
    passenger: PassengerId,
    rx: mpsc::UnboundedReceiver<BridgeReply>,
    routes: Mailboxes,
}

impl Mailboxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an inbox for `passenger`, replacing any previous one
    pub fn register(&self, passenger: PassengerId) -> Mailbox {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut routes = self.routes.write().unwrap_or_else(|e| e.into_inner());
        routes.insert(passenger, tx);
        Mailbox {
            passenger,
            rx,
            routes: self.clone(),
        }
    }

    /// Deliver a reply. Returns false when nobody is registered under that id.
    pub fn deliver(&self, passenger: PassengerId, reply: BridgeReply) -> bool {
        let routes = self.routes.read().unwrap_or_else(|e| e.into_inner());
        routes
            .get(&passenger)
            .is_some_and(|tx| tx.send(reply).is_ok())
    }

    pub fn registered_count(&self) -> usize {
        self.routes.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn unregister(&self, passenger: PassengerId) {
        let mut routes = self.routes.write().unwrap_or_else(|e| e.into_inner());
        routes.remove(&passenger);
    }
}

impl Mailbox {
    pub fn passenger(&self) -> PassengerId {
        self.passenger
    }

    /// Wait for the next reply addressed to this passenger
    pub async fn recv(&mut self) -> Option<BridgeReply> {
        self.rx.recv().await
    }
}

impl Drop for Mailbox {
    fn drop(&mut self) {
        self.routes.unregister(self.passenger);
    }
}

#[cfg(test)]
#[path = "mailbox_tests.rs"]
mod tests;
