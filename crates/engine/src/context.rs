// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handles shared by every passenger

use crate::bridge::BridgeAdmission;
use crate::mailbox::Mailboxes;
use ferry_core::{BridgeRequest, FerryConfig, SharedVoyageState};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Capacity of the passenger-to-sequencer request channel
pub const REQUEST_BUFFER: usize = 64;

/// Everything a passenger needs to reach the harbour, created once at startup
#[derive(Clone)]
pub struct FerryContext {
    pub config: Arc<FerryConfig>,
    pub state: SharedVoyageState,
    pub bridge: BridgeAdmission,
    pub requests: mpsc::Sender<BridgeRequest>,
    pub mailboxes: Mailboxes,
}
