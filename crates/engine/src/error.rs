// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use ferry_core::{ConfigError, PassengerId};
use thiserror::Error;

/// Errors that can occur while running the simulation
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("startup failed: {0}")]
    Startup(String),
    #[error("bridge admission closed")]
    BridgeClosed,
    #[error("scheduler stopped accepting requests from {0}")]
    SchedulerGone(PassengerId),
    #[error("mailbox of {0} closed while awaiting a reply")]
    MailboxClosed(PassengerId),
    #[error("task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
