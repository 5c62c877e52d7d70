// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use ferry_core::ConfigError;
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct FerryError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FerryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The harbour refused to open with this configuration
    pub fn invalid_config(error: ConfigError) -> Self {
        let base = FerryError::new("cannot open the harbour").with_context(error.to_string());
        let base = match &error {
            ConfigError::Io { path, .. } => {
                base.with_suggestion(format!("check that {} exists", path))
            }
            ConfigError::Parse(_) => base
                .with_suggestion("durations are written like \"15s\" or \"250ms\"")
                .with_suggestion("unknown keys are rejected"),
            ConfigError::BridgeNotSmallerThanShip { .. }
            | ConfigError::EmptyBridge
            | ConfigError::EmptyShip => {
                base.with_suggestion("use 1 <= bridge_capacity < ship_capacity")
            }
            ConfigError::TripNotShorterThanInterval { .. }
            | ConfigError::ZeroTripDuration
            | ConfigError::ZeroTimeBetweenTrips => {
                base.with_suggestion("use 0 < trip_duration < time_between_trips")
            }
            ConfigError::NoTrips => base.with_suggestion("schedule at least one trip per day"),
            ConfigError::ArrivalGapInverted { .. } => {
                base.with_suggestion("min_arrival_gap must not exceed max_arrival_gap")
            }
            ConfigError::ZeroPollInterval => base.with_suggestion("use a poll_interval above 0"),
        };
        base.with_source(error)
    }
}

impl fmt::Display for FerryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for FerryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
