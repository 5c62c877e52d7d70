// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ferry configuration
//!
//! Capacities, timings and the daily trip limit. Durations are written in
//! human-readable form (`"15s"`, `"250ms"`) when loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("bridge capacity ({bridge}) must be smaller than ship capacity ({ship})")]
    BridgeNotSmallerThanShip { ship: u32, bridge: u32 },
    #[error("bridge capacity must be greater than 0")]
    EmptyBridge,
    #[error("ship capacity must be greater than 0")]
    EmptyShip,
    #[error("trip duration ({trip:?}) must be shorter than the time between trips ({between:?})")]
    TripNotShorterThanInterval { trip: Duration, between: Duration },
    #[error("trip duration must be greater than 0")]
    ZeroTripDuration,
    #[error("time between trips must be greater than 0")]
    ZeroTimeBetweenTrips,
    #[error("number of trips per day must be greater than 0")]
    NoTrips,
    #[error("minimum arrival gap ({min:?}) exceeds maximum arrival gap ({max:?})")]
    ArrivalGapInverted { min: Duration, max: Duration },
    #[error("poll interval must be greater than 0")]
    ZeroPollInterval,
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FerryConfig {
    /// Maximum passengers aboard
    pub ship_capacity: u32,
    /// Maximum passengers standing on the bridge at once
    pub bridge_capacity: u32,
    /// Length of each loading window
    #[serde(with = "humantime_serde")]
    pub time_between_trips: Duration,
    /// Time spent at sea per voyage
    #[serde(with = "humantime_serde")]
    pub trip_duration: Duration,
    /// Voyages before the day ends
    pub trips_per_day: u32,
    /// Phase-poll period for the scheduler and backoff period for passengers
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    /// One-way bridge crossing time
    #[serde(with = "humantime_serde")]
    pub crossing_time: Duration,
    /// Upper bound of random extra crossing time while boarding
    #[serde(with = "humantime_serde")]
    pub crossing_jitter: Duration,
    /// Passengers arriving at the harbour during the day
    pub passengers: u32,
    #[serde(with = "humantime_serde")]
    pub min_arrival_gap: Duration,
    #[serde(with = "humantime_serde")]
    pub max_arrival_gap: Duration,
}

impl Default for FerryConfig {
    fn default() -> Self {
        Self {
            ship_capacity: 100,
            bridge_capacity: 5,
            time_between_trips: Duration::from_secs(15),
            trip_duration: Duration::from_secs(10),
            trips_per_day: 5,
            poll_interval: Duration::from_millis(50),
            crossing_time: Duration::from_secs(1),
            crossing_jitter: Duration::ZERO,
            passengers: 100,
            min_arrival_gap: Duration::from_millis(100),
            max_arrival_gap: Duration::from_secs(2),
        }
    }
}

impl FerryConfig {
    /// Parse a configuration from TOML; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check the startup invariants.
    ///
    /// Rules are checked in a fixed order and the first violation is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ship_capacity <= self.bridge_capacity {
            return Err(ConfigError::BridgeNotSmallerThanShip {
                ship: self.ship_capacity,
                bridge: self.bridge_capacity,
            });
        }
        if self.bridge_capacity < 1 {
            return Err(ConfigError::EmptyBridge);
        }
        if self.ship_capacity < 1 {
            return Err(ConfigError::EmptyShip);
        }
        if self.time_between_trips <= self.trip_duration {
            return Err(ConfigError::TripNotShorterThanInterval {
                trip: self.trip_duration,
                between: self.time_between_trips,
            });
        }
        if self.trip_duration.is_zero() {
            return Err(ConfigError::ZeroTripDuration);
        }
        if self.time_between_trips.is_zero() {
            return Err(ConfigError::ZeroTimeBetweenTrips);
        }
        if self.trips_per_day < 1 {
            return Err(ConfigError::NoTrips);
        }
        if self.min_arrival_gap > self.max_arrival_gap {
            return Err(ConfigError::ArrivalGapInverted {
                min: self.min_arrival_gap,
                max: self.max_arrival_gap,
            });
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
