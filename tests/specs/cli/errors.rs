//! Startup error specs
//!
//! Invalid configurations stop the harbour before anything is spawned.

use crate::prelude::*;

#[test]
fn bridge_as_large_as_ship_is_rejected() {
    let harbour = Harbour::with_config("ship_capacity = 5\nbridge_capacity = 5\n");
    harbour
        .ferry()
        .fails()
        .stderr_has("bridge capacity (5) must be smaller than ship capacity (5)")
        .stderr_has("suggestions:");
}

#[test]
fn trip_longer_than_interval_is_rejected() {
    let harbour = Harbour::with_config("time_between_trips = \"5s\"\ntrip_duration = \"10s\"\n");
    harbour
        .ferry()
        .fails()
        .stderr_has("must be shorter than the time between trips");
}

#[test]
fn zero_trips_from_the_command_line_is_rejected() {
    let harbour = Harbour::quick();
    harbour
        .ferry()
        .args(&["--trips", "0"])
        .fails()
        .stderr_has("number of trips per day must be greater than 0");
}

#[test]
fn unknown_keys_are_rejected() {
    let harbour = Harbour::with_config("ship_size = 10\n");
    harbour.ferry().fails().stderr_has("unknown field");
}

#[test]
fn missing_config_file_is_reported() {
    ferry()
        .args(&["--config", "/nonexistent/ferry.toml"])
        .fails()
        .stderr_has("failed to read config");
}
