//! Operator console specs

use crate::prelude::*;

#[test]
fn end_of_day_before_the_first_voyage() {
    Harbour::quick()
        .ferry()
        .stdin("k\n")
        .passes()
        .stdout_has("voyages completed: 0")
        .stdout_has("(closed early)")
        .stdout_lacks("voyage 1:");
}

#[test]
fn quit_closes_the_console_but_not_the_harbour() {
    Harbour::quick()
        .ferry()
        .stdin("q\nk\n")
        .passes()
        .stdout_has("voyages completed: 2")
        .stdout_lacks("closed early");
}

#[test]
fn unknown_command_is_reported() {
    Harbour::quick()
        .ferry()
        .stdin("z\n")
        .passes()
        .stderr_has("unknown command: z")
        .stdout_has("voyages completed: 2");
}

#[test]
fn early_departure_sails_before_the_window_ends() {
    // A window long enough that a timer-only day would hit the test timeout
    let harbour = Harbour::with_config(
        r#"
ship_capacity = 3
bridge_capacity = 1
time_between_trips = "1h"
trip_duration = "100ms"
trips_per_day = 1
poll_interval = "5ms"
crossing_time = "10ms"
passengers = 0
"#,
    );
    harbour
        .ferry()
        .stdin("w\n")
        .passes()
        .stdout_has("voyage 1: 0 passengers")
        .stdout_has("voyages completed: 1");
}
