//! Full-day specs
//!
//! Run a short day end to end and check the report.

use crate::prelude::*;

#[test]
fn five_passengers_fill_two_voyages() {
    Harbour::quick()
        .ferry()
        .passes()
        .stdout_has("voyage 1: 3 passengers")
        .stdout_has("voyage 2: 2 passengers")
        .stdout_has("voyages completed: 2, passengers carried: 5, stayed ashore: 0")
        .stdout_lacks("closed early");
}

#[test]
fn single_trip_leaves_the_rest_ashore() {
    Harbour::quick()
        .ferry()
        .args(&["--trips", "1"])
        .passes()
        .stdout_has("voyage 1: 3 passengers")
        .stdout_lacks("voyage 2")
        .stdout_has("stayed ashore: 2");
}

#[test]
fn empty_harbour_still_sails_its_schedule() {
    Harbour::quick()
        .ferry()
        .args(&["--passengers", "0"])
        .passes()
        .stdout_has("voyage 1: 0 passengers")
        .stdout_has("voyage 2: 0 passengers")
        .stdout_has("passengers carried: 0");
}

#[test]
fn json_report() {
    let run = Harbour::quick().ferry().args(&["--format", "json"]).passes();
    run.stdout_has("\"voyages_completed\": 2")
        .stdout_has("\"passengers_carried\": 5")
        .stdout_has("\"ended_early\": false");
}
