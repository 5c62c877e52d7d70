//! Help and version specs

use crate::prelude::*;

#[test]
fn help_describes_the_simulation() {
    ferry()
        .args(&["--help"])
        .passes()
        .stdout_has("Ferry harbour simulation")
        .stdout_has("--config")
        .stdout_has("--trips");
}

#[test]
fn help_lists_console_commands() {
    ferry()
        .args(&["--help"])
        .passes()
        .stdout_has("w = depart now")
        .stdout_has("k = end of day");
}

#[test]
fn version_is_printed() {
    ferry().args(&["--version"]).passes().stdout_has("ferry ");
}
