// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator console
//!
//! Reads single-letter commands from a line-oriented input and turns them
//! into control events. It never touches harbour state directly.

use ferry_core::ControlEvent;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `w`: leave before the loading window ends
    EarlyDeparture,
    /// `k`: close the harbour after the current voyage
    EndOfDay,
    /// `q`: stop reading without signalling anything
    Quit,
    Unknown(String),
}

/// Why the console stopped reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    EndOfDay,
    Quit,
    Eof,
    /// The harbour is already closed
    Disconnected,
}

/// Parse one input line; blank lines are ignored
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "" => None,
        "w" => Some(Command::EarlyDeparture),
        "k" => Some(Command::EndOfDay),
        "q" => Some(Command::Quit),
        other => Some(Command::Unknown(other.to_string())),
    }
}

/// Read commands until end of day, quit, or end of input. `send` returns
/// false once nobody is listening.
pub fn run<R: BufRead>(input: R, mut send: impl FnMut(ControlEvent) -> bool) -> Stop {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        match command {
            Command::EarlyDeparture => {
                if !send(ControlEvent::EarlyDeparture) {
                    return Stop::Disconnected;
                }
            }
            Command::EndOfDay => {
                return if send(ControlEvent::EndOfDay) {
                    Stop::EndOfDay
                } else {
                    Stop::Disconnected
                };
            }
            Command::Quit => return Stop::Quit,
            Command::Unknown(other) => {
                eprintln!("unknown command: {} (w = depart now, k = end of day, q = quit)", other);
            }
        }
    }
    Stop::Eof
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
