// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-of-day report formatting

use clap::ValueEnum;
use ferry_engine::DayReport;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct VoyageLine {
    pub voyage: u32,
    pub passengers: u32,
}

#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub voyages: Vec<VoyageLine>,
    pub voyages_completed: usize,
    pub passengers_carried: u32,
    pub stayed_ashore: usize,
    pub ended_early: bool,
}

impl From<&DayReport> for DaySummary {
    fn from(report: &DayReport) -> Self {
        Self {
            voyages: report
                .voyages
                .iter()
                .map(|v| VoyageLine {
                    voyage: v.ordinal,
                    passengers: v.passenger_count,
                })
                .collect(),
            voyages_completed: report.voyages.len(),
            passengers_carried: report.passengers_carried(),
            stayed_ashore: report.stayed_ashore(),
            ended_early: report.ended_early,
        }
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.voyages {
            writeln!(f, "voyage {}: {} passengers", line.voyage, line.passengers)?;
        }
        write!(
            f,
            "voyages completed: {}, passengers carried: {}, stayed ashore: {}",
            self.voyages_completed, self.passengers_carried, self.stayed_ashore
        )?;
        if self.ended_early {
            write!(f, " (closed early)")?;
        }
        Ok(())
    }
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}
