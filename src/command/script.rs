//! Line-by-line script execution
//!
//! A failing line never stops the run: it is reported on the diagnostic
//! stream and processing continues with the next line. Only I/O errors on
//! the script or the output abort.

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::command::executor::Simulation;
use crate::command::parser::parse_line;
use crate::core::error::Result;
use crate::infection::stats::InfectionStats;

/// How stats lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Seven space-separated integers
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Counts for one script run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub lines: usize,
    pub commands: usize,
    pub failed: usize,
    pub stats_lines: usize,
}

pub struct ScriptRunner<'a> {
    simulation: &'a mut Simulation,
    format: OutputFormat,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(simulation: &'a mut Simulation, format: OutputFormat) -> Self {
        Self { simulation, format }
    }

    /// Execute every line of `script`, writing stats lines to `out`
    pub fn run<R: BufRead, W: Write>(&mut self, mut script: R, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if script.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines += 1;
            let line = String::from_utf8_lossy(&buf);

            match parse_line(&line).and_then(|command| match command {
                Some(command) => self.simulation.execute(command).map(|stats| (true, stats)),
                None => Ok((false, None)),
            }) {
                Ok((executed, stats)) => {
                    if executed {
                        summary.commands += 1;
                    }
                    if let Some(stats) = stats {
                        self.write_stats(out, &stats)?;
                        summary.stats_lines += 1;
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!("Skipping line {}: {} [{}]", summary.lines, e, line.trim());
                }
            }
        }

        out.flush()?;
        tracing::info!(
            "Script complete: {} lines, {} commands, {} failed",
            summary.lines,
            summary.commands,
            summary.failed
        );
        Ok(summary)
    }

    fn write_stats<W: Write>(&self, out: &mut W, stats: &InfectionStats) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", stats)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, stats)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
