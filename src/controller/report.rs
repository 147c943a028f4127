//! Per-episode reporting sinks

use std::io::Write;

use super::{EpisodeRecord, RunSummary};
use crate::error::Result;

pub trait Reporter {
    fn episode(&mut self, record: &EpisodeRecord) -> Result<()>;

    fn summary(&mut self, _summary: &RunSummary) -> Result<()> {
        Ok(())
    }
}

/// Collects records in memory
impl Reporter for Vec<EpisodeRecord> {
    fn episode(&mut self, record: &EpisodeRecord) -> Result<()> {
        self.push(*record);
        Ok(())
    }
}

/// `cum_score,score,time,bricks` rows
pub struct CsvReporter<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for CsvReporter<W> {
    fn episode(&mut self, record: &EpisodeRecord) -> Result<()> {
        if !self.header_written {
            writeln!(self.out, "cum_score,score,time,bricks")?;
            self.header_written = true;
        }
        writeln!(
            self.out,
            "{},{},{},{}",
            record.cumulative_score, record.score, record.ticks, record.bricks_remaining
        )?;
        Ok(())
    }

    fn summary(&mut self, _summary: &RunSummary) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Reports through the `log` facade
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn episode(&mut self, record: &EpisodeRecord) -> Result<()> {
        log::info!(
            "score {} | frames {} | bricks {}",
            record.score,
            record.ticks,
            record.bricks_remaining
        );
        Ok(())
    }

    fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        log::info!(
            "Games: {} | mean score: {:.2} | mean time: {:.2}",
            summary.games,
            summary.mean_score(),
            summary.mean_ticks()
        );
        Ok(())
    }
}
