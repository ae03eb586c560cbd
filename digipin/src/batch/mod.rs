//! Per-record batch encoding and decoding.
//!
//! Bulk callers encode one record at a time and must never abort a batch on
//! a bad record: a missing or out-of-range coordinate yields no code and
//! processing continues. Records are independent, so work is spread over a
//! rayon pool; output order always matches input order.
//!
//! ```
//! use digipin::batch::{BatchEncoder, Point};
//! use digipin::log::NoOpLogger;
//! use std::sync::Arc;
//!
//! let encoder = BatchEncoder::new(Arc::new(NoOpLogger));
//! let result = encoder.encode_all(&[
//!     Point::new(28.622788, 77.213033),
//!     Point::missing(),
//!     Point::new(51.5, -0.12),
//! ])?;
//!
//! assert_eq!(result.summary.encoded, 1);
//! assert_eq!(result.codes()[0].unwrap().to_string(), "39J-49L-L8T4");
//! assert!(result.codes()[1].is_none());
//! # Ok::<(), digipin::batch::BatchError>(())
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;

use crate::codec::{self, Centroid, Code, FormatError, RangeError};
use crate::log::Logger;
use crate::{log_debug, log_info};

/// Batch execution errors.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The dedicated worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// One input record's coordinates; either may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    /// A record with no coordinates.
    pub fn missing() -> Self {
        Self::default()
    }
}

/// What happened to a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordOutcome {
    Encoded(Code),
    /// Latitude or longitude was absent
    Missing,
    OutOfRange(RangeError),
}

impl RecordOutcome {
    /// The code, if the record was encoded.
    pub fn code(&self) -> Option<Code> {
        match self {
            RecordOutcome::Encoded(code) => Some(*code),
            _ => None,
        }
    }
}

/// Encodes one record, substituting an outcome for any failure.
pub fn encode_one(point: Point) -> RecordOutcome {
    match (point.lat, point.lon) {
        (Some(lat), Some(lon)) => match codec::encode(lat, lon) {
            Ok(code) => RecordOutcome::Encoded(code),
            Err(e) => RecordOutcome::OutOfRange(e),
        },
        _ => RecordOutcome::Missing,
    }
}

/// Record counts for a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub encoded: usize,
    pub missing: usize,
    pub out_of_range: usize,
}

impl BatchSummary {
    fn from_outcomes(outcomes: &[RecordOutcome]) -> Self {
        outcomes.iter().fold(
            BatchSummary {
                total: outcomes.len(),
                ..Default::default()
            },
            |mut summary, outcome| {
                match outcome {
                    RecordOutcome::Encoded(_) => summary.encoded += 1,
                    RecordOutcome::Missing => summary.missing += 1,
                    RecordOutcome::OutOfRange(_) => summary.out_of_range += 1,
                }
                summary
            },
        )
    }

    /// Records that produced no code.
    pub fn skipped(&self) -> usize {
        self.missing + self.out_of_range
    }
}

/// Outcomes in input order plus their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub outcomes: Vec<RecordOutcome>,
    pub summary: BatchSummary,
}

impl BatchResult {
    /// One entry per record, `None` where no code was produced.
    pub fn codes(&self) -> Vec<Option<Code>> {
        self.outcomes.iter().map(RecordOutcome::code).collect()
    }
}

/// Runs encode/decode over many records in parallel.
pub struct BatchEncoder {
    logger: Arc<dyn Logger>,
    threads: usize,
}

impl BatchEncoder {
    /// Creates an encoder on rayon's global pool.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger, threads: 0 }
    }

    /// Use a dedicated pool with `threads` workers (0 = global pool).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Encodes every point. Bad records never fail the batch.
    ///
    /// # Errors
    ///
    /// Only fails if a dedicated worker pool cannot be created.
    pub fn encode_all(&self, points: &[Point]) -> Result<BatchResult, BatchError> {
        let outcomes: Vec<RecordOutcome> =
            self.install(|| points.par_iter().map(|&p| encode_one(p)).collect())?;

        for (index, outcome) in outcomes.iter().enumerate() {
            match outcome {
                RecordOutcome::Missing => {
                    log_debug!(self.logger, "record {}: missing coordinates", index)
                }
                RecordOutcome::OutOfRange(e) => log_debug!(self.logger, "record {}: {}", index, e),
                RecordOutcome::Encoded(_) => {}
            }
        }

        let summary = BatchSummary::from_outcomes(&outcomes);
        log_info!(
            self.logger,
            "Encoded {} of {} records ({} missing, {} out of range)",
            summary.encoded,
            summary.total,
            summary.missing,
            summary.out_of_range
        );

        Ok(BatchResult { outcomes, summary })
    }

    /// Decodes every code, keeping per-record failures.
    pub fn decode_all<S>(
        &self,
        codes: &[S],
    ) -> Result<Vec<Result<Centroid, FormatError>>, BatchError>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<Result<Centroid, FormatError>> =
            self.install(|| codes.par_iter().map(|c| codec::decode(c.as_ref())).collect())?;

        let mut failed = 0;
        for (index, result) in results.iter().enumerate() {
            if let Err(e) = result {
                failed += 1;
                log_debug!(self.logger, "record {}: {}", index, e);
            }
        }
        log_info!(
            self.logger,
            "Decoded {} of {} codes",
            results.len() - failed,
            results.len()
        );

        Ok(results)
    }

    fn install<T, F>(&self, op: F) -> Result<T, BatchError>
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        if self.threads == 0 {
            return Ok(op());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()?;
        Ok(pool.install(op))
    }
}
