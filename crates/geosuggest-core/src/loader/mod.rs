// crates/geosuggest-core/src/loader/mod.rs

//! # Data Loader
//!
//! Builds a [`PlaceIndex`] from the tab-delimited cities source. Handles the
//! physical layer (file, optional gzip) and delegates line parsing to
//! [`tsv`].
//!
//! Malformed lines are skipped and counted; only an unreadable source
//! fails the build, and that failure is returned to the caller.

mod common_io;
pub mod config;
pub mod tsv;

pub use common_io::is_gzip;
pub use config::{IngestConfig, CANADA_REGION_CODES};
pub use tsv::{parse_line, ParsedLine, SkipReason};

use crate::error::Result;
use crate::index::PlaceIndex;
use std::io::BufRead;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default source file name, resolved against the working directory.
pub const DEFAULT_SOURCE: &str = "cities_canada-usa.tsv";

/// Counters collected while building an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines read, header included.
    pub lines: usize,
    pub inserted: usize,
    pub too_few_fields: usize,
    pub unmapped_region: usize,
    pub bad_id: usize,
    /// Unrecognized characters met while indexing names.
    pub unrecognized_chars: usize,
    pub elapsed: Duration,
}

impl LoadReport {
    pub fn skipped(&self) -> usize {
        self.too_few_fields + self.unmapped_region + self.bad_id
    }

    fn record_skip(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::TooFewFields(_) => self.too_few_fields += 1,
            SkipReason::UnmappedRegion(_) => self.unmapped_region += 1,
            SkipReason::BadId(_) => self.bad_id += 1,
        }
    }
}

impl PlaceIndex {
    /// Builds an index from the source at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeoSuggestError::NotFound`] when the file cannot be
    /// opened and [`crate::GeoSuggestError::Io`] when reading it fails
    /// midway. Never exits the process.
    ///
    /// ```rust
    /// use geosuggest_core::{IngestConfig, PlaceIndex};
    ///
    /// let built = PlaceIndex::load_from_path("does/not/exist.tsv", &IngestConfig::default());
    /// assert!(built.is_err());
    /// ```
    pub fn load_from_path(
        path: impl AsRef<Path>,
        cfg: &IngestConfig,
    ) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let (index, report) = Self::load_from_reader(reader, cfg)?;
        info!(
            path = %path.display(),
            places = index.len(),
            inserted = report.inserted,
            skipped = report.skipped(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "index built"
        );
        Ok((index, report))
    }

    /// Builds an index from any buffered reader of source lines.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily.
    pub fn load_from_reader<R: BufRead>(
        mut reader: R,
        cfg: &IngestConfig,
    ) -> Result<(Self, LoadReport)> {
        let timer = Instant::now();
        let mut index = PlaceIndex::with_alphabet(cfg.alphabet.clone());
        let mut report = LoadReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line_no = report.lines;
            report.lines += 1;
            if line_no == 0 && cfg.has_header {
                continue;
            }

            let line = String::from_utf8_lossy(&buf);
            match tsv::parse_line(&line, cfg) {
                Ok(parsed) => {
                    let insertion = index.add(parsed.place, &parsed.indexed_name);
                    report.unrecognized_chars += insertion.unrecognized.len();
                    report.inserted += 1;
                }
                Err(reason) => {
                    match &reason {
                        SkipReason::UnmappedRegion(code) => {
                            warn!(line = line_no, code = %code, "failed region code lookup")
                        }
                        other => debug!(line = line_no, reason = ?other, "skipping line"),
                    }
                    report.record_skip(&reason);
                }
            }
        }

        report.elapsed = timer.elapsed();
        Ok((index, report))
    }
}
