//! Failure accumulation for best-effort conversions.
//!
//! Marshal and unmarshal never stop at a bad field. Every failure is
//! recorded together with the table row it concerns and the conversion
//! carries on; the caller gets the (possibly partial) output plus a
//! [`Report`] and decides what to do with it.

use records_types::{ErrorKind, RecordError};

/// One recorded failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// Table row the failure belongs to (row 0 is the header, so data rows start at 1)
    pub row: usize,

    /// What went wrong
    pub error: RecordError,
}

/// Ordered list of failures from one conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    failures: Vec<Failure>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a table row.
    pub fn record(&mut self, row: usize, error: RecordError) {
        self.failures.push(Failure { row, error });
    }

    /// Whether nothing failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether the report is empty (same as [`is_clean`](Self::is_clean)).
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// The first failure recorded.
    pub fn first(&self) -> Option<&Failure> {
        self.failures.first()
    }

    /// All failures in the order they were recorded.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Iterate over failures.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    /// Number of failures of one kind.
    pub fn count(&self, kind: ErrorKind) -> usize {
        self.failures
            .iter()
            .filter(|failure| failure.error.kind() == kind)
            .count()
    }

    /// Distinct table rows that had at least one failure, ascending.
    pub fn failed_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.failures.iter().map(|failure| failure.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// Collapse to a single result; the first failure wins.
    pub fn into_result(self) -> Result<(), RecordError> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(()),
        }
    }
}

impl IntoIterator for Report {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

/// Output of a conversion together with its failure report.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<T> {
    /// Everything that could be produced
    pub output: T,

    /// Failures met while producing it
    pub report: Report,
}

impl<T> Conversion<T> {
    /// Whether the conversion had no failures.
    pub fn is_clean(&self) -> bool {
        self.report.is_clean()
    }

    /// Split into output and report.
    pub fn into_parts(self) -> (T, Report) {
        (self.output, self.report)
    }

    /// The output if nothing failed, otherwise the first failure.
    pub fn into_result(self) -> Result<T, RecordError> {
        self.report.into_result().map(|()| self.output)
    }
}
