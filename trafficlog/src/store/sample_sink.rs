use trafficlog_core::sample::Sample;

use super::LogStoreError;

/// destination for samples, in the order they were taken.
pub trait SampleSink {
    /// durably appends one sample. a sample is either fully written or reported as
    /// failed; earlier samples are never modified.
    fn append(&mut self, sample: &Sample) -> Result<(), LogStoreError>;
}
