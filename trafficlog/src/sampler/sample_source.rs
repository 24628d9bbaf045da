use chrono::NaiveDateTime;
use trafficlog_core::sample::{assemble, RawRound, Sample};

/// produces the measurements of one sampling round.
///
/// collecting never fails: whatever could not be measured is absent from the
/// [`RawRound`], so the scheduler receives exactly one sample per tick.
pub trait SampleSource {
    fn collect_round(&mut self) -> RawRound;

    /// collects a round and assembles it into the sample captured at `captured_at`.
    fn sample(&mut self, captured_at: NaiveDateTime) -> Sample {
        let raw = self.collect_round();
        for error in raw.errors.iter() {
            log::warn!("degraded round at {captured_at}: {error}");
        }
        assemble(&raw, captured_at)
    }
}

impl<T: SampleSource + ?Sized> SampleSource for Box<T> {
    fn collect_round(&mut self) -> RawRound {
        (**self).collect_round()
    }
}
