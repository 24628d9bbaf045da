use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use trafficlog_core::sample::Sample;

use super::{LogStoreError, SampleSink};

/// append-only CSV sample log.
///
/// the header row is written once, when the file does not exist yet or is empty.
/// each append opens the file, writes one row and flushes before returning, so a
/// crash between rounds loses nothing already logged.
#[derive(Debug, Clone)]
pub struct CsvLogStore {
    path: PathBuf,
}

impl CsvLogStore {
    pub fn new<P: AsRef<Path>>(path: P) -> CsvLogStore {
        CsvLogStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    fn needs_header(&self) -> bool {
        match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }

    /// reads every sample in the log, in file order.
    pub fn read_all(&self) -> Result<Vec<Sample>, LogStoreError> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| LogStoreError::ReadError {
                path: self.path_string(),
                source: e,
            })?;
        reader
            .deserialize::<Sample>()
            .map(|row| {
                row.map_err(|e| LogStoreError::ReadError {
                    path: self.path_string(),
                    source: e,
                })
            })
            .collect()
    }
}

impl SampleSink for CsvLogStore {
    fn append(&mut self, sample: &Sample) -> Result<(), LogStoreError> {
        let write_header = self.needs_header();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LogStoreError::OpenError {
                path: self.path_string(),
                source: e,
            })?;
        if write_header {
            log::info!("creating sample log {}", self.path.display());
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer
            .serialize(sample)
            .map_err(|e| LogStoreError::WriteError {
                path: self.path_string(),
                source: e,
            })?;
        writer.flush().map_err(|e| LogStoreError::FlushError {
            path: self.path_string(),
            source: e,
        })?;
        log::debug!("appended sample {} to {}", sample.timestamp(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::CsvLogStore;
    use crate::store::{LogStoreError, SampleSink};
    use chrono::{NaiveDate, NaiveDateTime};
    use trafficlog_core::{
        model::{Coordinate, RouteMeasurement},
        sample::{assemble, RawRound, Sample},
    };

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 3)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid test time")
    }

    fn full_sample(captured_at: NaiveDateTime) -> Sample {
        let raw = RawRound {
            traffic_aware: Some(RouteMeasurement::new(900).with_endpoints(
                Some(Coordinate::new(25.0478, 121.517)),
                Some(Coordinate::new(25.0336, 121.5646)),
            )),
            traffic_unaware: Some(RouteMeasurement::new(700)),
            errors: vec![],
        };
        assemble(&raw, captured_at)
    }

    #[test]
    fn test_first_append_writes_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("route_log.csv");
        let mut store = CsvLogStore::new(&path);
        store.append(&full_sample(at(17, 0))).expect("should append");

        let text = std::fs::read_to_string(&path).expect("should read");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], Sample::COLUMNS.join(","));
        assert_eq!(
            lines[1],
            "2025-06-03 17:00:00,\"25.0478,121.517\",\"25.0336,121.5646\",15.0,11.67,MODERATE,200,28.57"
        );
    }

    #[test]
    fn test_appends_keep_order_and_single_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("route_log.csv");
        let mut store = CsvLogStore::new(&path);
        let first = full_sample(at(17, 0));
        let second = Sample::empty(at(17, 5));
        store.append(&first).expect("should append");
        store.append(&second).expect("should append");

        // a second store over the same file continues it
        let mut reopened = CsvLogStore::new(&path);
        let third = full_sample(at(17, 10));
        reopened.append(&third).expect("should append");

        let text = std::fs::read_to_string(&path).expect("should read");
        assert_eq!(text.matches("timestamp,").count(), 1);
        let rows = store.read_all().expect("should read back");
        assert_eq!(rows, vec![first, second, third]);
    }

    #[test]
    fn test_empty_existing_file_gets_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("route_log.csv");
        std::fs::write(&path, "").expect("should create");
        let mut store = CsvLogStore::new(&path);
        store.append(&Sample::empty(at(8, 0))).expect("should append");
        let text = std::fs::read_to_string(&path).expect("should read");
        assert!(text.starts_with("timestamp,start_point,"));
        assert_eq!(text.lines().nth(1), Some("2025-06-03 08:00:00,,,,,,,"));
    }

    #[test]
    fn test_unwritable_location() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("route_log.csv");
        let mut store = CsvLogStore::new(&path);
        let result = store.append(&Sample::empty(at(8, 0)));
        assert!(matches!(result, Err(LogStoreError::OpenError { .. })));
    }
}
