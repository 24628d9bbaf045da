mod csv_log_store;
mod log_store_error;
mod sample_sink;

pub use csv_log_store::CsvLogStore;
pub use log_store_error::LogStoreError;
pub use sample_sink::SampleSink;
