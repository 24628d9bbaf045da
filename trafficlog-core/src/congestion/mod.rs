mod congestion_metrics;
mod congestion_status;

pub mod congestion_ops;

pub use congestion_metrics::CongestionMetrics;
pub use congestion_ops::classify;
pub use congestion_status::CongestionStatus;
