//! adapter for the plain-text route report printed by the single-shot route tool.
mod parse_error;
mod report_parser;
mod route_report;

pub use parse_error::ParseError;
pub use report_parser::{parse_report, ReportParser};
pub use route_report::RouteReport;
