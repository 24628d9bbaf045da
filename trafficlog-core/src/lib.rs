//! data model and pure logic for scheduled congestion sampling between two points.
//!
//! a round of sampling measures the same route twice, once with live traffic and
//! once without. the [`congestion`] module derives the congestion metric from the two
//! durations and the [`sample`] module assembles the record that gets logged.
pub mod congestion;
pub mod model;
pub mod sample;
