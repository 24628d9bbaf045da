mod raw_round;
mod sample_record;

pub mod sample_ops;
pub mod timestamp_codec;

pub use raw_round::RawRound;
pub use sample_ops::assemble;
pub use sample_record::Sample;
