pub mod series;
pub mod timestamp;

pub use series::CommitTimes;
pub use timestamp::{parse_commit_time, TimestampError};
