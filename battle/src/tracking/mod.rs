//! Cumulative statistics across battles

mod record;

pub use record::RecordLog;
