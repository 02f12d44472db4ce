//! Job statistics value object

use serde::{Deserialize, Serialize};

/// Summary of a finished job, handed to completion hooks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatistics {
    /// Job start time (milliseconds since the Unix epoch)
    pub start_time_stamp: i64,
    /// Job end time (milliseconds since the Unix epoch)
    pub end_time_stamp: i64,
    /// Total wall-clock cost in milliseconds
    pub total_costs: i64,
    /// Average throughput in bytes per second
    pub byte_speed_per_second: i64,
    /// Average throughput in records per second
    pub record_speed_per_second: i64,
    /// Records read from the reader
    pub total_read_records: i64,
    /// Records that failed to transfer
    pub total_error_records: i64,
}

impl JobStatistics {
    /// Statistics for a job that ran between two timestamps
    pub fn new(start_time_stamp: i64, end_time_stamp: i64) -> Self {
        Self {
            start_time_stamp,
            end_time_stamp,
            total_costs: end_time_stamp.saturating_sub(start_time_stamp),
            ..Self::default()
        }
    }

    /// Set throughput figures
    pub fn with_speed(mut self, byte_speed_per_second: i64, record_speed_per_second: i64) -> Self {
        self.byte_speed_per_second = byte_speed_per_second;
        self.record_speed_per_second = record_speed_per_second;
        self
    }

    /// Set record counters
    pub fn with_records(mut self, total_read_records: i64, total_error_records: i64) -> Self {
        self.total_read_records = total_read_records;
        self.total_error_records = total_error_records;
        self
    }

    /// Whether any record failed
    pub fn has_errors(&self) -> bool {
        self.total_error_records > 0
    }
}
