/// All entity primary keys are 64-bit integers assigned by the persistence
/// layer. A record without an id has not been persisted yet.
pub type DbId = i64;

/// All audit timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
