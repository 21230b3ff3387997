//! Guide availability model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One guide's declared availability for one calendar date
///
/// A missing record means "unset", which is not the same as
/// `is_available == false` (an explicit day off).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub guide_id: i64,
    pub date: NaiveDate,
    pub is_available: bool,
    /// Sorted `HH:MM` start times
    pub slots: Vec<String>,
}

/// Upsert payload for a guide's own availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityUpsert {
    pub date: NaiveDate,
    pub is_available: bool,
    #[serde(default)]
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
