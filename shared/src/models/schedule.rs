//! Daily temple schedule

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: EntityId,
    pub time: String,
    pub event: String,
}

/// Create / replace schedule entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntryInput {
    pub time: String,
    pub event: String,
}

/// Default daily schedule, in display order
pub fn default_schedule() -> Vec<ScheduleEntryInput> {
    [
        ("04:30 AM", "Mangala Aarti"),
        ("07:00 AM", "Shringar Aarti"),
        ("08:00 AM - 11:00 AM", "Darshan"),
        ("12:00 PM", "Rajbhog Aarti"),
        ("01:00 PM - 04:00 PM", "Temple Closed"),
        ("04:00 PM - 06:00 PM", "Darshan"),
        ("07:00 PM", "Sandhya Aarti"),
        ("08:30 PM", "Shayan Aarti"),
        ("09:00 PM", "Temple Closed"),
    ]
    .into_iter()
    .map(|(time, event)| ScheduleEntryInput {
        time: time.to_string(),
        event: event.to_string(),
    })
    .collect()
}
