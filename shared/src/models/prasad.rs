//! Prasad distribution and bhandara timings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrasadTimings {
    pub morning: String,
    pub evening: String,
    pub bhandara_day: String,
    pub bhandara_time: String,
}

impl Default for PrasadTimings {
    fn default() -> Self {
        Self {
            morning: "08:00 AM - 01:00 PM".to_string(),
            evening: "05:00 PM - 09:00 PM".to_string(),
            bhandara_day: "Every Sunday".to_string(),
            bhandara_time: "12:00 PM - 03:00 PM".to_string(),
        }
    }
}
