//! Queue display model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Live queue state shown on the token display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatus {
    pub current_token: u32,
    pub display_message: String,
    pub is_active: bool,
    pub last_updated: Timestamp,
}

/// Estimated wait in minutes: queue length times average processing time.
pub fn estimated_wait_time(queue_length: u32, average_processing_time: u32) -> u64 {
    queue_length as u64 * average_processing_time as u64
}

/// Queue query parameters; missing values fall back to server defaults
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueQuery {
    pub queue_length: Option<u32>,
    pub average_processing_time: Option<u32>,
}

/// Queue state plus the externally supplied figures and derived wait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueView {
    #[serde(flatten)]
    pub status: QueueStatus,
    pub queue_length: u32,
    pub average_processing_time: u32,
    pub estimated_wait_time: u64,
}

impl QueueView {
    pub fn new(status: QueueStatus, queue_length: u32, average_processing_time: u32) -> Self {
        Self {
            status,
            queue_length,
            average_processing_time,
            estimated_wait_time: estimated_wait_time(queue_length, average_processing_time),
        }
    }
}

/// Display message update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueMessageUpdate {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_wait_is_exact_product() {
        assert_eq!(estimated_wait_time(34, 2), 68);
        assert_eq!(estimated_wait_time(0, 5), 0);
        assert_eq!(estimated_wait_time(u32::MAX, 2), u32::MAX as u64 * 2);
    }

    #[test]
    fn test_queue_view_serialization() {
        let view = QueueView::new(
            QueueStatus {
                current_token: 247,
                display_message: "Welcome".to_string(),
                is_active: true,
                last_updated: 0,
            },
            34,
            2,
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["currentToken"], 247);
        assert_eq!(json["estimatedWaitTime"], 68);
        assert_eq!(json["isActive"], true);
    }
}
