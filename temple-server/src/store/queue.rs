//! Token queue control

use shared::models::QueueStatus;

use super::{StoreError, StoreResult, TempleState};

impl TempleState {
    fn touch_queue(&mut self) -> QueueStatus {
        self.queue.last_updated = self.tick();
        self.queue.clone()
    }

    pub(super) fn call_next_token(&mut self) -> StoreResult<QueueStatus> {
        if !self.queue.is_active {
            return Err(StoreError::QueuePaused);
        }
        self.queue.current_token += 1;
        Ok(self.touch_queue())
    }

    pub(super) fn toggle_queue(&mut self) -> QueueStatus {
        self.queue.is_active = !self.queue.is_active;
        self.touch_queue()
    }

    /// Blank messages are rejected; an unchanged message is a no-op.
    pub(super) fn update_queue_message(&mut self, message: String) -> StoreResult<QueueStatus> {
        let message = message.trim();
        if message.is_empty() {
            return Err(StoreError::QueueMessageBlank);
        }
        if message == self.queue.display_message {
            return Ok(self.queue.clone());
        }
        self.queue.display_message = message.to_string();
        Ok(self.touch_queue())
    }

    pub(super) fn reset_queue(&mut self) -> QueueStatus {
        self.queue.current_token = 0;
        self.queue.is_active = true;
        self.touch_queue()
    }
}
