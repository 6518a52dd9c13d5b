//! QR scan and manual check-in

use shared::models::{ScannedTicket, TicketRecord, TicketStatus};

use super::{StoreError, StoreResult, TempleState};

impl TempleState {
    /// Look up a QR payload and append the scan to the history.
    ///
    /// Every scan gets its own id and a strictly later timestamp, so scanning
    /// the same ticket twice leaves two entries.
    pub(super) fn scan_ticket(&mut self, qr_payload: &str) -> StoreResult<ScannedTicket> {
        let ticket = self
            .tickets
            .get(qr_payload.trim())
            .cloned()
            .ok_or_else(|| StoreError::TicketNotFound(qr_payload.to_string()))?;

        let scanned = ScannedTicket {
            scan_id: uuid::Uuid::new_v4().to_string(),
            ticket,
            scanned_at: self.tick(),
        };
        self.scan_history.push(scanned.clone());
        Ok(scanned)
    }

    /// Move a ticket from active to used, together with its scan entries
    pub(super) fn check_in(&mut self, booking_id: &str) -> StoreResult<TicketRecord> {
        let record = self
            .tickets
            .values_mut()
            .find(|t| t.booking_id == booking_id)
            .ok_or_else(|| StoreError::TicketNotFound(booking_id.to_string()))?;

        match record.status {
            TicketStatus::Active => {}
            TicketStatus::Used => return Err(StoreError::TicketAlreadyUsed(booking_id.to_string())),
            TicketStatus::Cancelled => {
                return Err(StoreError::TicketCancelled(booking_id.to_string()));
            }
        }
        record.status = TicketStatus::Used;
        let record = record.clone();

        for scan in self
            .scan_history
            .iter_mut()
            .filter(|s| s.ticket.booking_id == booking_id)
        {
            scan.ticket.status = TicketStatus::Used;
        }
        Ok(record)
    }
}
