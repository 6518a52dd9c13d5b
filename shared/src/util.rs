use chrono::Datelike;
use rand::Rng;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date in the `YYYY-MM-DD` form used by slot dates
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Generate an e-token booking id: `TMP-<year>-<6 digits>`.
///
/// The six digits are random, so callers that need uniqueness must retry
/// on collision (the store does).
pub fn booking_id() -> String {
    let year = chrono::Local::now().year();
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("TMP-{}-{:06}", year, n)
}

/// QR payload printed on an e-token for the given booking id
pub fn qr_payload(booking_id: &str) -> String {
    format!("{}-VERIFIED", booking_id)
}
