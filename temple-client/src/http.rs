//! HTTP client for the temple REST API
//!
//! Every call is a single JSON round trip. Non-2xx answers and non-JSON
//! bodies are both failures carrying the raw body; nothing is retried.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::models::{
    AlertSummary, BookingEntry, BookingForm, ChatRequest, ChatResponse, DashboardStats, Donation,
    DonationAnalytics, DonationCreate, ETokenBooking, LocationData, PanditAssignment,
    ParkingOccupancyUpdate, ParkingPricing, ParkingStatus, PrasadTimings, PujaBooking,
    PujaBookingCreate, QueueMessageUpdate, QueueQuery, QueueStatus, QueueView, ScanRequest,
    ScannedTicket, ScheduleEntry, ScheduleEntryInput, SlotCreate, SlotView, SosAlert, SosCreate,
    TicketRecord, TimeSlot, Volunteer, VolunteerCreate, ZoneDensityUpdate, ZoneDensityView,
};
use shared::types::EntityId;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the temple server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        Self::send(self.request(Method::GET, path)).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        Self::send(self.request(Method::POST, path).json(body)).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        Self::send(self.request(Method::POST, path)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        Self::send(self.request(Method::PUT, path).json(body)).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        Self::send(self.request(Method::DELETE, path)).await
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, "Request failed");
            return Err(ClientError::Api {
                status,
                message: body,
            });
        }

        if !content_type.starts_with("application/json") {
            return Err(ClientError::NonJson { content_type, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &request).await
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("/api/auth/me").await
    }

    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        self.get("/health").await
    }

    // ========== Slots ==========

    pub async fn slots(&self, date: Option<&str>) -> ClientResult<Vec<SlotView>> {
        match date {
            Some(date) => self.get(&format!("/api/slots?date={date}")).await,
            None => self.get("/api/slots").await,
        }
    }

    pub async fn create_slot(&self, slot: &SlotCreate) -> ClientResult<TimeSlot> {
        self.post("/api/slots", slot).await
    }

    pub async fn delete_slot(&self, id: EntityId) -> ClientResult<bool> {
        self.delete(&format!("/api/slots/{id}")).await
    }

    /// Every e-token booking with its ticket status (admin)
    pub async fn bookings(&self) -> ClientResult<Vec<BookingEntry>> {
        self.get("/api/slots/bookings").await
    }

    pub async fn book_slot(&self, id: EntityId, form: &BookingForm) -> ClientResult<ETokenBooking> {
        self.post(&format!("/api/slots/{id}/book"), form).await
    }

    // ========== Queue ==========

    pub async fn queue(&self, query: QueueQuery) -> ClientResult<QueueView> {
        let mut params = Vec::new();
        if let Some(n) = query.queue_length {
            params.push(format!("queueLength={n}"));
        }
        if let Some(n) = query.average_processing_time {
            params.push(format!("averageProcessingTime={n}"));
        }
        if params.is_empty() {
            self.get("/api/queue").await
        } else {
            self.get(&format!("/api/queue?{}", params.join("&"))).await
        }
    }

    pub async fn call_next_token(&self) -> ClientResult<QueueStatus> {
        self.post_empty("/api/queue/next").await
    }

    pub async fn toggle_queue(&self) -> ClientResult<QueueStatus> {
        self.post_empty("/api/queue/toggle").await
    }

    pub async fn update_queue_message(&self, message: &str) -> ClientResult<QueueStatus> {
        let body = QueueMessageUpdate {
            message: message.to_string(),
        };
        self.post("/api/queue/message", &body).await
    }

    pub async fn reset_queue(&self) -> ClientResult<QueueStatus> {
        self.post_empty("/api/queue/reset").await
    }

    // ========== Check-in ==========

    pub async fn scan_ticket(&self, qr_payload: &str) -> ClientResult<ScannedTicket> {
        let body = ScanRequest {
            qr_payload: qr_payload.to_string(),
        };
        self.post("/api/checkin/scan", &body).await
    }

    pub async fn scan_history(&self) -> ClientResult<Vec<ScannedTicket>> {
        self.get("/api/checkin/history").await
    }

    pub async fn check_in(&self, booking_id: &str) -> ClientResult<TicketRecord> {
        self.post_empty(&format!("/api/checkin/{booking_id}")).await
    }

    // ========== SOS ==========

    pub async fn send_sos(&self, location: Option<LocationData>) -> ClientResult<SosAlert> {
        self.post("/api/sos", &SosCreate { location }).await
    }

    pub async fn alerts(&self) -> ClientResult<AlertSummary> {
        self.get("/api/sos").await
    }

    pub async fn respond_alert(&self, id: &str) -> ClientResult<SosAlert> {
        self.post_empty(&format!("/api/sos/{id}/respond")).await
    }

    pub async fn resolve_alert(&self, id: &str) -> ClientResult<SosAlert> {
        self.post_empty(&format!("/api/sos/{id}/resolve")).await
    }

    // ========== Temple information ==========

    pub async fn prasad_timings(&self) -> ClientResult<PrasadTimings> {
        self.get("/api/prasad-timings").await
    }

    pub async fn update_prasad_timings(
        &self,
        timings: &PrasadTimings,
    ) -> ClientResult<PrasadTimings> {
        self.put("/api/prasad-timings", timings).await
    }

    pub async fn parking(&self) -> ClientResult<ParkingStatus> {
        self.get("/api/parking").await
    }

    pub async fn update_parking_pricing(
        &self,
        pricing: &ParkingPricing,
    ) -> ClientResult<ParkingStatus> {
        self.put("/api/parking/pricing", pricing).await
    }

    pub async fn update_parking_occupancy(
        &self,
        occupied_spaces: u32,
    ) -> ClientResult<ParkingStatus> {
        self.put(
            "/api/parking/occupancy",
            &ParkingOccupancyUpdate { occupied_spaces },
        )
        .await
    }

    pub async fn pandits(&self) -> ClientResult<Vec<String>> {
        self.get("/api/virtual-puja/pandits").await
    }

    pub async fn book_puja(&self, booking: &PujaBookingCreate) -> ClientResult<PujaBooking> {
        self.post("/api/virtual-puja", booking).await
    }

    pub async fn puja_bookings(&self) -> ClientResult<Vec<PujaBooking>> {
        self.get("/api/virtual-puja").await
    }

    pub async fn assign_pandit(&self, booking_id: &str, pandit: &str) -> ClientResult<PujaBooking> {
        let body = PanditAssignment {
            pandit: pandit.to_string(),
        };
        self.put(&format!("/api/virtual-puja/{booking_id}/assign"), &body)
            .await
    }

    pub async fn schedule(&self) -> ClientResult<Vec<ScheduleEntry>> {
        self.get("/api/schedule").await
    }

    pub async fn add_schedule_entry(
        &self,
        entry: &ScheduleEntryInput,
    ) -> ClientResult<ScheduleEntry> {
        self.post("/api/schedule", entry).await
    }

    pub async fn update_schedule_entry(
        &self,
        id: EntityId,
        entry: &ScheduleEntryInput,
    ) -> ClientResult<ScheduleEntry> {
        self.put(&format!("/api/schedule/{id}"), entry).await
    }

    pub async fn delete_schedule_entry(&self, id: EntityId) -> ClientResult<bool> {
        self.delete(&format!("/api/schedule/{id}")).await
    }

    pub async fn crowd(&self) -> ClientResult<Vec<ZoneDensityView>> {
        self.get("/api/crowd").await
    }

    pub async fn update_zone_density(
        &self,
        zone: &str,
        density: f64,
    ) -> ClientResult<ZoneDensityView> {
        self.put(&format!("/api/crowd/{zone}"), &ZoneDensityUpdate { density })
            .await
    }

    pub async fn dashboard(&self) -> ClientResult<DashboardStats> {
        self.get("/api/dashboard").await
    }

    pub async fn donate(&self, donation: &DonationCreate) -> ClientResult<Donation> {
        self.post("/api/donations", donation).await
    }

    pub async fn donation_analytics(&self) -> ClientResult<DonationAnalytics> {
        self.get("/api/donations/analytics").await
    }

    pub async fn register_volunteer(&self, volunteer: &VolunteerCreate) -> ClientResult<Volunteer> {
        self.post("/api/volunteers", volunteer).await
    }

    pub async fn volunteers(&self) -> ClientResult<Vec<Volunteer>> {
        self.get("/api/volunteers").await
    }

    pub async fn chat(&self, request: &ChatRequest) -> ClientResult<ChatResponse> {
        self.post("/api/chat", request).await
    }
}
