//! Temple information services: prasad, parking, puja, schedule, crowd,
//! donations, volunteers and the dashboard figures

use shared::models::{
    AlertSeverity, DashboardAlert, DashboardStats, Donation, DonationCreate, NOT_ASSIGNED,
    ParkingPricing, ParkingStatus, PrasadTimings, PujaBooking, PujaBookingCreate, PujaStatus,
    ScheduleEntry, ScheduleEntryInput, TimeSlot, Volunteer, VolunteerCreate, ZoneDensity,
    estimated_wait_time,
};
use shared::models::{AlertStatus, HIGH_DENSITY_THRESHOLD};
use shared::types::EntityId;

use super::{StoreError, StoreResult, TempleState};
use crate::core::Config;

fn required(value: &str, field: &'static str) -> StoreResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StoreError::Required(field));
    }
    Ok(value.to_string())
}

impl TempleState {
    // ========== Prasad ==========

    pub(super) fn update_prasad(&mut self, timings: PrasadTimings) -> StoreResult<PrasadTimings> {
        self.prasad = PrasadTimings {
            morning: required(&timings.morning, "morning")?,
            evening: required(&timings.evening, "evening")?,
            bhandara_day: required(&timings.bhandara_day, "bhandaraDay")?,
            bhandara_time: required(&timings.bhandara_time, "bhandaraTime")?,
        };
        Ok(self.prasad.clone())
    }

    // ========== Parking ==========

    pub(super) fn update_parking_pricing(
        &mut self,
        pricing: ParkingPricing,
    ) -> StoreResult<ParkingStatus> {
        if !pricing.is_valid() {
            return Err(StoreError::OutOfRange(
                "parking prices must be zero or more".to_string(),
            ));
        }
        self.parking_pricing = pricing;
        Ok(self.parking_status())
    }

    pub(super) fn update_parking_occupancy(&mut self, occupied: u32) -> StoreResult<ParkingStatus> {
        if occupied > self.parking_total_spaces {
            return Err(StoreError::OccupancyExceedsCapacity {
                occupied,
                total: self.parking_total_spaces,
            });
        }
        self.parking_occupied = occupied;
        Ok(self.parking_status())
    }

    // ========== Virtual puja ==========

    fn known_pandit(&self, pandit: &str) -> StoreResult<String> {
        self.pandits
            .iter()
            .find(|p| p.as_str() == pandit.trim())
            .cloned()
            .ok_or_else(|| StoreError::UnknownPandit(pandit.to_string()))
    }

    pub(super) fn book_puja(&mut self, request: PujaBookingCreate) -> StoreResult<PujaBooking> {
        let devotee_name = required(&request.devotee_name, "devoteeName")?;
        let pandit = match request.preferred_pandit.as_deref().map(str::trim) {
            None | Some("") | Some(NOT_ASSIGNED) => None,
            Some(name) => Some(self.known_pandit(name)?),
        };

        let created_at = self.tick();
        let booking = PujaBooking {
            id: format!("PUJA-{created_at}"),
            puja_type: request.puja_type,
            devotee_name,
            status: if pandit.is_some() {
                PujaStatus::Assigned
            } else {
                PujaStatus::Pending
            },
            pandit,
            price: request.puja_type.price(),
            created_at,
        };
        self.pujas.push(booking.clone());
        Ok(booking)
    }

    /// Assign a pandit; [`NOT_ASSIGNED`] clears the assignment
    pub(super) fn assign_pandit(
        &mut self,
        booking_id: &str,
        pandit: String,
    ) -> StoreResult<PujaBooking> {
        let pandit = match pandit.trim() {
            "" | NOT_ASSIGNED => None,
            name => Some(self.known_pandit(name)?),
        };
        let booking = self
            .pujas
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| StoreError::PujaBookingNotFound(booking_id.to_string()))?;

        booking.status = if pandit.is_some() {
            PujaStatus::Assigned
        } else {
            PujaStatus::Pending
        };
        booking.pandit = pandit;
        Ok(booking.clone())
    }

    // ========== Schedule ==========

    pub(super) fn add_schedule_entry(
        &mut self,
        entry: ScheduleEntryInput,
    ) -> StoreResult<ScheduleEntry> {
        let entry = ScheduleEntry {
            id: self.next_schedule_id,
            time: required(&entry.time, "time")?,
            event: required(&entry.event, "event")?,
        };
        self.next_schedule_id += 1;
        self.schedule.push(entry.clone());
        Ok(entry)
    }

    pub(super) fn update_schedule_entry(
        &mut self,
        id: EntityId,
        input: ScheduleEntryInput,
    ) -> StoreResult<ScheduleEntry> {
        let time = required(&input.time, "time")?;
        let event = required(&input.event, "event")?;
        let entry = self
            .schedule
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::ScheduleEntryNotFound(id))?;
        entry.time = time;
        entry.event = event;
        Ok(entry.clone())
    }

    pub(super) fn delete_schedule_entry(&mut self, id: EntityId) -> StoreResult<EntityId> {
        let index = self
            .schedule
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::ScheduleEntryNotFound(id))?;
        self.schedule.remove(index);
        Ok(id)
    }

    // ========== Crowd ==========

    pub(super) fn update_zone_density(
        &mut self,
        zone: &str,
        density: f64,
    ) -> StoreResult<ZoneDensity> {
        if !(0.0..=1.0).contains(&density) {
            return Err(StoreError::OutOfRange(format!(
                "density must be between 0 and 1, got {density}"
            )));
        }
        let entry = self
            .zones
            .iter_mut()
            .find(|z| z.zone == zone)
            .ok_or_else(|| StoreError::ZoneNotFound(zone.to_string()))?;
        entry.density = density;
        Ok(entry.clone())
    }

    // ========== Donations / volunteers ==========

    pub(super) fn record_donation(&mut self, donation: DonationCreate) -> StoreResult<Donation> {
        let donor_name = required(&donation.donor_name, "donorName")?;
        if !donation.amount.is_finite() || donation.amount <= 0.0 {
            return Err(StoreError::InvalidDonationAmount);
        }
        let timestamp = self.tick();
        let donation = Donation {
            id: format!("DON-{timestamp}"),
            donor_name,
            cause: donation.cause,
            amount: donation.amount,
            timestamp,
        };
        self.donations.push(donation.clone());
        Ok(donation)
    }

    pub(super) fn register_volunteer(&mut self, input: VolunteerCreate) -> StoreResult<Volunteer> {
        let name = required(&input.name, "name")?;
        let phone = required(&input.phone, "phone")?;
        let registered_at = self.tick();
        let volunteer = Volunteer {
            id: format!("VOL-{registered_at}"),
            name,
            email: input.email.trim().to_string(),
            phone,
            interests: input.interests,
            availability: input.availability,
            registered_at,
        };
        self.volunteers.push(volunteer.clone());
        Ok(volunteer)
    }

    // ========== Dashboard ==========

    pub(super) fn dashboard(&self, config: &Config, today: &str) -> DashboardStats {
        let todays: Vec<&TimeSlot> = self.slots.iter().filter(|s| s.date == today).collect();
        // fall back to every slot when nothing is scheduled for today
        let counted: Vec<&TimeSlot> = if todays.is_empty() {
            self.slots.iter().collect()
        } else {
            todays
        };

        let booked: u64 = counted.iter().map(|s| u64::from(s.current_bookings)).sum();
        let capacity: u64 = counted.iter().map(|s| u64::from(s.capacity)).sum();
        let capacity_utilization = if capacity == 0 {
            0
        } else {
            (booked as f64 / capacity as f64 * 100.0).round() as u32
        };

        let mut alerts: Vec<DashboardAlert> = self
            .zones
            .iter()
            .filter(|z| z.density >= HIGH_DENSITY_THRESHOLD)
            .map(|z| DashboardAlert {
                severity: AlertSeverity::High,
                message: format!(
                    "High crowd density in {} ({}%)",
                    z.label,
                    (z.density * 100.0).round()
                ),
            })
            .collect();
        if !self.queue.is_active {
            alerts.push(DashboardAlert {
                severity: AlertSeverity::Medium,
                message: "Queue is paused".to_string(),
            });
        }

        DashboardStats {
            live_devotee_count: config.live_devotee_count,
            total_bookings_today: booked,
            average_wait_time: estimated_wait_time(
                config.queue_length,
                config.average_processing_minutes,
            ),
            capacity_utilization,
            active_sos_alerts: self
                .alerts
                .iter()
                .filter(|a| a.status == AlertStatus::Active)
                .count(),
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::TempleAction;
    use shared::models::*;

    use crate::store::StoreError;
    use crate::store::test_support::*;

    #[test]
    fn test_prasad_update_requires_all_fields() {
        let store = seeded();
        let mut timings = PrasadTimings::default();
        timings.evening = "06:00 PM - 09:00 PM".into();
        let updated: PrasadTimings = store
            .run(TempleAction::UpdatePrasadTimings {
                timings: timings.clone(),
            })
            .unwrap();
        assert_eq!(updated, timings);

        timings.bhandara_day = " ".into();
        let err = store
            .execute(TempleAction::UpdatePrasadTimings { timings })
            .unwrap_err();
        assert!(matches!(err, StoreError::Required("bhandaraDay")));
        assert_eq!(store.prasad_timings().evening, "06:00 PM - 09:00 PM");
    }

    #[test]
    fn test_parking_updates() {
        let store = seeded();
        let status: ParkingStatus = store
            .run(TempleAction::UpdateParkingPricing {
                pricing: ParkingPricing {
                    two_wheeler: 30.0,
                    four_wheeler: 80.0,
                },
            })
            .unwrap();
        assert_eq!(status.pricing.four_wheeler, 80.0);
        assert_eq!(status.occupied_spaces, 184);

        let err = store
            .execute(TempleAction::UpdateParkingPricing {
                pricing: ParkingPricing {
                    two_wheeler: -5.0,
                    four_wheeler: 80.0,
                },
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange(_)));

        let status: ParkingStatus = store
            .run(TempleAction::UpdateParkingOccupancy {
                occupied_spaces: 300,
            })
            .unwrap();
        assert_eq!(status.available_spaces, 0);

        let err = store
            .execute(TempleAction::UpdateParkingOccupancy {
                occupied_spaces: 301,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::OccupancyExceedsCapacity { .. }));
    }

    #[test]
    fn test_puja_booking_and_assignment() {
        let store = seeded();
        let booking: PujaBooking = store
            .run(TempleAction::BookPuja {
                request: PujaBookingCreate {
                    puja_type: PujaType::GrihaShanti,
                    devotee_name: "Anita Verma".into(),
                    preferred_pandit: None,
                },
            })
            .unwrap();
        assert_eq!(booking.price, 5100);
        assert_eq!(booking.status, PujaStatus::Pending);
        assert!(booking.pandit.is_none());

        let assigned: PujaBooking = store
            .run(TempleAction::AssignPandit {
                booking_id: booking.id.clone(),
                pandit: "Pandit Suresh Tiwari".into(),
            })
            .unwrap();
        assert_eq!(assigned.status, PujaStatus::Assigned);
        assert_eq!(assigned.pandit.as_deref(), Some("Pandit Suresh Tiwari"));

        let cleared: PujaBooking = store
            .run(TempleAction::AssignPandit {
                booking_id: booking.id.clone(),
                pandit: NOT_ASSIGNED.into(),
            })
            .unwrap();
        assert_eq!(cleared.status, PujaStatus::Pending);
        assert!(cleared.pandit.is_none());

        let err = store
            .execute(TempleAction::AssignPandit {
                booking_id: booking.id,
                pandit: "Pandit Unknown".into(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownPandit(_)));
        assert_eq!(store.puja_bookings().len(), 1);
    }

    #[test]
    fn test_puja_with_preferred_pandit() {
        let store = seeded();
        let booking: PujaBooking = store
            .run(TempleAction::BookPuja {
                request: PujaBookingCreate {
                    puja_type: PujaType::Rudrabhishek,
                    devotee_name: "Anita".into(),
                    preferred_pandit: Some("Pandit Ramesh Sharma".into()),
                },
            })
            .unwrap();
        assert_eq!(booking.status, PujaStatus::Assigned);
        assert_eq!(booking.price, 1100);
    }

    #[test]
    fn test_schedule_crud() {
        let store = seeded();
        let added: ScheduleEntry = store
            .run(TempleAction::AddScheduleEntry {
                entry: ScheduleEntryInput {
                    time: "10:00 PM".into(),
                    event: "Night Bhajan".into(),
                },
            })
            .unwrap();
        assert_eq!(added.id, 10);

        let updated: ScheduleEntry = store
            .run(TempleAction::UpdateScheduleEntry {
                id: added.id,
                entry: ScheduleEntryInput {
                    time: "10:30 PM".into(),
                    event: "Night Bhajan".into(),
                },
            })
            .unwrap();
        assert_eq!(updated.time, "10:30 PM");

        store
            .execute(TempleAction::DeleteScheduleEntry { id: added.id })
            .unwrap();
        assert_eq!(store.schedule().len(), 9);

        let err = store
            .execute(TempleAction::DeleteScheduleEntry { id: added.id })
            .unwrap_err();
        assert!(matches!(err, StoreError::ScheduleEntryNotFound(10)));
    }

    #[test]
    fn test_zone_density() {
        let store = seeded();
        let zone: ZoneDensity = store
            .run(TempleAction::UpdateZoneDensity {
                zone: "zoneD".into(),
                density: 0.85,
            })
            .unwrap();
        assert_eq!(zone.level(), DensityLevel::High);

        let err = store
            .execute(TempleAction::UpdateZoneDensity {
                zone: "zoneD".into(),
                density: 1.5,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::OutOfRange(_)));

        let err = store
            .execute(TempleAction::UpdateZoneDensity {
                zone: "zoneZ".into(),
                density: 0.5,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::ZoneNotFound(_)));
    }

    #[test]
    fn test_donations_and_analytics() {
        let store = empty();
        for (name, amount) in [("Rajesh", 500.0), ("Priya", 1000.0), ("rajesh", 1500.0)] {
            store
                .execute(TempleAction::RecordDonation {
                    donation: DonationCreate {
                        donor_name: name.into(),
                        cause: DonationCause::Food,
                        amount,
                    },
                })
                .unwrap();
        }
        let analytics = store.donation_analytics();
        assert_eq!(analytics.total, 3000.0);
        assert_eq!(analytics.donors, 2);
        assert_eq!(analytics.average, 1000.0);

        let err = store
            .execute(TempleAction::RecordDonation {
                donation: DonationCreate {
                    donor_name: "Rajesh".into(),
                    cause: DonationCause::General,
                    amount: 0.0,
                },
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidDonationAmount));
    }

    #[test]
    fn test_volunteer_registration() {
        let store = empty();
        let v: Volunteer = store
            .run(TempleAction::RegisterVolunteer {
                volunteer: VolunteerCreate {
                    name: "Anita".into(),
                    phone: "+91 1".into(),
                    interests: vec!["crowd".into()],
                    ..Default::default()
                },
            })
            .unwrap();
        assert!(v.id.starts_with("VOL-"));
        assert_eq!(store.volunteers().len(), 1);

        let err = store
            .execute(TempleAction::RegisterVolunteer {
                volunteer: VolunteerCreate {
                    name: "Anita".into(),
                    ..Default::default()
                },
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Required("phone")));
    }

    #[test]
    fn test_dashboard_falls_back_to_all_slots() {
        let store = seeded();
        let stats = store.dashboard(&config(), "2031-01-01");
        assert_eq!(stats.live_devotee_count, 1247);
        assert_eq!(stats.total_bookings_today, 95 + 120 + 45);
        assert_eq!(stats.capacity_utilization, 87);
        assert_eq!(stats.average_wait_time, 68);
        assert_eq!(stats.active_sos_alerts, 1);
        assert_eq!(stats.alerts.len(), 1);
        assert_eq!(stats.alerts[0].severity, AlertSeverity::High);
    }

    #[test]
    fn test_dashboard_counts_only_today() {
        let store = seeded();
        store
            .execute(TempleAction::CreateSlot {
                date: "2031-01-01".into(),
                time: "06:00".into(),
                capacity: 10,
            })
            .unwrap();
        store.execute(TempleAction::ToggleQueue).unwrap();

        let stats = store.dashboard(&config(), "2031-01-01");
        assert_eq!(stats.total_bookings_today, 0);
        assert_eq!(stats.capacity_utilization, 0);
        assert!(
            stats
                .alerts
                .iter()
                .any(|a| a.severity == AlertSeverity::Medium)
        );
    }

    #[test]
    fn test_dashboard_totals_do_not_overflow() {
        let store = empty();
        for time in ["06:00", "08:00"] {
            store
                .execute(TempleAction::CreateSlot {
                    date: "2031-01-01".into(),
                    time: time.into(),
                    capacity: u32::MAX,
                })
                .unwrap();
        }
        store
            .execute(TempleAction::BookSlot {
                slot_id: 1,
                form: BookingForm {
                    devotee_name: "Anita Verma".into(),
                    phone_number: "+91 98765 40000".into(),
                    ..Default::default()
                },
            })
            .unwrap();

        let stats = store.dashboard(&config(), "2031-01-01");
        assert_eq!(stats.total_bookings_today, 1);
        assert_eq!(stats.capacity_utilization, 0);
    }
}
