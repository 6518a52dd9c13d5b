//! SOS alerts

use shared::models::{
    ALERT_MESSAGE, ALERT_MESSAGE_NO_LOCATION, AlertStatus, LocationData, SosAlert,
};

use super::{StoreError, StoreResult, TempleState};

impl TempleState {
    pub(super) fn trigger_sos(
        &mut self,
        user_id: String,
        user_name: String,
        location: Option<LocationData>,
    ) -> SosAlert {
        let timestamp = self.tick();
        let message = if location.is_some() {
            ALERT_MESSAGE
        } else {
            ALERT_MESSAGE_NO_LOCATION
        };
        let alert = SosAlert {
            id: format!("SOS-{timestamp}"),
            user_id,
            user_name,
            location,
            status: AlertStatus::Active,
            timestamp,
            message: message.to_string(),
            responded_at: None,
        };
        tracing::warn!(
            alert_id = %alert.id,
            user = %alert.user_name,
            has_location = alert.location.is_some(),
            "SOS alert raised"
        );
        self.alerts.push(alert.clone());
        alert
    }

    /// Move an alert exactly one step forward
    pub(super) fn advance_alert(
        &mut self,
        alert_id: &str,
        to: AlertStatus,
    ) -> StoreResult<SosAlert> {
        let index = self
            .alerts
            .iter()
            .position(|a| a.id == alert_id)
            .ok_or_else(|| StoreError::AlertNotFound(alert_id.to_string()))?;

        let from = self.alerts[index].status;
        if !from.can_advance_to(to) {
            return Err(StoreError::InvalidAlertTransition {
                id: alert_id.to_string(),
                from,
                to,
            });
        }
        let now = self.tick();
        let alert = &mut self.alerts[index];
        alert.status = to;
        if to == AlertStatus::Responded {
            alert.responded_at = Some(now);
        }
        Ok(alert.clone())
    }
}

#[cfg(test)]
mod tests {
    use shared::TempleAction;
    use shared::models::{ALERT_MESSAGE_NO_LOCATION, AlertStatus, LocationData, SosAlert};

    use crate::store::test_support::*;
    use crate::store::{StoreError, TempleState};

    fn trigger(store: &crate::TempleStore, location: Option<LocationData>) -> SosAlert {
        store
            .run(TempleAction::TriggerSos {
                user_id: "devotee".into(),
                user_name: "Anita Verma".into(),
                location,
            })
            .unwrap()
    }

    #[test]
    fn test_trigger_without_location() {
        let store = empty();
        let alert = trigger(&store, None);
        assert_eq!(alert.status, AlertStatus::Active);
        assert!(alert.location.is_none());
        assert_eq!(alert.message, ALERT_MESSAGE_NO_LOCATION);
        assert!(alert.id.starts_with("SOS-"));
        assert_eq!(store.alert_summary().active, 1);
    }

    #[test]
    fn test_alert_lifecycle_is_sequential() {
        let store = empty();
        let alert = trigger(
            &store,
            Some(LocationData {
                latitude: 26.7961,
                longitude: 82.1961,
                accuracy: 5.0,
                timestamp: 0,
            }),
        );

        // resolve cannot skip responded
        let err = store
            .execute(TempleAction::ResolveAlert {
                alert_id: alert.id.clone(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidAlertTransition {
                from: AlertStatus::Active,
                to: AlertStatus::Resolved,
                ..
            }
        ));

        let responded: SosAlert = store
            .run(TempleAction::RespondToAlert {
                alert_id: alert.id.clone(),
            })
            .unwrap();
        assert_eq!(responded.status, AlertStatus::Responded);
        assert!(responded.responded_at.is_some());

        let err = store
            .execute(TempleAction::RespondToAlert {
                alert_id: alert.id.clone(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidAlertTransition { .. }));

        let resolved: SosAlert = store
            .run(TempleAction::ResolveAlert {
                alert_id: alert.id.clone(),
            })
            .unwrap();
        assert_eq!(resolved.status, AlertStatus::Resolved);
        assert_eq!(resolved.responded_at, responded.responded_at);

        let summary = store.alert_summary();
        assert_eq!((summary.active, summary.responded, summary.resolved), (0, 0, 1));
    }

    #[test]
    fn test_unknown_alert() {
        let store = empty();
        let err = store
            .execute(TempleAction::RespondToAlert {
                alert_id: "SOS-0".into(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::AlertNotFound(_)));
    }

    #[test]
    fn test_alert_ids_are_unique() {
        let store = empty();
        let a = trigger(&store, None);
        let b = trigger(&store, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_rejected_transition_leaves_clock_alone() {
        let mut state = TempleState::seeded(&config());
        let before = state.clock;

        let err = state
            .advance_alert("SOS-1734567890123", AlertStatus::Resolved)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidAlertTransition { .. }));
        let err = state
            .advance_alert("SOS-0", AlertStatus::Responded)
            .unwrap_err();
        assert!(matches!(err, StoreError::AlertNotFound(_)));
        assert_eq!(state.clock, before);

        let alert = state
            .advance_alert("SOS-1734567890123", AlertStatus::Responded)
            .unwrap();
        assert_eq!(alert.responded_at, Some(state.clock));
    }
}
