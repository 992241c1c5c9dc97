//! Alerting facade for outer surfaces.
//!
//! `AlertService` is the boundary the rest of the application talks to:
//! screens submit alerts, request filtered views or the unread count, and
//! save preference updates. It owns the store and the preference record
//! and routes every mutation through the transition functions.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use farmsight_core::error::Result;
use farmsight_core::{AlertStatus, NotificationPreferences};

use crate::alert::{Alert, AlertId};
use crate::gate;
use crate::snooze::SnoozeDuration;
use crate::store::AlertStore;
use crate::transitions;
use crate::view::{filtered_view, AlertFilter, AlertSort};

/// Facade over the alert store, transitions, views, and preferences.
#[derive(Debug, Default)]
pub struct AlertService {
    store: AlertStore,
    preferences: NotificationPreferences,
}

impl AlertService {
    /// Create a service with an empty store and default preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with the given preferences.
    pub fn with_preferences(preferences: NotificationPreferences) -> Self {
        Self {
            store: AlertStore::new(),
            preferences,
        }
    }

    /// Submit a new alert. Alerts always enter with status `New`.
    ///
    /// Whatever lifecycle state the caller's record carries is discarded:
    /// the stored alert starts unread with no snooze expiry.
    pub fn submit_alert(&mut self, mut alert: Alert) -> Result<AlertId> {
        alert.status = AlertStatus::New;
        alert.snoozed_until = None;
        let id = self.store.add(alert)?;
        info!(alert_id = %id, "alert submitted");
        Ok(id)
    }

    /// Open an alert: mark it read and return a copy for display.
    pub fn view_alert(&mut self, id: &AlertId) -> Result<Alert> {
        transitions::mark_read(&mut self.store, id)?;
        Ok(self.store.get(id)?.clone())
    }

    /// Dismiss an alert for good.
    pub fn dismiss_alert(&mut self, id: &AlertId) -> Result<()> {
        transitions::dismiss(&mut self.store, id)
    }

    /// Snooze an alert by duration token; returns the computed expiry.
    pub fn snooze_alert(&mut self, id: &AlertId, token: &str) -> Result<DateTime<Utc>> {
        let duration: SnoozeDuration = token.parse()?;
        transitions::snooze(&mut self.store, id, duration, Utc::now())
    }

    /// Mark every new alert as read; returns the number changed.
    pub fn mark_all_read(&mut self) -> usize {
        transitions::mark_all_read(&mut self.store)
    }

    /// Number of unread alerts.
    pub fn unread_count(&self) -> usize {
        self.store.unread_count()
    }

    /// Replace the notification preferences wholesale.
    pub fn save_preferences(&mut self, preferences: NotificationPreferences) -> Result<()> {
        preferences.validate()?;
        debug!(enabled = preferences.enabled, delivery = %preferences.delivery_method,
            "preferences saved");
        self.preferences = preferences;
        Ok(())
    }

    /// Current notification preferences.
    pub fn preferences(&self) -> &NotificationPreferences {
        &self.preferences
    }

    /// A filtered, sorted view of the store's alerts.
    pub fn filtered_view(&self, filter: &AlertFilter, sort: &AlertSort) -> Vec<Alert> {
        filtered_view(self.store.all(), filter, sort)
    }

    /// Non-dismissed alerts that pass the preference gate, in insertion
    /// order. What an outer delivery layer would actually send.
    pub fn deliverable_alerts(&self) -> Vec<&Alert> {
        gate::deliverable(self.store.active(), &self.preferences)
    }

    /// Look up an alert without changing its status.
    pub fn get_alert(&self, id: &AlertId) -> Result<&Alert> {
        self.store.get(id)
    }

    /// Every alert, dismissed included, in insertion order.
    pub fn alerts(&self) -> &[Alert] {
        self.store.all()
    }
}
