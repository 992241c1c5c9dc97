//! Alert record type.
//!
//! This module defines the alert structure owned by the store. Category,
//! severity, and status enums come from `farmsight-core` so settings
//! screens can share them without depending on the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use farmsight_core::alerts::{AlertCategory, AlertSeverity, AlertStatus};

/// Unique identifier for an alert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlertId(pub Uuid);

impl AlertId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single notice surfaced to the user.
///
/// Everything except `status` and `snoozed_until` is immutable after
/// creation; those two change only through the transition engine, which
/// keeps `snoozed_until` present exactly when the status is `Snoozed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identifier
    pub id: AlertId,
    /// Alert category
    pub category: AlertCategory,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Current lifecycle status
    pub status: AlertStatus,
    /// Alert title
    pub title: String,
    /// One-line description shown in lists
    pub short_description: String,
    /// Longer description shown in the detail view
    pub full_description: Option<String>,
    /// Planning modules this alert touches (free-text tags, ordered)
    pub affected_modules: Vec<String>,
    /// Event time, used for recency sorting and "time ago"
    pub timestamp: DateTime<Utc>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// Set exactly while the status is `Snoozed`
    pub snoozed_until: Option<DateTime<Utc>>,
    /// Label for an optional collaborator action
    pub action_label: Option<String>,
    /// Link for an optional collaborator action; opaque to this crate
    pub action_link: Option<String>,
    /// Additional metadata, not interpreted by this crate
    pub metadata: serde_json::Value,
}

impl Alert {
    /// Create a new alert with status `New`.
    pub fn new(
        category: AlertCategory,
        severity: AlertSeverity,
        title: impl Into<String>,
        short_description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AlertId::new(),
            category,
            severity,
            status: AlertStatus::New,
            title: title.into(),
            short_description: short_description.into(),
            full_description: None,
            affected_modules: Vec::new(),
            timestamp: now,
            created_at: now,
            snoozed_until: None,
            action_label: None,
            action_link: None,
            metadata: serde_json::Value::Object(Default::default()),
        }
    }

    /// Set the long-form description.
    pub fn with_full_description(mut self, description: impl Into<String>) -> Self {
        self.full_description = Some(description.into());
        self
    }

    /// Set the affected module tags.
    pub fn with_affected_modules(mut self, modules: Vec<String>) -> Self {
        self.affected_modules = modules;
        self
    }

    /// Attach a collaborator action.
    pub fn with_action(mut self, label: impl Into<String>, link: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self.action_link = Some(link.into());
        self
    }

    /// Add metadata to the alert.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the event timestamp (defaults to creation time).
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether the alert has not been seen yet.
    pub fn is_unread(&self) -> bool {
        self.status == AlertStatus::New
    }

    /// Whether the alert has been dismissed.
    pub fn is_dismissed(&self) -> bool {
        self.status == AlertStatus::Dismissed
    }

    /// Whether the alert is currently snoozed.
    pub fn is_snoozed(&self) -> bool {
        self.status == AlertStatus::Snoozed
    }

    /// Whether a snoozed alert's expiry has passed.
    ///
    /// Observation only; nothing wakes the alert automatically. The alert
    /// keeps status `Snoozed` until a user action changes it.
    pub fn snooze_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.snoozed_until, Some(until) if self.is_snoozed() && until <= now)
    }

    /// Get the duration between the alert's event time and `now`.
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.timestamp
    }

    /// Human-readable recency, relative to `now`.
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let elapsed = now - self.timestamp;
        if elapsed < chrono::Duration::minutes(1) {
            "just now".to_string()
        } else if elapsed < chrono::Duration::hours(1) {
            format!("{}m ago", elapsed.num_minutes())
        } else if elapsed < chrono::Duration::days(1) {
            format!("{}h ago", elapsed.num_hours())
        } else {
            format!("{}d ago", elapsed.num_days())
        }
    }

    /// Get a one-line summary of the alert.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} - {} ({})",
            self.severity, self.title, self.short_description, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_alert_id() {
        let id = AlertId::new();
        assert_eq!(id.0.get_version(), Some(uuid::Version::Random));

        let parsed = AlertId::from_string(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_alert_creation() {
        let alert = Alert::new(
            AlertCategory::Weather,
            AlertSeverity::Important,
            "Frost warning",
            "Frost expected overnight",
        );

        assert_eq!(alert.category, AlertCategory::Weather);
        assert_eq!(alert.severity, AlertSeverity::Important);
        assert_eq!(alert.status, AlertStatus::New);
        assert!(alert.is_unread());
        assert!(alert.snoozed_until.is_none());
        assert_eq!(alert.timestamp, alert.created_at);
    }

    #[test]
    fn test_builder_pattern() {
        let alert = Alert::new(
            AlertCategory::Task,
            AlertSeverity::Notice,
            "Hive inspection due",
            "Inspect hive 3 this week",
        )
        .with_full_description("Hive 3 has not been inspected in 14 days.")
        .with_affected_modules(vec!["hives".to_string()])
        .with_action("Open hive log", "/hives/3/log");

        assert!(alert.full_description.is_some());
        assert_eq!(alert.affected_modules, vec!["hives"]);
        assert_eq!(alert.action_label.as_deref(), Some("Open hive log"));
        assert_eq!(alert.action_link.as_deref(), Some("/hives/3/log"));
    }

    #[test]
    fn test_age() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let alert = Alert::new(
            AlertCategory::Task,
            AlertSeverity::Notice,
            "Test",
            "Test",
        )
        .with_timestamp(now - chrono::Duration::hours(6));

        assert_eq!(alert.age(now), chrono::Duration::hours(6));
    }

    #[test]
    fn test_time_ago() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let alert = Alert::new(
            AlertCategory::Health,
            AlertSeverity::HeadsUp,
            "Test",
            "Test",
        );

        let recent = alert.clone().with_timestamp(now - chrono::Duration::seconds(30));
        assert_eq!(recent.time_ago(now), "just now");

        let minutes = alert.clone().with_timestamp(now - chrono::Duration::minutes(5));
        assert_eq!(minutes.time_ago(now), "5m ago");

        let hours = alert.clone().with_timestamp(now - chrono::Duration::hours(3));
        assert_eq!(hours.time_ago(now), "3h ago");

        let days = alert.with_timestamp(now - chrono::Duration::days(2));
        assert_eq!(days.time_ago(now), "2d ago");
    }

    #[test]
    fn test_snooze_expired_observation() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let mut alert = Alert::new(
            AlertCategory::Opportunity,
            AlertSeverity::Notice,
            "Seedling sale",
            "Local nursery clearance",
        );

        // Not snoozed: never expired, even with a stale timestamp.
        assert!(!alert.snooze_expired(now));

        alert.status = AlertStatus::Snoozed;
        alert.snoozed_until = Some(now - chrono::Duration::hours(1));
        assert!(alert.snooze_expired(now));

        alert.snoozed_until = Some(now + chrono::Duration::hours(1));
        assert!(!alert.snooze_expired(now));
    }

    #[test]
    fn test_alert_summary() {
        let alert = Alert::new(
            AlertCategory::Weather,
            AlertSeverity::Important,
            "High winds",
            "Gusts above 60 km/h expected",
        );

        let summary = alert.summary();
        assert!(summary.contains("[important]"));
        assert!(summary.contains("High winds"));
        assert!(summary.contains("weather"));
    }
}
