//! Canonical alert collection.
//!
//! The store owns every alert for the session in insertion order. Nothing
//! is ever structurally removed; dismissal is a status change, so the
//! store keeps history. Status mutation goes through the transition
//! functions in [`crate::transitions`], never through the store directly.

use std::collections::HashMap;

use farmsight_core::error::{Error, Result};
use farmsight_core::{AlertCategory, AlertStatus};

use crate::alert::{Alert, AlertId};

/// Insertion-ordered collection of alerts, indexed by id.
#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: Vec<Alert>,
    index: HashMap<AlertId, usize>,
}

impl AlertStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new alert, rejecting duplicate ids.
    pub fn add(&mut self, alert: Alert) -> Result<AlertId> {
        let id = alert.id.clone();
        if self.index.contains_key(&id) {
            return Err(Error::validation(format!("duplicate alert id: {id}")));
        }
        self.index.insert(id.clone(), self.alerts.len());
        self.alerts.push(alert);
        Ok(id)
    }

    /// Get an alert by id.
    pub fn get(&self, id: &AlertId) -> Result<&Alert> {
        self.index
            .get(id)
            .map(|&i| &self.alerts[i])
            .ok_or_else(|| Error::not_found(format!("alert not found: {id}")))
    }

    /// Mutable access for the transition engine.
    pub(crate) fn get_mut(&mut self, id: &AlertId) -> Result<&mut Alert> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.alerts[i]),
            None => Err(Error::not_found(format!("alert not found: {id}"))),
        }
    }

    /// Whether an alert with this id exists.
    pub fn contains(&self, id: &AlertId) -> bool {
        self.index.contains_key(id)
    }

    /// Every alert, including dismissed ones, in insertion order.
    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    /// Iterate over non-dismissed alerts in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| !a.is_dismissed())
    }

    /// Alerts of a given category, in insertion order.
    pub fn by_category(&self, category: AlertCategory) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Alerts in a given status, in insertion order.
    pub fn by_status(&self, status: AlertStatus) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.status == status).collect()
    }

    /// Number of unread alerts.
    pub fn unread_count(&self) -> usize {
        self.active().filter(|a| a.is_unread()).count()
    }

    /// Total number of alerts, dismissed included.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Whether the store holds no alerts at all.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Iterate over mutable alerts for bulk transitions.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Alert> {
        self.alerts.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmsight_core::AlertSeverity;

    fn weather_alert(title: &str) -> Alert {
        Alert::new(
            AlertCategory::Weather,
            AlertSeverity::HeadsUp,
            title,
            "short",
        )
    }

    #[test]
    fn test_add_and_get() {
        let mut store = AlertStore::new();
        let alert = weather_alert("Frost");
        let id = store.add(alert).unwrap();

        assert!(store.contains(&id));
        assert_eq!(store.get(&id).unwrap().title, "Frost");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = AlertStore::new();
        let alert = weather_alert("Frost");
        let duplicate = alert.clone();

        store.add(alert).unwrap();
        let err = store.add(duplicate).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = AlertStore::new();
        let err = store.get(&AlertId::new()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = AlertStore::new();
        for title in ["a", "b", "c"] {
            store.add(weather_alert(title)).unwrap();
        }

        let titles: Vec<&str> = store.all().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_all_includes_dismissed() {
        let mut store = AlertStore::new();
        let id = store.add(weather_alert("dismiss me")).unwrap();
        store.add(weather_alert("keep me")).unwrap();

        store.get_mut(&id).unwrap().status = AlertStatus::Dismissed;

        assert_eq!(store.all().len(), 2);
        assert_eq!(store.active().count(), 1);
        assert_eq!(store.by_status(AlertStatus::Dismissed).len(), 1);
    }

    #[test]
    fn test_by_category() {
        let mut store = AlertStore::new();
        store.add(weather_alert("w1")).unwrap();
        store
            .add(Alert::new(
                AlertCategory::Task,
                AlertSeverity::Notice,
                "t1",
                "short",
            ))
            .unwrap();

        assert_eq!(store.by_category(AlertCategory::Weather).len(), 1);
        assert_eq!(store.by_category(AlertCategory::Task).len(), 1);
        assert_eq!(store.by_category(AlertCategory::Health).len(), 0);
    }

    #[test]
    fn test_unread_count() {
        let mut store = AlertStore::new();
        let a = store.add(weather_alert("a")).unwrap();
        store.add(weather_alert("b")).unwrap();
        assert_eq!(store.unread_count(), 2);

        store.get_mut(&a).unwrap().status = AlertStatus::Read;
        assert_eq!(store.unread_count(), 1);
    }
}
