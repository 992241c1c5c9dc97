//! Delivery eligibility gate.
//!
//! Decides whether an alert may be delivered to the user, based on the
//! notification preferences. This is independent of display filtering:
//! a suppressed alert stays in the store and becomes deliverable again
//! the moment preferences change.

use farmsight_core::NotificationPreferences;

use crate::alert::Alert;

/// Whether an alert is eligible for delivery under the given preferences.
pub fn is_deliverable(alert: &Alert, prefs: &NotificationPreferences) -> bool {
    if !prefs.enabled {
        return false;
    }
    prefs.categories.is_enabled(alert.category)
}

/// The subset of `alerts` eligible for delivery, in input order.
pub fn deliverable<'a>(
    alerts: impl IntoIterator<Item = &'a Alert>,
    prefs: &NotificationPreferences,
) -> Vec<&'a Alert> {
    alerts
        .into_iter()
        .filter(|a| is_deliverable(a, prefs))
        .collect()
}
