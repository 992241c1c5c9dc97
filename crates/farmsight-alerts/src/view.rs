//! Derived alert views: filtering and sorting.
//!
//! A view is a fresh, ordered projection of the store's contents. It never
//! mutates the input, and dismissed alerts are excluded from every view,
//! even when a caller filters for the dismissed status explicitly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use farmsight_core::{AlertCategory, AlertStatus};

use crate::alert::Alert;

/// Display filter. `None` in a field means "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFilter {
    /// Restrict to one category
    #[serde(default)]
    pub category: Option<AlertCategory>,
    /// Restrict to one status
    #[serde(default)]
    pub status: Option<AlertStatus>,
    /// Case-insensitive substring match on title or short description
    #[serde(default)]
    pub search_text: String,
}

impl AlertFilter {
    /// Filter matching everything (except dismissed alerts).
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether an alert passes this filter.
    pub fn matches(&self, alert: &Alert) -> bool {
        // Dismissed alerts never appear in a view, regardless of the
        // status filter.
        if alert.is_dismissed() {
            return false;
        }
        if let Some(category) = self.category {
            if alert.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if alert.status != status {
                return false;
            }
        }
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        alert.title.to_lowercase().contains(&needle)
            || alert.short_description.to_lowercase().contains(&needle)
    }
}

/// Sortable alert fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    /// Event time, compared as instants
    #[default]
    Timestamp,
    /// Severity rank (important > heads-up > notice)
    Severity,
    /// Title, case-insensitive
    Title,
    /// Category, by canonical name
    Category,
    /// Status, by canonical name
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Sort key and direction for a view.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AlertSort {
    #[serde(default)]
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl AlertSort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &Alert, b: &Alert) -> Ordering {
        let ordering = match self.field {
            SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
            SortField::Severity => a.severity.cmp(&b.severity),
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Category => a.category.as_str().cmp(b.category.as_str()),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Produce a filtered, sorted copy of the given alerts.
///
/// The sort is stable: alerts comparing equal keep the relative order they
/// have in the input.
pub fn filtered_view(alerts: &[Alert], filter: &AlertFilter, sort: &AlertSort) -> Vec<Alert> {
    let mut view: Vec<Alert> = alerts
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect();
    view.sort_by(|a, b| sort.compare(a, b));
    view
}
