//! Farmsight alert engine.
//!
//! This crate owns the alert lifecycle for the Farmsight planning
//! platform:
//!
//! - **Store**: insertion-ordered, id-indexed collection of alerts;
//!   dismissal is a terminal status, never a removal.
//! - **Transitions**: the closed status state machine (new, read,
//!   snoozed, dismissed) with time-bounded snoozing.
//! - **Views**: filtered, sorted, non-owning projections for display.
//! - **Gate**: per-category delivery eligibility from the user's
//!   notification preferences.
//! - **Service**: the facade outer surfaces (screens, forms, settings)
//!   call into.
//!
//! Everything is synchronous and in-memory; persistence and delivery
//! transport belong to outer collaborators.
//!
//! ## Example
//!
//! ```rust
//! use farmsight_alerts::{Alert, AlertCategory, AlertService, AlertSeverity};
//!
//! let mut service = AlertService::new();
//!
//! let id = service.submit_alert(Alert::new(
//!     AlertCategory::Weather,
//!     AlertSeverity::Important,
//!     "Frost warning",
//!     "Cover seedlings tonight",
//! ))?;
//!
//! assert_eq!(service.unread_count(), 1);
//!
//! // Put it aside until tomorrow, then close it for good.
//! service.snooze_alert(&id, "1-day")?;
//! service.dismiss_alert(&id)?;
//! # Ok::<(), farmsight_core::Error>(())
//! ```

pub mod alert;
pub mod gate;
pub mod service;
pub mod snooze;
pub mod store;
pub mod transitions;
pub mod view;

pub use alert::{Alert, AlertId};
pub use gate::{deliverable, is_deliverable};
pub use service::AlertService;
pub use snooze::{compute_snooze_expiry, SnoozeDuration};
pub use store::AlertStore;
pub use view::{filtered_view, AlertFilter, AlertSort, SortDirection, SortField};

// Re-exports from core
pub use farmsight_core::{
    AlertCategory, AlertSeverity, AlertStatus, CategoryPreferences, DeliveryMethod,
    EmailSummaryFrequency, Error, NotificationPreferences, Result,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
