//! Farmsight core crate.
//!
//! Shared foundation for the Farmsight planning platform: the unified
//! error type, the closed alert classification enums (category, severity,
//! status), and the user-scoped notification preference model.
//!
//! Full alert functionality (store, transitions, views, delivery gating)
//! lives in the `farmsight-alerts` crate.

pub mod alerts;
pub mod error;
pub mod prefs;

pub use alerts::{AlertCategory, AlertSeverity, AlertStatus};
pub use error::{Error, Result};
pub use prefs::{
    CategoryPreferences, DeliveryMethod, EmailSummaryFrequency, NotificationPreferences,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
