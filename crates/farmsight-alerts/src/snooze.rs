//! Snooze duration tokens and expiry arithmetic.
//!
//! Expiries use calendar addition, not fixed-second offsets: one day is
//! the next calendar day and "next season" is three calendar months, with
//! chrono clamping to the end of shorter months (Jan 31 + 3 months is
//! Apr 30).

use chrono::{DateTime, Days, Months, Utc};
use serde::{Deserialize, Serialize};

use farmsight_core::error::{Error, Result};

/// How long an alert is put aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnoozeDuration {
    /// Until tomorrow
    OneDay,
    /// Until the same time in three days
    ThreeDays,
    /// Until next season (three calendar months)
    NextSeason,
}

impl SnoozeDuration {
    /// Get the duration token as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::OneDay => "1-day",
            Self::ThreeDays => "3-days",
            Self::NextSeason => "next-season",
        }
    }
}

impl std::str::FromStr for SnoozeDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1-day" => Ok(Self::OneDay),
            "3-days" => Ok(Self::ThreeDays),
            "next-season" => Ok(Self::NextSeason),
            other => Err(Error::invalid_duration(other.to_string())),
        }
    }
}

impl std::fmt::Display for SnoozeDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compute the concrete expiry for a snooze starting at `now`.
pub fn compute_snooze_expiry(
    now: DateTime<Utc>,
    duration: SnoozeDuration,
) -> Result<DateTime<Utc>> {
    let expiry = match duration {
        SnoozeDuration::OneDay => now.checked_add_days(Days::new(1)),
        SnoozeDuration::ThreeDays => now.checked_add_days(Days::new(3)),
        SnoozeDuration::NextSeason => now.checked_add_months(Months::new(3)),
    };
    expiry.ok_or_else(|| Error::internal(format!("snooze expiry out of range from {now}")))
}
