//! Alert status transitions.
//!
//! All status mutation goes through these functions so the lifecycle
//! invariants stay in one place:
//!
//! - `Dismissed` is terminal. `dismiss` on a dismissed alert is a silent
//!   no-op, but `mark_read` and `snooze` on one are rejected.
//! - `snoozed_until` is set exactly while the status is `Snoozed`.
//! - There is no background wake: a snoozed alert stays snoozed past its
//!   expiry until a user action changes the status.

use chrono::{DateTime, Utc};
use tracing::debug;

use farmsight_core::error::{Error, Result};
use farmsight_core::AlertStatus;

use crate::alert::AlertId;
use crate::snooze::{compute_snooze_expiry, SnoozeDuration};
use crate::store::AlertStore;

/// Mark an alert as read.
///
/// `New` becomes `Read`; `Read` and `Snoozed` are left untouched so the
/// call is idempotent for every non-terminal state.
pub fn mark_read(store: &mut AlertStore, id: &AlertId) -> Result<()> {
    let alert = store.get_mut(id)?;
    match alert.status {
        AlertStatus::New => {
            alert.status = AlertStatus::Read;
            debug!(alert_id = %id, "alert marked read");
            Ok(())
        }
        AlertStatus::Read | AlertStatus::Snoozed => Ok(()),
        AlertStatus::Dismissed => Err(Error::invalid_transition(format!(
            "cannot mark dismissed alert {id} as read"
        ))),
    }
}

/// Dismiss an alert.
///
/// Any non-terminal status becomes `Dismissed` and the snooze expiry is
/// cleared. Dismissing an already-dismissed alert is a no-op.
pub fn dismiss(store: &mut AlertStore, id: &AlertId) -> Result<()> {
    let alert = store.get_mut(id)?;
    if alert.status == AlertStatus::Dismissed {
        return Ok(());
    }
    alert.status = AlertStatus::Dismissed;
    alert.snoozed_until = None;
    debug!(alert_id = %id, "alert dismissed");
    Ok(())
}

/// Snooze an alert until `now` plus the given duration.
///
/// Snoozing an already-snoozed alert overwrites the expiry; it replaces
/// rather than stacks. Returns the computed expiry.
pub fn snooze(
    store: &mut AlertStore,
    id: &AlertId,
    duration: SnoozeDuration,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let alert = store.get_mut(id)?;
    if alert.status == AlertStatus::Dismissed {
        return Err(Error::invalid_transition(format!(
            "cannot snooze dismissed alert {id}"
        )));
    }
    let until = compute_snooze_expiry(now, duration)?;
    alert.status = AlertStatus::Snoozed;
    alert.snoozed_until = Some(until);
    debug!(alert_id = %id, %duration, %until, "alert snoozed");
    Ok(until)
}

/// Mark every `New` alert as `Read`.
///
/// All other statuses are untouched. Returns the number of alerts that
/// changed, so calling twice in a row returns zero the second time.
pub fn mark_all_read(store: &mut AlertStore) -> usize {
    let mut changed = 0;
    for alert in store.iter_mut() {
        if alert.status == AlertStatus::New {
            alert.status = AlertStatus::Read;
            changed += 1;
        }
    }
    if changed > 0 {
        debug!(count = changed, "marked all new alerts read");
    }
    changed
}
