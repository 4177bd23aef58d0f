//! Auto-remove resolution
//!
//! A task created with an auto-remove policy stops being active at a computed
//! expiry epoch. The core only computes the epoch; removing or hiding the task
//! is the caller's business.

use log::debug;

use crate::error::Result;
use crate::models::AutoRemovePolicy;
use crate::utils::duration::offset_epoch;

/// Epoch (UTC ms) at which a task created at `created_at_ms` expires
///
/// `Never` has no expiry, and neither does `AfterGivenDate` before a date is
/// picked. A picked date is returned as is, even when it predates creation.
/// `AfterGivenDuration` offsets the creation epoch with the same calendar
/// rules as [`offset_epoch`].
pub fn resolve_expiry(created_at_ms: i64, policy: &AutoRemovePolicy) -> Result<Option<i64>> {
    let expiry = match *policy {
        AutoRemovePolicy::Never => None,
        AutoRemovePolicy::AfterGivenDate { epoch } => epoch,
        AutoRemovePolicy::AfterGivenDuration { unit, count } => {
            let count = i32::try_from(count).unwrap_or(i32::MAX);
            Some(offset_epoch(created_at_ms, unit, count)?)
        }
    };
    debug!("expiry for task created at {}: {:?}", created_at_ms, expiry);
    Ok(expiry)
}

/// Whether the task is still active at `now_ms`
pub fn is_active_at(created_at_ms: i64, policy: &AutoRemovePolicy, now_ms: i64) -> Result<bool> {
    Ok(match resolve_expiry(created_at_ms, policy)? {
        Some(expiry) => now_ms < expiry,
        None => true,
    })
}
