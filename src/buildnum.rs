// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Build number derivation.
//!
//! A build number is the count of whole days since 2010-01-01 (UTC). The
//! value lands in the third component of a .NET assembly version, which
//! caps each component at 65534, so a day counter keeps the scheme valid
//! for well over a century of builds.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

/// Derive the build number for a given instant.
///
/// A clock set before the build epoch counts as day zero.
pub fn build_number(at: DateTime<Utc>) -> u32 {
    // INVARIANT: 2010-01-01 is a valid calendar date.
    let epoch = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    let days = at.date_naive().signed_duration_since(epoch).num_days();
    if days < 0 {
        warn!("system clock predates the build epoch, using build number 0");
        return 0;
    }

    days as u32
}

/// Derive the build number for right now.
pub fn current_build_number() -> u32 {
    build_number(Utc::now())
}
