use std::str::FromStr;

use chrono::{DateTime, Duration, Months, Utc};

use crate::error::AnalyticsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }
}

impl FromStr for Period {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            other => Err(AnalyticsError::InvalidArgument(format!(
                "invalid time period: {other} (expected weekly, monthly or yearly)"
            ))),
        }
    }
}

/// Resolves a named period to a concrete `[start, end]` span with
/// `end = now`. Monthly and yearly lookbacks use calendar subtraction,
/// so a Mar 31 anchor lands on the last day of February rather than
/// overflowing, and a Feb 29 anchor clamps in non-leap years.
pub fn resolve(period: Period, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = match period {
        Period::Weekly => now - Duration::days(7),
        // checked_sub_months only fails at the edge of chrono's
        // representable range, far outside any real record date.
        Period::Monthly => now
            .checked_sub_months(Months::new(1))
            .unwrap_or_else(|| now - Duration::days(30)),
        Period::Yearly => now
            .checked_sub_months(Months::new(12))
            .unwrap_or_else(|| now - Duration::days(365)),
    };
    (start, now)
}
