use serde::Serialize;

pub const ONE_WEEK_IN_SECONDS: u32 = 604_800;
/// Average Gregorian month (365.2425 days / 12), rounded down.
pub const ONE_MONTH_IN_SECONDS: u32 = 2_629_743;
pub const ONE_YEAR_IN_SECONDS: u32 = ONE_MONTH_IN_SECONDS * 12;

/// One selectable share-link lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShareExpiry {
    pub label: &'static str,
    pub seconds: u32,
}

/// The fixed lifetimes offered for a share link, in menu order.
pub const EXPIRY_OPTIONS: [ShareExpiry; 3] = [
    ShareExpiry {
        label: "Expire in 1 week",
        seconds: ONE_WEEK_IN_SECONDS,
    },
    ShareExpiry {
        label: "Expire in 1 month",
        seconds: ONE_MONTH_IN_SECONDS,
    },
    ShareExpiry {
        label: "Expire in 1 year",
        seconds: ONE_YEAR_IN_SECONDS,
    },
];

pub fn expiry_options() -> &'static [ShareExpiry; 3] {
    &EXPIRY_OPTIONS
}

/// Absolute expiry instant (unix seconds) for a link granted at `now`.
pub fn expires_at(expire_in_seconds: u32, now: i64) -> i64 {
    now + i64::from(expire_in_seconds)
}
