use rust_decimal::Decimal;

/// One-time connection fee ("derecho a conexión"), charged when the signup
/// is placed. Independent of the selected plan.
pub const CONNECTION_FEE: i64 = 55_000;

/// One-time fee per additional TV connected during installation.
pub const ADDITIONAL_TV_ONE_TIME_FEE: i64 = 10_000;

/// Recurring monthly surcharge per additional TV. Shown in labels only;
/// never part of the computed connection total.
pub const ADDITIONAL_TV_MONTHLY_FEE: i64 = 1_000;

/// Maximum number of additional TVs offered by the form (0..=5).
pub const MAX_ADDITIONAL_TVS: u8 = 5;

/// Minimum WiFi password length in characters, when a password is provided.
pub const MIN_WIFI_PASSWORD_CHARS: usize = 10;

// =============================================================================
// ATTACHMENTS
// =============================================================================

/// Allowed MIME types for identity and dwelling photos.
pub const ALLOWED_ATTACHMENT_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Maximum attachment size in bytes (5MB).
pub const MAX_ATTACHMENT_SIZE: usize = 5 * 1024 * 1024;

/// [`CONNECTION_FEE`] as a monetary amount.
pub fn connection_fee() -> Decimal {
    Decimal::from(CONNECTION_FEE)
}

/// [`ADDITIONAL_TV_ONE_TIME_FEE`] as a monetary amount.
pub fn additional_tv_one_time_fee() -> Decimal {
    Decimal::from(ADDITIONAL_TV_ONE_TIME_FEE)
}

/// [`ADDITIONAL_TV_MONTHLY_FEE`] as a monetary amount.
pub fn additional_tv_monthly_fee() -> Decimal {
    Decimal::from(ADDITIONAL_TV_MONTHLY_FEE)
}
