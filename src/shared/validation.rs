use std::borrow::Cow;

use validator::ValidationError;

use crate::shared::constants::MIN_WIFI_PASSWORD_CHARS;

/// WiFi password rule: the field is optional, but a non-empty password must
/// have at least [`MIN_WIFI_PASSWORD_CHARS`] characters. Counted in
/// characters, not bytes, so accented passwords are not penalized.
pub fn validate_wifi_password(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().count() < MIN_WIFI_PASSWORD_CHARS {
        return Err(ValidationError::new("wifi_password_too_short").with_message(
            Cow::Borrowed("La clave WiFi debe tener mínimo 10 caracteres"),
        ));
    }
    Ok(())
}
