//! System-wide constants for the BMS workspace.
//!
//! Single source of truth for numeric limits and default paths.
//! The contactor count is not here: it is derived from the wiring table
//! in [`crate::contactor::registry`].

/// Number of digital outputs available for contactor control.
pub const MAX_DO: usize = 32;

/// Number of digital inputs available for contactor feedback.
pub const MAX_DI: usize = 32;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/bms/contactors.toml";

/// Service name used when no configuration file is supplied.
pub const DEFAULT_SERVICE_NAME: &str = "bms-contactors";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_limits_fit_pin_ids() {
        assert!(MAX_DO > 0 && MAX_DO <= u16::MAX as usize);
        assert!(MAX_DI > 0 && MAX_DI <= u16::MAX as usize);
    }

    #[test]
    fn default_names_are_not_empty() {
        assert!(!DEFAULT_SERVICE_NAME.is_empty());
        assert!(DEFAULT_CONFIG_PATH.ends_with(".toml"));
    }
}
