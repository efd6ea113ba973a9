//! Contactor lookup and decoding errors.

use thiserror::Error;

/// Error type for contactor registry and state store lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactorError {
    /// Index is not below the contactor count.
    #[error("contactor index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// Raw value does not encode a switch state.
    #[error("invalid switch state value {0}")]
    InvalidSwitchState(u8),

    /// Name does not match any contactor.
    #[error("unknown contactor {0:?}")]
    UnknownContactor(String),

    /// Name does not match any wiring profile.
    #[error("unknown wiring profile {0:?}, expected \"relays\" or \"emulated\"")]
    UnknownProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ContactorError::IndexOutOfRange { index: 9, count: 6 };
        assert_eq!(err.to_string(), "contactor index 9 out of range (count 6)");

        let err = ContactorError::UnknownProfile("leds".to_string());
        assert!(err.to_string().contains("\"leds\""));
    }
}
