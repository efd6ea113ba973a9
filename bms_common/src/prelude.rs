//! Prelude module for common re-exports.
//!
//! ```rust
//! use bms_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{BmsConfig, ConfigError, ConfigLoader, ContactorSettings, SharedConfig};

// ─── Contactors ─────────────────────────────────────────────────────
pub use crate::contactor::error::ContactorError;
pub use crate::contactor::id::ContactorId;
pub use crate::contactor::profile::WiringProfile;
pub use crate::contactor::registry::{
    CONTACTOR_CONFIG, CONTACTOR_CONFIG_LENGTH, CONTACTOR_COUNT, ContactorRegistry,
};
pub use crate::contactor::status::{ContactorStatus, collect_status};
pub use crate::contactor::store::{CONTACTOR_STATES, CONTACTOR_STATES_LENGTH, ContactorStateStore};
pub use crate::contactor::types::{
    ContactorConfigEntry, ContactorElectricalState, ControlPin, FeedbackPin, FeedbackType,
    SwitchState,
};
