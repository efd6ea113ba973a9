//! Build-time wiring profiles.
//!
//! A profile decides how every contactor's feedback input is interpreted.
//! Pin assignments never depend on the profile, so code consuming the
//! registry works unchanged for either wiring.
//!
//! Exactly one profile is active per build, selected by the
//! `emulated-relays` cargo feature. Both profiles stay available as data
//! (see [`super::registry::registry_for`]) for inspection and tests.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::error::ContactorError;
use super::types::FeedbackType;

/// Closed set of contactor wiring variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WiringProfile {
    /// Real contactors with normally-open auxiliary feedback contacts.
    #[serde(rename = "relays")]
    Relays = 0,
    /// Contactors emulated by indicator LEDs, no feedback wired.
    #[serde(rename = "emulated")]
    EmulatedRelays = 1,
}

impl WiringProfile {
    /// Every profile.
    pub const ALL: [Self; 2] = [Self::Relays, Self::EmulatedRelays];

    /// Profile compiled into this build.
    #[cfg(not(feature = "emulated-relays"))]
    pub const ACTIVE: Self = Self::Relays;

    /// Profile compiled into this build.
    #[cfg(feature = "emulated-relays")]
    pub const ACTIVE: Self = Self::EmulatedRelays;

    /// Feedback interpretation applied to every contactor.
    #[inline]
    pub const fn feedback_type(self) -> FeedbackType {
        match self {
            Self::Relays => FeedbackType::NormallyOpen,
            Self::EmulatedRelays => FeedbackType::NoFeedback,
        }
    }

    /// Name used in config files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Relays => "relays",
            Self::EmulatedRelays => "emulated",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Relays => "contactors with normally-open feedback",
            Self::EmulatedRelays => "contactors emulated by LEDs, no feedback",
        }
    }

    /// `true` if this is the profile compiled into this build.
    #[inline]
    pub const fn is_active(self) -> bool {
        self as u8 == Self::ACTIVE as u8
    }
}

impl fmt::Display for WiringProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WiringProfile {
    type Err = ContactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relays" => Ok(Self::Relays),
            "emulated" => Ok(Self::EmulatedRelays),
            _ => Err(ContactorError::UnknownProfile(s.to_string())),
        }
    }
}
