//! Contactor data types (wiring entry, feedback polarity, electrical state).
//!
//! All enums use `#[repr(u8)]` so the state store can pack a whole
//! [`ContactorElectricalState`] into one atomic word.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::error::ContactorError;
use super::id::ContactorId;

// ─── Pin Identities ─────────────────────────────────────────────────

/// Digital output driving a contactor coil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlPin(pub u16);

/// Digital input sensing a contactor's auxiliary contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackPin(pub u16);

impl fmt::Display for ControlPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DO{}", self.0)
    }
}

impl fmt::Display for FeedbackPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DI{}", self.0)
    }
}

// ─── SwitchState ────────────────────────────────────────────────────

/// Logical switch state of a contactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SwitchState {
    /// Open.
    #[default]
    Off = 0,
    /// Closed.
    On = 1,
    /// Not yet determined, or an error is pending.
    Undefined = 2,
}

impl SwitchState {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            2 => Some(Self::Undefined),
            _ => None,
        }
    }
}

impl TryFrom<u8> for SwitchState {
    type Error = ContactorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(ContactorError::InvalidSwitchState(value))
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::On => write!(f, "on"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

// ─── FeedbackType ───────────────────────────────────────────────────

/// How a contactor's feedback input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FeedbackType {
    /// Auxiliary contact closes with the contactor: high = closed.
    #[serde(rename = "NO")]
    NormallyOpen = 0,
    /// Auxiliary contact opens with the contactor: low = closed.
    #[serde(rename = "NC")]
    NormallyClosed = 1,
    /// No feedback wired; the commanded state is the only information.
    #[serde(rename = "none")]
    NoFeedback = 2,
}

impl FeedbackType {
    /// `false` only for [`FeedbackType::NoFeedback`].
    #[inline]
    pub const fn has_feedback(self) -> bool {
        !matches!(self, Self::NoFeedback)
    }

    /// Logical state implied by a raw feedback level.
    ///
    /// Any non-zero `raw` counts as high. Without feedback the result is
    /// `commanded`, so consistency checks in the control logic pass trivially.
    #[inline]
    pub const fn interpret(self, raw: u8, commanded: SwitchState) -> SwitchState {
        match self {
            Self::NormallyOpen if raw != 0 => SwitchState::On,
            Self::NormallyOpen => SwitchState::Off,
            Self::NormallyClosed if raw == 0 => SwitchState::On,
            Self::NormallyClosed => SwitchState::Off,
            Self::NoFeedback => commanded,
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NormallyOpen => write!(f, "NO"),
            Self::NormallyClosed => write!(f, "NC"),
            Self::NoFeedback => write!(f, "none"),
        }
    }
}

impl FromStr for FeedbackType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO" => Ok(Self::NormallyOpen),
            "NC" => Ok(Self::NormallyClosed),
            "none" => Ok(Self::NoFeedback),
            _ => Err(format!(
                "unknown FeedbackType: {s:?}, expected \"NO\", \"NC\" or \"none\""
            )),
        }
    }
}

// ─── ContactorConfigEntry ───────────────────────────────────────────

/// One row of the contactor registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactorConfigEntry {
    /// Contactor this row describes; equals the row index.
    pub id: ContactorId,
    /// Output energizing the contactor coil.
    pub control_pin: ControlPin,
    /// Input sensing the auxiliary contact.
    pub feedback_pin: FeedbackPin,
    /// Interpretation of `feedback_pin`.
    pub feedback_type: FeedbackType,
}

// ─── ContactorElectricalState ───────────────────────────────────────

/// Last-known state of one contactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactorElectricalState {
    /// Raw level last read from the feedback input.
    pub raw_feedback: u8,
    /// Logical state as decided by the control logic.
    pub switch_state: SwitchState,
}

impl ContactorElectricalState {
    /// Startup value of every store entry.
    pub const INIT: Self = Self {
        raw_feedback: 0,
        switch_state: SwitchState::Off,
    };

    pub const fn new(raw_feedback: u8, switch_state: SwitchState) -> Self {
        Self {
            raw_feedback,
            switch_state,
        }
    }

    /// Pack as `raw_feedback << 8 | switch_state`.
    #[inline]
    pub(crate) const fn to_bits(self) -> u16 {
        ((self.raw_feedback as u16) << 8) | self.switch_state as u16
    }

    /// Inverse of [`Self::to_bits`]. An unknown state byte decodes as `Undefined`.
    #[inline]
    pub(crate) const fn from_bits(bits: u16) -> Self {
        let switch_state = match SwitchState::from_u8(bits as u8) {
            Some(state) => state,
            None => SwitchState::Undefined,
        };
        Self {
            raw_feedback: (bits >> 8) as u8,
            switch_state,
        }
    }
}
