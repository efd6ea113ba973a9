//! Contactor identities.
//!
//! `ContactorId` names each row of the wiring table. Its discriminant is the
//! canonical contactor index used by the registry, the state store and every
//! external collaborator (I/O layer, control logic, telemetry).

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::error::ContactorError;
use super::registry::CONTACTOR_COUNT;

/// Physical contactor, in wiring-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContactorId {
    /// Main contactor, positive pack terminal.
    MainPlus = 0,
    /// Precharge contactor, positive pack terminal.
    PrechargePlus = 1,
    /// Main contactor, negative pack terminal.
    MainMinus = 2,
    /// Charger path main contactor, positive terminal.
    ChargeMainPlus = 3,
    /// Charger path precharge contactor, positive terminal.
    ChargePrechargePlus = 4,
    /// Charger path main contactor, negative terminal.
    ChargeMainMinus = 5,
}

impl ContactorId {
    /// Every contactor, in index order. Sized by the wiring table, so adding
    /// a wiring row without an id (or the reverse) does not compile.
    pub const ALL: [Self; CONTACTOR_COUNT] = [
        Self::MainPlus,
        Self::PrechargePlus,
        Self::MainMinus,
        Self::ChargeMainPlus,
        Self::ChargePrechargePlus,
        Self::ChargeMainMinus,
    ];

    /// Canonical table index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a table index. Returns `None` for `index >= CONTACTOR_COUNT`.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CONTACTOR_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Like [`Self::from_index`], with an error carrying the valid range.
    pub fn try_from_index(index: usize) -> Result<Self, ContactorError> {
        Self::from_index(index).ok_or(ContactorError::IndexOutOfRange {
            index,
            count: CONTACTOR_COUNT,
        })
    }

    /// Name used in logs, config files and telemetry.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MainPlus => "MainPlus",
            Self::PrechargePlus => "PrechargePlus",
            Self::MainMinus => "MainMinus",
            Self::ChargeMainPlus => "ChargeMainPlus",
            Self::ChargePrechargePlus => "ChargePrechargePlus",
            Self::ChargeMainMinus => "ChargeMainMinus",
        }
    }

    /// `true` for the two precharge contactors.
    pub const fn is_precharge(self) -> bool {
        matches!(self, Self::PrechargePlus | Self::ChargePrechargePlus)
    }

    /// `true` for contactors on the charger path.
    pub const fn is_charge_path(self) -> bool {
        matches!(
            self,
            Self::ChargeMainPlus | Self::ChargePrechargePlus | Self::ChargeMainMinus
        )
    }
}

impl fmt::Display for ContactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactorId {
    type Err = ContactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ContactorError::UnknownContactor(s.to_string()))
    }
}

impl TryFrom<usize> for ContactorId {
    type Error = ContactorError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::try_from_index(index)
    }
}
