//! Contactor Registry — immutable wiring table.
//!
//! [`CONTACTOR_WIRING`] lists the control output and feedback input of every
//! contactor. The contactor count is derived from its length; nothing else
//! hard-codes it. [`CONTACTOR_CONFIG`] combines the wiring with the feedback
//! interpretation of the active [`WiringProfile`] at compile time.
//!
//! Wiring errors (ids out of order, shared pins, pins beyond the I/O banks,
//! a feedback type disagreeing with the active profile) fail the build.

use static_assertions::{const_assert, const_assert_eq};
use tracing::info;

use super::error::ContactorError;
use super::id::ContactorId;
use super::profile::WiringProfile;
use super::types::{ContactorConfigEntry, ControlPin, FeedbackPin, FeedbackType};
use crate::consts::{MAX_DI, MAX_DO};

// ─── Wiring Table ───────────────────────────────────────────────────

/// Physical wiring of one contactor, common to all profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactorWiring {
    pub id: ContactorId,
    pub control_pin: ControlPin,
    pub feedback_pin: FeedbackPin,
}

impl ContactorWiring {
    /// Registry row for this wiring under `feedback_type`.
    #[inline]
    pub const fn with_feedback(self, feedback_type: FeedbackType) -> ContactorConfigEntry {
        ContactorConfigEntry {
            id: self.id,
            control_pin: self.control_pin,
            feedback_pin: self.feedback_pin,
            feedback_type,
        }
    }
}

/// Control/feedback pin assignment, one row per contactor in index order.
pub const CONTACTOR_WIRING: &[ContactorWiring] = &[
    ContactorWiring {
        id: ContactorId::MainPlus,
        control_pin: ControlPin(0),
        feedback_pin: FeedbackPin(0),
    },
    ContactorWiring {
        id: ContactorId::PrechargePlus,
        control_pin: ControlPin(1),
        feedback_pin: FeedbackPin(1),
    },
    ContactorWiring {
        id: ContactorId::MainMinus,
        control_pin: ControlPin(2),
        feedback_pin: FeedbackPin(2),
    },
    ContactorWiring {
        id: ContactorId::ChargeMainPlus,
        control_pin: ControlPin(3),
        feedback_pin: FeedbackPin(3),
    },
    ContactorWiring {
        id: ContactorId::ChargePrechargePlus,
        control_pin: ControlPin(4),
        feedback_pin: FeedbackPin(4),
    },
    ContactorWiring {
        id: ContactorId::ChargeMainMinus,
        control_pin: ControlPin(5),
        feedback_pin: FeedbackPin(5),
    },
];

/// Number of contactors in this build.
pub const CONTACTOR_COUNT: usize = CONTACTOR_WIRING.len();

/// Registry of the active profile.
pub const CONTACTOR_CONFIG: [ContactorConfigEntry; CONTACTOR_COUNT] =
    registry_for(WiringProfile::ACTIVE);

/// Length of [`CONTACTOR_CONFIG`].
pub const CONTACTOR_CONFIG_LENGTH: usize = CONTACTOR_CONFIG.len();

static RELAYS_CONFIG: [ContactorConfigEntry; CONTACTOR_COUNT] =
    registry_for(WiringProfile::Relays);

static EMULATED_RELAYS_CONFIG: [ContactorConfigEntry; CONTACTOR_COUNT] =
    registry_for(WiringProfile::EmulatedRelays);

/// Build the registry table of `profile`.
pub const fn registry_for(profile: WiringProfile) -> [ContactorConfigEntry; CONTACTOR_COUNT] {
    let feedback_type = profile.feedback_type();
    let mut table = [CONTACTOR_WIRING[0].with_feedback(feedback_type); CONTACTOR_COUNT];
    let mut i = 1;
    while i < CONTACTOR_COUNT {
        table[i] = CONTACTOR_WIRING[i].with_feedback(feedback_type);
        i += 1;
    }
    table
}

// ─── Build-Time Checks ──────────────────────────────────────────────

/// Every row's `id` equals its index.
const fn ids_match_index(table: &[ContactorConfigEntry]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].id as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

/// No two rows share a control pin or a feedback pin.
const fn pins_unique(table: &[ContactorConfigEntry]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].control_pin.0 == table[j].control_pin.0
                || table[i].feedback_pin.0 == table[j].feedback_pin.0
            {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Every pin lies inside the digital I/O banks.
const fn pins_in_range(table: &[ContactorConfigEntry]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].control_pin.0 as usize >= MAX_DO || table[i].feedback_pin.0 as usize >= MAX_DI {
            return false;
        }
        i += 1;
    }
    true
}

/// Every row uses the feedback interpretation of `profile`.
const fn matches_profile(table: &[ContactorConfigEntry], profile: WiringProfile) -> bool {
    let expected = profile.feedback_type() as u8;
    let mut i = 0;
    while i < table.len() {
        if table[i].feedback_type as u8 != expected {
            return false;
        }
        i += 1;
    }
    true
}

/// Two tables differ at most in their feedback types.
const fn pins_parallel(a: &[ContactorConfigEntry], b: &[ContactorConfigEntry]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].id as u8 != b[i].id as u8
            || a[i].control_pin.0 != b[i].control_pin.0
            || a[i].feedback_pin.0 != b[i].feedback_pin.0
        {
            return false;
        }
        i += 1;
    }
    true
}

const_assert!(CONTACTOR_COUNT > 0);
const_assert!(CONTACTOR_COUNT <= u8::MAX as usize);
const_assert_eq!(CONTACTOR_CONFIG_LENGTH, CONTACTOR_COUNT);
const_assert!(ids_match_index(&CONTACTOR_CONFIG));
const_assert!(pins_unique(&CONTACTOR_CONFIG));
const_assert!(pins_in_range(&CONTACTOR_CONFIG));
const_assert!(matches_profile(&CONTACTOR_CONFIG, WiringProfile::ACTIVE));
const_assert!(pins_parallel(
    &registry_for(WiringProfile::Relays),
    &registry_for(WiringProfile::EmulatedRelays)
));

// ─── ContactorRegistry ──────────────────────────────────────────────

/// Read-only view of one profile's contactor table.
///
/// Cheap to copy; all views point at process-wide statics.
#[derive(Debug, Clone, Copy)]
pub struct ContactorRegistry {
    profile: WiringProfile,
    entries: &'static [ContactorConfigEntry; CONTACTOR_COUNT],
}

impl ContactorRegistry {
    /// Registry of the profile compiled into this build.
    pub fn active() -> Self {
        Self::for_profile(WiringProfile::ACTIVE)
    }

    /// Registry of an arbitrary profile, e.g. for comparing wirings.
    pub fn for_profile(profile: WiringProfile) -> Self {
        let entries = match profile {
            WiringProfile::Relays => &RELAYS_CONFIG,
            WiringProfile::EmulatedRelays => &EMULATED_RELAYS_CONFIG,
        };
        Self { profile, entries }
    }

    pub fn profile(&self) -> WiringProfile {
        self.profile
    }

    /// Number of contactors. Always [`CONTACTOR_COUNT`].
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a row by index. `None` for `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'static ContactorConfigEntry> {
        self.entries.get(index)
    }

    /// Look up a row by index, reporting the valid range on failure.
    pub fn try_get(&self, index: usize) -> Result<&'static ContactorConfigEntry, ContactorError> {
        self.get(index).ok_or(ContactorError::IndexOutOfRange {
            index,
            count: self.len(),
        })
    }

    /// Row of a known contactor.
    #[inline]
    pub fn entry(&self, id: ContactorId) -> &'static ContactorConfigEntry {
        &self.entries[id.index()]
    }

    #[inline]
    pub fn control_pin(&self, id: ContactorId) -> ControlPin {
        self.entry(id).control_pin
    }

    #[inline]
    pub fn feedback_pin(&self, id: ContactorId) -> FeedbackPin {
        self.entry(id).feedback_pin
    }

    #[inline]
    pub fn feedback_type(&self, id: ContactorId) -> FeedbackType {
        self.entry(id).feedback_type
    }

    /// Contactor driven by `pin`, if any.
    pub fn find_by_control_pin(&self, pin: ControlPin) -> Option<ContactorId> {
        self.entries
            .iter()
            .find(|e| e.control_pin == pin)
            .map(|e| e.id)
    }

    /// Contactor sensed by `pin`, if any.
    pub fn find_by_feedback_pin(&self, pin: FeedbackPin) -> Option<ContactorId> {
        self.entries
            .iter()
            .find(|e| e.feedback_pin == pin)
            .map(|e| e.id)
    }

    pub fn entries(&self) -> &'static [ContactorConfigEntry] {
        self.entries
    }

    pub fn iter(&self) -> core::slice::Iter<'static, ContactorConfigEntry> {
        self.entries.iter()
    }

    /// Log the table once at startup.
    pub fn log_summary(&self) {
        info!(
            profile = %self.profile,
            count = self.len(),
            "Contactor registry: {}",
            self.profile.description()
        );
        for entry in self.iter() {
            info!(
                index = entry.id.index(),
                contactor = %entry.id,
                control = %entry.control_pin,
                feedback = %entry.feedback_pin,
                feedback_type = %entry.feedback_type,
                "contactor wiring"
            );
        }
    }
}

impl IntoIterator for ContactorRegistry {
    type Item = &'static ContactorConfigEntry;
    type IntoIter = core::slice::Iter<'static, ContactorConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
