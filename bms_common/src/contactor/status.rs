//! Per-contactor status records for telemetry and diagnostics.
//!
//! Joins a registry row with the matching state-store entry.

use serde::{Deserialize, Serialize};

use super::id::ContactorId;
use super::registry::{CONTACTOR_COUNT, ContactorRegistry};
use super::store::ContactorStateStore;
use super::types::{ControlPin, FeedbackPin, FeedbackType, SwitchState};

/// Registry row plus current state of one contactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactorStatus {
    pub id: ContactorId,
    pub control_pin: ControlPin,
    pub feedback_pin: FeedbackPin,
    pub feedback_type: FeedbackType,
    /// Raw level from the store.
    pub raw_feedback: u8,
    /// Logical state from the store.
    pub switch_state: SwitchState,
    /// State implied by `raw_feedback` under `feedback_type`.
    pub sensed_state: SwitchState,
}

impl ContactorStatus {
    /// `true` when the sensed state disagrees with the logical state.
    ///
    /// Always `false` without feedback. `Undefined` never counts as a mismatch.
    pub fn feedback_mismatch(&self) -> bool {
        self.switch_state != SwitchState::Undefined && self.sensed_state != self.switch_state
    }
}

/// Status of every contactor, in index order.
pub fn collect_status(
    registry: &ContactorRegistry,
    store: &ContactorStateStore,
) -> [ContactorStatus; CONTACTOR_COUNT] {
    core::array::from_fn(|i| {
        let id = ContactorId::ALL[i];
        let entry = registry.entry(id);
        let state = store.get(id);
        ContactorStatus {
            id,
            control_pin: entry.control_pin,
            feedback_pin: entry.feedback_pin,
            feedback_type: entry.feedback_type,
            raw_feedback: state.raw_feedback,
            switch_state: state.switch_state,
            sensed_state: entry
                .feedback_type
                .interpret(state.raw_feedback, state.switch_state),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contactor::profile::WiringProfile;
    use crate::contactor::types::ContactorElectricalState;

    #[test]
    fn startup_status_is_consistent() {
        let store = ContactorStateStore::new();
        for profile in WiringProfile::ALL {
            let registry = ContactorRegistry::for_profile(profile);
            let status = collect_status(&registry, &store);
            for (i, s) in status.iter().enumerate() {
                assert_eq!(s.id.index(), i);
                assert_eq!(s.switch_state, SwitchState::Off);
                assert!(!s.feedback_mismatch());
            }
        }
    }

    #[test]
    fn relay_feedback_mismatch_detected() {
        let store = ContactorStateStore::new();
        // Commanded on, but the NO contact still reads low.
        store.set(
            ContactorId::MainPlus,
            ContactorElectricalState::new(0, SwitchState::On),
        );
        let relays = collect_status(&ContactorRegistry::for_profile(WiringProfile::Relays), &store);
        assert_eq!(relays[0].sensed_state, SwitchState::Off);
        assert!(relays[0].feedback_mismatch());

        let emulated = collect_status(
            &ContactorRegistry::for_profile(WiringProfile::EmulatedRelays),
            &store,
        );
        assert_eq!(emulated[0].sensed_state, SwitchState::On);
        assert!(!emulated[0].feedback_mismatch());
    }

    #[test]
    fn undefined_is_not_a_mismatch() {
        let store = ContactorStateStore::new();
        store.set(
            ContactorId::MainMinus,
            ContactorElectricalState::new(1, SwitchState::Undefined),
        );
        let status = collect_status(&ContactorRegistry::for_profile(WiringProfile::Relays), &store);
        assert_eq!(status[2].sensed_state, SwitchState::On);
        assert!(!status[2].feedback_mismatch());
    }
}
