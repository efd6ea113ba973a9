//! Contactor State Store — last-known state of every contactor.
//!
//! Parallel to the registry by index. Each entry is one `AtomicU16`
//! holding `raw_feedback << 8 | switch_state`, so readers never see a torn
//! entry. The store performs no validation and no I/O: the contactor control
//! task is the only writer, any task may read.

use core::sync::atomic::{AtomicU16, Ordering};

use static_assertions::const_assert_eq;
use tracing::{debug, trace};

use super::error::ContactorError;
use super::id::ContactorId;
use super::registry::{CONTACTOR_CONFIG_LENGTH, CONTACTOR_COUNT};
use super::types::{ContactorElectricalState, SwitchState};

/// Process-wide contactor state store.
pub static CONTACTOR_STATES: ContactorStateStore = ContactorStateStore::new();

/// Length of [`CONTACTOR_STATES`].
pub const CONTACTOR_STATES_LENGTH: usize = ContactorStateStore::LEN;

const_assert_eq!(CONTACTOR_STATES_LENGTH, CONTACTOR_CONFIG_LENGTH);

/// Fixed-size, index-addressed contactor state array.
#[derive(Debug)]
pub struct ContactorStateStore {
    cells: [AtomicU16; CONTACTOR_COUNT],
}

impl ContactorStateStore {
    /// Number of entries.
    pub const LEN: usize = CONTACTOR_COUNT;

    /// Store with every entry at [`ContactorElectricalState::INIT`].
    pub const fn new() -> Self {
        Self {
            cells: [const { AtomicU16::new(ContactorElectricalState::INIT.to_bits()) };
                CONTACTOR_COUNT],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ─── Reads ──────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: ContactorId) -> ContactorElectricalState {
        ContactorElectricalState::from_bits(self.cells[id.index()].load(Ordering::Acquire))
    }

    #[inline]
    pub fn state(&self, id: ContactorId) -> SwitchState {
        self.get(id).switch_state
    }

    #[inline]
    pub fn raw_feedback(&self, id: ContactorId) -> u8 {
        self.get(id).raw_feedback
    }

    /// Read by index. Fails for `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<ContactorElectricalState, ContactorError> {
        let id = ContactorId::try_from_index(index)?;
        Ok(self.get(id))
    }

    /// Copy of all entries. Each entry is read atomically; the array as a
    /// whole is not a single transaction.
    pub fn snapshot(&self) -> [ContactorElectricalState; CONTACTOR_COUNT] {
        core::array::from_fn(|i| {
            ContactorElectricalState::from_bits(self.cells[i].load(Ordering::Acquire))
        })
    }

    /// Contactors whose logical state is `On`, in index order.
    pub fn closed_contactors(&self) -> heapless::Vec<ContactorId, CONTACTOR_COUNT> {
        let mut closed = heapless::Vec::<ContactorId, CONTACTOR_COUNT>::new();
        for id in ContactorId::ALL {
            if self.state(id) == SwitchState::On {
                let _ = closed.push(id);
            }
        }
        closed
    }

    /// `true` if no contactor is `On`.
    pub fn all_open(&self) -> bool {
        ContactorId::ALL
            .into_iter()
            .all(|id| self.state(id) != SwitchState::On)
    }

    // ─── Writes (control task only) ─────────────────────────────────

    /// Replace a whole entry.
    #[inline]
    pub fn set(&self, id: ContactorId, value: ContactorElectricalState) {
        let prev = self.cells[id.index()].swap(value.to_bits(), Ordering::AcqRel);
        self.trace_change(id, ContactorElectricalState::from_bits(prev), value);
    }

    /// Write by index. Fails for `index >= len()`.
    pub fn try_set(
        &self,
        index: usize,
        value: ContactorElectricalState,
    ) -> Result<(), ContactorError> {
        let id = ContactorId::try_from_index(index)?;
        self.set(id, value);
        Ok(())
    }

    /// Update the logical state, keeping the raw feedback.
    pub fn set_state(&self, id: ContactorId, state: SwitchState) {
        self.update(id, |mut entry| {
            entry.switch_state = state;
            entry
        });
    }

    /// Update the raw feedback, keeping the logical state.
    pub fn set_raw_feedback(&self, id: ContactorId, raw: u8) {
        self.update(id, |mut entry| {
            entry.raw_feedback = raw;
            entry
        });
    }

    /// Return every entry to the startup value.
    pub fn reset(&self) {
        for cell in &self.cells {
            cell.store(ContactorElectricalState::INIT.to_bits(), Ordering::Release);
        }
        debug!(count = self.len(), "contactor state store reset");
    }

    fn update(
        &self,
        id: ContactorId,
        f: impl Fn(ContactorElectricalState) -> ContactorElectricalState,
    ) {
        let cell = &self.cells[id.index()];
        let mut current = cell.load(Ordering::Acquire);
        loop {
            let prev = ContactorElectricalState::from_bits(current);
            let next = f(prev);
            match cell.compare_exchange_weak(
                current,
                next.to_bits(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    self.trace_change(id, prev, next);
                    return;
                }
                Err(actual) => current = actual,
            }
        }
    }

    #[inline]
    fn trace_change(
        &self,
        id: ContactorId,
        prev: ContactorElectricalState,
        next: ContactorElectricalState,
    ) {
        if prev.switch_state != next.switch_state {
            debug!(
                contactor = %id,
                from = %prev.switch_state,
                to = %next.switch_state,
                "switch state changed"
            );
        } else if prev.raw_feedback != next.raw_feedback {
            trace!(contactor = %id, raw = next.raw_feedback, "feedback level changed");
        }
    }
}

impl Default for ContactorStateStore {
    fn default() -> Self {
        Self::new()
    }
}
