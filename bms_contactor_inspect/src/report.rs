//! Human-readable and JSON renderings of the contactor tables.

use std::fmt::Write;

use bms_common::prelude::*;
use serde::Serialize;

/// Everything the tool prints, in one serializable record.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub service_name: String,
    /// Profile compiled into this binary.
    pub active_profile: WiringProfile,
    /// Profile whose table is shown.
    pub shown_profile: WiringProfile,
    pub contactor_count: usize,
    /// Where the state columns come from: a state file path or "startup".
    pub state_source: String,
    pub contactors: [ContactorStatus; CONTACTOR_COUNT],
}

impl InspectReport {
    pub fn new(
        service_name: &str,
        state_source: &str,
        registry: &ContactorRegistry,
        store: &ContactorStateStore,
    ) -> Self {
        Self {
            service_name: service_name.to_string(),
            active_profile: WiringProfile::ACTIVE,
            shown_profile: registry.profile(),
            contactor_count: registry.len(),
            state_source: state_source.to_string(),
            contactors: collect_status(registry, store),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Fixed-width table, one row per contactor.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}: {} contactors, profile '{}' ({}){}, state from {}",
            self.service_name,
            self.contactor_count,
            self.shown_profile,
            self.shown_profile.description(),
            if self.shown_profile == self.active_profile {
                ""
            } else {
                " [not compiled in]"
            },
            self.state_source
        );
        let _ = writeln!(
            out,
            "{:>3}  {:<20} {:>7} {:>8} {:>4} {:>3} {:<9} {:<9}",
            "#", "contactor", "control", "feedback", "type", "raw", "state", "sensed"
        );
        for c in &self.contactors {
            let _ = writeln!(
                out,
                "{:>3}  {:<20} {:>7} {:>8} {:>4} {:>3} {:<9} {:<9}{}",
                c.id.index(),
                c.id.name(),
                c.control_pin.to_string(),
                c.feedback_pin.to_string(),
                c.feedback_type.to_string(),
                c.raw_feedback,
                c.switch_state.to_string(),
                c.sensed_state.to_string(),
                if c.feedback_mismatch() { "  MISMATCH" } else { "" }
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_contactor() {
        let store = ContactorStateStore::new();
        let registry = ContactorRegistry::active();
        let table = InspectReport::new("test", "startup", &registry, &store).to_table();

        // Header line + column line + one row per contactor.
        assert_eq!(table.lines().count(), 2 + CONTACTOR_COUNT);
        for id in ContactorId::ALL {
            assert!(table.contains(id.name()));
        }
        assert!(!table.contains("not compiled in"));
        assert!(!table.contains("MISMATCH"));
    }

    #[test]
    fn other_profile_is_flagged() {
        let other = WiringProfile::ALL
            .into_iter()
            .find(|p| !p.is_active())
            .unwrap();
        let store = ContactorStateStore::new();
        let report = InspectReport::new(
            "test",
            "startup",
            &ContactorRegistry::for_profile(other),
            &store,
        );
        assert!(report.to_table().contains("[not compiled in]"));
    }

    #[test]
    fn mismatch_marked_in_table() {
        let store = ContactorStateStore::new();
        store.set_state(ContactorId::MainPlus, SwitchState::On);
        let report = InspectReport::new(
            "test",
            "startup",
            &ContactorRegistry::for_profile(WiringProfile::Relays),
            &store,
        );
        assert!(report.to_table().contains("MISMATCH"));
    }

    #[test]
    fn json_report_shape() {
        let store = ContactorStateStore::new();
        let registry = ContactorRegistry::for_profile(WiringProfile::EmulatedRelays);
        let json = InspectReport::new("svc", "startup", &registry, &store).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["service_name"], "svc");
        assert_eq!(value["shown_profile"], "emulated");
        assert_eq!(value["state_source"], "startup");
        assert_eq!(value["contactor_count"], CONTACTOR_COUNT);
        let contactors = value["contactors"].as_array().unwrap();
        assert_eq!(contactors.len(), CONTACTOR_COUNT);
        assert_eq!(contactors[0]["id"], "MainPlus");
        assert_eq!(contactors[0]["feedback_type"], "none");
        assert_eq!(contactors[0]["switch_state"], "off");
    }
}
