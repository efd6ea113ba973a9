//! Contactor state files exported by telemetry.
//!
//! A JSON array with one entry per contactor, in index order:
//!
//! ```json
//! [
//!   { "raw_feedback": 1, "switch_state": "on" },
//!   { "raw_feedback": 0, "switch_state": "off" }
//! ]
//! ```

use std::path::Path;

use bms_common::prelude::*;
use thiserror::Error;
use tracing::debug;

/// Error type for state file loading.
#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("failed to read state file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse state file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Entry count differs from the compiled contactor count.
    #[error("state file has {found} entries, expected {expected}")]
    Length { found: usize, expected: usize },

    #[error(transparent)]
    Contactor(#[from] ContactorError),
}

/// Read a state file into a fresh store.
pub fn load_state(path: &Path) -> Result<ContactorStateStore, StateFileError> {
    let content = std::fs::read_to_string(path)?;
    let store = parse_state(&content)?;
    debug!("Loaded contactor states from {:?}", path);
    Ok(store)
}

pub fn parse_state(content: &str) -> Result<ContactorStateStore, StateFileError> {
    let entries: Vec<ContactorElectricalState> = serde_json::from_str(content)?;
    if entries.len() != CONTACTOR_COUNT {
        return Err(StateFileError::Length {
            found: entries.len(),
            expected: CONTACTOR_COUNT,
        });
    }

    let store = ContactorStateStore::new();
    for (index, entry) in entries.into_iter().enumerate() {
        store.try_set(index, entry)?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::InspectReport;
    use std::fs;
    use tempfile::TempDir;

    /// Every contactor off, except `MainPlus` commanded on with its
    /// normally-open contact still reading low.
    const MAIN_PLUS_STUCK_OPEN: &str = r#"[
        { "raw_feedback": 0, "switch_state": "on" },
        { "raw_feedback": 0, "switch_state": "off" },
        { "raw_feedback": 0, "switch_state": "off" },
        { "raw_feedback": 0, "switch_state": "off" },
        { "raw_feedback": 0, "switch_state": "off" },
        { "raw_feedback": 0, "switch_state": "off" }
    ]"#;

    #[test]
    fn loaded_states_reach_the_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("states.json");
        fs::write(&path, MAIN_PLUS_STUCK_OPEN).unwrap();

        let store = load_state(&path).unwrap();
        assert_eq!(
            store.get(ContactorId::MainPlus),
            ContactorElectricalState::new(0, SwitchState::On)
        );

        let relays = ContactorRegistry::for_profile(WiringProfile::Relays);
        let report = InspectReport::new("test", "states.json", &relays, &store);
        let table = report.to_table();
        let mismatch_rows: Vec<_> = table.lines().filter(|l| l.contains("MISMATCH")).collect();
        assert_eq!(mismatch_rows.len(), 1);
        assert!(mismatch_rows[0].contains("MainPlus"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["contactors"][0]["switch_state"], "on");
        assert_eq!(json["contactors"][0]["sensed_state"], "off");
    }

    #[test]
    fn emulated_wiring_never_mismatches() {
        let store = parse_state(MAIN_PLUS_STUCK_OPEN).unwrap();
        let emulated = ContactorRegistry::for_profile(WiringProfile::EmulatedRelays);
        let table = InspectReport::new("test", "inline", &emulated, &store).to_table();
        assert!(!table.contains("MISMATCH"));
    }

    #[test]
    fn wrong_entry_count_rejected() {
        let err = parse_state(r#"[{ "raw_feedback": 1, "switch_state": "on" }]"#).unwrap_err();
        assert!(matches!(
            err,
            StateFileError::Length { found: 1, expected } if expected == CONTACTOR_COUNT
        ));
    }

    #[test]
    fn unknown_switch_state_rejected() {
        let body = MAIN_PLUS_STUCK_OPEN.replacen("\"on\"", "\"closed\"", 1);
        assert!(matches!(parse_state(&body), Err(StateFileError::Parse(_))));
    }

    #[test]
    fn missing_file() {
        let err = load_state(Path::new("/nonexistent/bms/states.json")).unwrap_err();
        assert!(matches!(err, StateFileError::Io(_)));
    }
}
