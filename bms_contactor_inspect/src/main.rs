//! # BMS Contactor Inspector
//!
//! Prints the contactor wiring compiled into this build next to a set of
//! contactor states. States come from a JSON file exported by telemetry
//! (`--state`); without one the store's startup values are shown. Used during
//! commissioning to confirm a binary matches the pack's cabling, and to spot
//! contactors whose feedback disagrees with their logical state.
//!
//! # Usage
//!
//! ```bash
//! # Active wiring, human-readable
//! bms_contactor_inspect
//!
//! # Compare against the LED emulation wiring, as JSON
//! bms_contactor_inspect --profile emulated --json
//!
//! # Refuse to run if the config expects another wiring
//! bms_contactor_inspect --config /etc/bms/contactors.toml -v
//!
//! # Check a telemetry state dump against the relay wiring
//! bms_contactor_inspect --state states.json --profile relays
//! ```

#![deny(warnings)]

mod report;
mod state_file;

use bms_common::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::report::InspectReport;
use crate::state_file::load_state;

/// BMS Contactor Inspector - show contactor wiring and state
#[derive(Parser, Debug)]
#[command(name = "bms_contactor_inspect")]
#[command(version)]
#[command(about = "Show the compiled contactor wiring and the contactor state store")]
#[command(long_about = None)]
struct Args {
    /// Path to the configuration file (contactors.toml).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Contactor state dump (JSON, one entry per contactor) to show.
    #[arg(short, long, value_name = "FILE")]
    state: Option<PathBuf>,

    /// Wiring profile to show: "relays" or "emulated". Defaults to the compiled one.
    #[arg(short, long)]
    profile: Option<WiringProfile>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Output logs in JSON format
    #[arg(long)]
    log_json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("contactor inspection failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let loaded = load_config(&args);

    // Tracing comes up before a config error is returned so it gets logged.
    let level = match &loaded {
        Ok(config) => config.shared.log_level,
        Err(_) => LogLevel::default(),
    };
    setup_tracing(&args, level);

    let config = loaded?;

    info!(
        "BMS contactor inspector v{} starting...",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(path) = &args.config {
        debug!("Loaded configuration from {:?}", path);
    }

    let active = ContactorRegistry::active();
    active.log_summary();

    let loaded_states;
    let (store, state_source) = match &args.state {
        Some(path) => {
            loaded_states = load_state(path)?;
            (&loaded_states, path.display().to_string())
        }
        None => (&CONTACTOR_STATES, "startup".to_string()),
    };

    let shown = args.profile.unwrap_or(WiringProfile::ACTIVE);
    let registry = ContactorRegistry::for_profile(shown);
    let report = InspectReport::new(
        &config.shared.service_name,
        &state_source,
        &registry,
        store,
    );

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_table());
    }

    Ok(())
}

/// Load the config file named by `--config` (or the defaults) and check it
/// against this build.
fn load_config(args: &Args) -> Result<BmsConfig, ConfigError> {
    let config = match &args.config {
        Some(path) => BmsConfig::load(path)?,
        None => BmsConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        configured.into()
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so the report on stdout stays machine-readable.
    if args.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    fn args_with_profile(dir: &TempDir, expected: WiringProfile) -> Args {
        let path = dir.path().join("contactors.toml");
        fs::write(
            &path,
            format!(
                "[shared]\nservice_name = \"pack-a\"\n\n[contactors]\nexpected_profile = \"{expected}\"\n"
            ),
        )
        .unwrap();
        Args::try_parse_from(["bms_contactor_inspect", "--config", path.to_str().unwrap()]).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn profile_argument_parses() {
        let args =
            Args::try_parse_from(["bms_contactor_inspect", "--profile", "emulated", "--json"])
                .unwrap();
        assert_eq!(args.profile, Some(WiringProfile::EmulatedRelays));
        assert!(args.json);

        let err = Args::try_parse_from(["bms_contactor_inspect", "--profile", "leds"]);
        assert!(err.is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["bms_contactor_inspect"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.profile.is_none());
        assert!(args.state.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn config_for_this_build_accepted() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&args_with_profile(&dir, WiringProfile::ACTIVE)).unwrap();
        assert_eq!(config.shared.service_name, "pack-a");
    }

    #[test]
    fn config_for_other_wiring_stops_startup() {
        let other = WiringProfile::ALL
            .into_iter()
            .find(|p| !p.is_active())
            .unwrap();
        let dir = TempDir::new().unwrap();
        let result = load_config(&args_with_profile(&dir, other));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn no_config_uses_defaults() {
        let args = Args::try_parse_from(["bms_contactor_inspect"]).unwrap();
        let config = load_config(&args).unwrap();
        assert!(config.contactors.expected_profile.is_none());
    }

    #[test]
    fn missing_config_file_reported() {
        let args =
            Args::try_parse_from(["bms_contactor_inspect", "--config", "/nonexistent/c.toml"])
                .unwrap();
        assert!(matches!(load_config(&args), Err(ConfigError::FileNotFound)));
    }
}
