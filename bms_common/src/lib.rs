//! BMS Common Library
//!
//! Contactor configuration registry, the parallel contactor state store,
//! and configuration loading shared by all BMS workspace crates.
//!
//! # Module Structure
//!
//! - [`contactor`] - Contactor wiring table, wiring profiles and state store
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - Workspace-wide limits and default paths
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use bms_common::prelude::*;
//!
//! let registry = ContactorRegistry::active();
//! assert_eq!(registry.len(), CONTACTOR_STATES.len());
//!
//! CONTACTOR_STATES.set_state(ContactorId::MainMinus, SwitchState::On);
//! assert_eq!(CONTACTOR_STATES.state(ContactorId::MainMinus), SwitchState::On);
//! # CONTACTOR_STATES.reset();
//! ```
//!
//! # Build Variants
//!
//! The wiring profile is chosen at build time. The default build drives real
//! relays with normally-open feedback contacts; the `emulated-relays` feature
//! selects the LED emulation wiring, which has no feedback inputs.
//!
//! # Testing
//!
//! Tests tied to the compiled profile are gated on the feature, so run the
//! suite once per variant:
//!
//! ```bash
//! cargo test --workspace
//! cargo test --workspace --features bms_common/emulated-relays
//! ```

pub mod config;
pub mod consts;
pub mod contactor;
pub mod prelude;
