//! Contactor configuration and state registry.
//!
//! Two process-wide tables, parallel by index:
//!
//! - [`registry::CONTACTOR_CONFIG`] — immutable wiring of every contactor
//!   (control output, feedback input, feedback interpretation).
//! - [`store::CONTACTOR_STATES`] — last-known electrical state of every
//!   contactor, written by the contactor control task.
//!
//! The index of an entry (see [`id::ContactorId`]) is the canonical contactor
//! identifier. Both tables have exactly [`registry::CONTACTOR_COUNT`] entries;
//! this is checked at compile time.

pub mod error;
pub mod id;
pub mod profile;
pub mod registry;
pub mod status;
pub mod store;
pub mod types;
