//! Hardware Abstraction Layer (HAL) for the multi-zone preamp controller
//!
//! This crate provides trait-based abstractions for the preamp board's
//! hardware, enabling development and testing without a physical board.
//!
//! # Architecture Layers
//!
//! ```text
//! External callers (front panel, serial/API command handlers)
//!         ↓
//! Routing core (routing crate - zone/source controllers)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (I2C register file on the preamp board)
//! ```
//!
//! # Abstraction Levels
//!
//! - [`PreampDriver`] - mute/standby gates, attenuators, input muxing
//! - [`preamp_regs`] - the board's I2C register map and field helpers
//! - [`preamp_i2c`] - blocking `embedded-hal` I2C backend
//! - [`mocks`] - write-recording test double
//!
//! # Features
//!
//! - `std`: Enable standard library support (for testing)
//! - `defmt`: Enable defmt logging
//!
//! # Example
//!
//! ```no_run
//! use platform::{PreampDriver, ZoneId};
//!
//! fn quiet_zone<P: PreampDriver>(preamp: &mut P, zone: ZoneId) -> Result<(), P::Error> {
//!     preamp.set_zone_mute(zone, true)
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
// Pedantic lints suppressed for this hardware HAL crate:
#![allow(clippy::doc_markdown)] // hex addresses and register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod audio_types;
pub mod mocks;
pub mod preamp;
pub mod preamp_i2c;
pub mod preamp_regs;

// Re-export the hardware boundary trait
pub use preamp::PreampDriver;

// Re-export domain types
pub use audio_types::{InputType, OutOfRangeError, SourceId, ZoneId, NUM_SOURCES, NUM_ZONES};

// Re-export the concrete backend
pub use preamp_i2c::I2cPreamp;
