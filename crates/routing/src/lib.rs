//! Multi-zone audio routing core — zone and source controllers over the
//! platform HAL, with pop-safe transition ordering
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

mod error;
mod router;
mod source;
mod zone;

pub use error::RoutingError;
pub use router::{AudioRouter, SourceStatus, SystemStatus, ZoneStatus};
