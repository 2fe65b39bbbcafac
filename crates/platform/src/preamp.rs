//! Preamp hardware abstraction.
//!
//! The routing core drives zone and source hardware exclusively through
//! [`PreampDriver`]: five synchronous, side-effect-only primitives covering
//! the mute gate, the standby gate, the attenuator, the zone input mux, and
//! the source analog/digital selector. Backends report failures through the
//! associated error type and never retry on their own — the caller decides
//! how to recover.

use crate::audio_types::{InputType, SourceId, ZoneId};

/// Control interface of one six-zone preamp board.
///
/// Implementations must apply each write before returning; no buffering or
/// deferred application is allowed, so a caller issuing two writes in
/// sequence always observes the first one completed.
pub trait PreampDriver {
    /// Error type reported for a failed hardware write.
    type Error: core::fmt::Debug;

    /// Assert (`true`) or release (`false`) a zone's mute gate.
    fn set_zone_mute(&mut self, zone: ZoneId, mute: bool) -> Result<(), Self::Error>;

    /// Assert (`true`) or release (`false`) a zone's standby gate.
    ///
    /// Standby cuts the zone's output power stage. Callers are responsible
    /// for muting the zone first; this primitive does not sequence.
    fn set_zone_standby(&mut self, zone: ZoneId, standby: bool) -> Result<(), Self::Error>;

    /// Write a zone's 8-bit attenuator (0x00 = 0 dB, 0xFF = quietest).
    fn set_zone_attenuation(&mut self, zone: ZoneId, attenuation: u8) -> Result<(), Self::Error>;

    /// Route `source` to a zone's input mux.
    fn set_zone_source(&mut self, zone: ZoneId, source: SourceId) -> Result<(), Self::Error>;

    /// Select the analog or digital input feed for a source.
    fn set_source_input(&mut self, source: SourceId, input: InputType) -> Result<(), Self::Error>;
}
