//! Mock implementations for testing
//!
//! This module provides a mock preamp backend for use in unit and
//! integration tests. Every hardware write is recorded in order, so tests
//! can assert not just the resulting state but the transition sequence
//! (mute-before-standby, transient counts, …).

#![cfg(any(test, feature = "std"))]

use crate::audio_types::{InputType, SourceId, ZoneId, NUM_SOURCES, NUM_ZONES};
use crate::preamp::PreampDriver;

/// One recorded hardware write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreampWrite {
    /// Mute gate write.
    Mute {
        /// Zone index.
        zone: usize,
        /// Asserted state.
        mute: bool,
    },
    /// Standby gate write.
    Standby {
        /// Zone index.
        zone: usize,
        /// Asserted state.
        standby: bool,
    },
    /// Attenuator write.
    Attenuation {
        /// Zone index.
        zone: usize,
        /// Register value.
        value: u8,
    },
    /// Input mux write.
    Source {
        /// Zone index.
        zone: usize,
        /// Routed source index.
        source: usize,
    },
    /// Source input-type write.
    Input {
        /// Source index.
        source: usize,
        /// Selected input feed.
        input: InputType,
    },
}

/// Error injected by [`MockPreamp::fail_next_write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFault;

impl core::fmt::Display for WriteFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "injected preamp write fault")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WriteFault {}

/// Mock preamp backend.
///
/// Starts with every line released and every register zeroed, like the real
/// board at power-on. State mutates only on successful writes; an injected
/// fault leaves everything untouched.
pub struct MockPreamp {
    mute: [bool; NUM_ZONES],
    standby: [bool; NUM_ZONES],
    attenuation: [u8; NUM_ZONES],
    source: [usize; NUM_ZONES],
    input: [InputType; NUM_SOURCES],
    writes: heapless::Vec<PreampWrite, 256>,
    fail_at: Option<usize>,
}

impl MockPreamp {
    /// Create a new mock in the power-on state.
    pub fn new() -> Self {
        Self {
            mute: [false; NUM_ZONES],
            standby: [false; NUM_ZONES],
            attenuation: [0; NUM_ZONES],
            source: [0; NUM_ZONES],
            input: [InputType::Analog; NUM_SOURCES],
            writes: heapless::Vec::new(),
            fail_at: None,
        }
    }

    /// Arm a one-shot fault: the next write fails and applies nothing.
    pub fn fail_next_write(&mut self) {
        self.fail_at = Some(0);
    }

    /// Arm a one-shot fault `n` successful writes from now (0 = the next
    /// write), for failing a specific step of a multi-write sequence.
    pub fn fail_after_writes(&mut self, n: usize) {
        self.fail_at = Some(n);
    }

    /// All writes recorded so far, in issue order.
    pub fn writes(&self) -> &[PreampWrite] {
        &self.writes
    }

    /// Drop the recorded write log (state is kept).
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Current mute gate state for a zone.
    #[allow(clippy::indexing_slicing)] // ZoneId is bounded to 0..NUM_ZONES at construction
    pub fn zone_muted(&self, zone: ZoneId) -> bool {
        self.mute[zone.index()]
    }

    /// Current standby gate state for a zone.
    #[allow(clippy::indexing_slicing)]
    pub fn zone_standby(&self, zone: ZoneId) -> bool {
        self.standby[zone.index()]
    }

    /// Current attenuator value for a zone.
    #[allow(clippy::indexing_slicing)]
    pub fn zone_attenuation(&self, zone: ZoneId) -> u8 {
        self.attenuation[zone.index()]
    }

    /// Currently routed source index for a zone.
    #[allow(clippy::indexing_slicing)]
    pub fn zone_source(&self, zone: ZoneId) -> usize {
        self.source[zone.index()]
    }

    /// Current input feed for a source.
    #[allow(clippy::indexing_slicing)] // SourceId is bounded to 0..NUM_SOURCES at construction
    pub fn source_input(&self, source: SourceId) -> InputType {
        self.input[source.index()]
    }

    fn record(&mut self, write: PreampWrite) -> Result<(), WriteFault> {
        match self.fail_at {
            Some(0) => {
                self.fail_at = None;
                return Err(WriteFault);
            }
            Some(n) => self.fail_at = Some(n - 1),
            None => {}
        }
        // Keep state exact even if the bounded log saturates.
        let _ = self.writes.push(write);
        Ok(())
    }
}

impl Default for MockPreamp {
    fn default() -> Self {
        Self::new()
    }
}

impl PreampDriver for MockPreamp {
    type Error = WriteFault;

    fn set_zone_mute(&mut self, zone: ZoneId, mute: bool) -> Result<(), Self::Error> {
        self.record(PreampWrite::Mute {
            zone: zone.index(),
            mute,
        })?;
        #[allow(clippy::indexing_slicing)]
        {
            self.mute[zone.index()] = mute;
        }
        Ok(())
    }

    fn set_zone_standby(&mut self, zone: ZoneId, standby: bool) -> Result<(), Self::Error> {
        self.record(PreampWrite::Standby {
            zone: zone.index(),
            standby,
        })?;
        #[allow(clippy::indexing_slicing)]
        {
            self.standby[zone.index()] = standby;
        }
        Ok(())
    }

    fn set_zone_attenuation(&mut self, zone: ZoneId, attenuation: u8) -> Result<(), Self::Error> {
        self.record(PreampWrite::Attenuation {
            zone: zone.index(),
            value: attenuation,
        })?;
        #[allow(clippy::indexing_slicing)]
        {
            self.attenuation[zone.index()] = attenuation;
        }
        Ok(())
    }

    fn set_zone_source(&mut self, zone: ZoneId, source: SourceId) -> Result<(), Self::Error> {
        self.record(PreampWrite::Source {
            zone: zone.index(),
            source: source.index(),
        })?;
        #[allow(clippy::indexing_slicing)]
        {
            self.source[zone.index()] = source.index();
        }
        Ok(())
    }

    fn set_source_input(&mut self, source: SourceId, input: InputType) -> Result<(), Self::Error> {
        self.record(PreampWrite::Input {
            source: source.index(),
            input,
        })?;
        #[allow(clippy::indexing_slicing)]
        {
            self.input[source.index()] = input;
        }
        Ok(())
    }
}
