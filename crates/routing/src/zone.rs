//! Per-zone logical state.

use platform::preamp_regs::ATTEN_MAX;
use platform::SourceId;

/// Stored state of one amplified zone.
///
/// `powered` is the caller's desired flag; whether the zone is actually on
/// also depends on the router's global standby latch. The hardware mute gate
/// is derived from `muted`, `powered`, and the latch — never from `muted`
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct ZoneState {
    /// Desired power flag (false = standby).
    pub(crate) powered: bool,
    /// Logical mute flag, preserved across standby.
    pub(crate) muted: bool,
    /// Stored attenuation (0 = loudest, 255 = quietest).
    pub(crate) attenuation: u8,
    /// Routed source.
    pub(crate) source: SourceId,
}

impl ZoneState {
    /// The power-up state: standby, muted, quietest, source 0.
    pub(crate) fn new() -> Self {
        Self {
            powered: false,
            muted: true,
            attenuation: ATTEN_MAX,
            source: SourceId::default(),
        }
    }
}

impl Default for ZoneState {
    fn default() -> Self {
        Self::new()
    }
}
