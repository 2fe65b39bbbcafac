//! Zone and source controllers.
//!
//! [`AudioRouter`] owns the logical state of six zones and four sources plus
//! the hardware backend, and is the only place hardware writes originate.
//! Every mutation validates its indices first, computes the minimal set of
//! writes from the derived effective state, and applies them in pop-safe
//! order: a zone is muted before its power drops, and powered before its
//! mute gate releases.
//!
//! The global standby latch gates the per-zone power flags instead of
//! overwriting them, so leaving standby restores each zone exactly as the
//! caller last configured it.

use platform::preamp_regs::ATTEN_MAX;
use platform::{InputType, PreampDriver, SourceId, ZoneId, NUM_SOURCES, NUM_ZONES};

use crate::error::RoutingError;
use crate::source::SourceState;
use crate::zone::ZoneState;

// ── Status snapshot ──────────────────────────────────────────────────────────

/// Observable state of one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneStatus {
    /// Effective power state (false while the zone or the system is in standby).
    pub on: bool,
    /// Effective mute state (a zone in standby always reads muted).
    pub muted: bool,
    /// Stored attenuation (0 = loudest, 255 = quietest).
    pub attenuation: u8,
    /// Routed source index.
    pub source: usize,
}

/// Observable state of one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SourceStatus {
    /// Selected input feed.
    pub input: InputType,
}

/// Snapshot of everything a caller can observe in one read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemStatus {
    /// Per-zone state, index order.
    pub zones: [ZoneStatus; NUM_ZONES],
    /// Per-source state, index order.
    pub sources: [SourceStatus; NUM_SOURCES],
    /// True iff no zone is effectively on.
    pub in_standby: bool,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// The audio-routing controller: six zones, four sources, one backend.
///
/// Single-threaded by design; callers needing concurrent access must wrap
/// the router in their own mutual exclusion, since operations read-modify-
/// write shared state around the hardware write.
pub struct AudioRouter<H: PreampDriver> {
    hw: H,
    zones: [ZoneState; NUM_ZONES],
    sources: [SourceState; NUM_SOURCES],
    /// Global standby latch; gates every zone's power flag.
    standby: bool,
    /// Auto-mute threshold: attenuation at or above it sets the logical
    /// mute flag, below it clears the flag. `None` disables the policy.
    auto_mute: Option<u8>,
}

impl<H: PreampDriver> AudioRouter<H> {
    /// Create a router over `hw`. No hardware is touched until
    /// [`init_zones`](Self::init_zones) / [`init_sources`](Self::init_sources).
    pub fn new(hw: H) -> Self {
        Self {
            hw,
            zones: [ZoneState::new(); NUM_ZONES],
            sources: [SourceState::new(); NUM_SOURCES],
            standby: false,
            auto_mute: None,
        }
    }

    /// Borrow the hardware backend.
    pub fn hardware(&self) -> &H {
        &self.hw
    }

    /// Mutably borrow the hardware backend.
    ///
    /// State changed behind the router's back is not tracked; intended for
    /// test hooks and platform quirks only.
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Release the hardware backend.
    pub fn release(self) -> H {
        self.hw
    }

    // ── derived state ────────────────────────────────────────────────────────

    #[allow(clippy::indexing_slicing)] // ZoneId is bounded to 0..NUM_ZONES at construction
    fn zone_ref(&self, zone: ZoneId) -> &ZoneState {
        &self.zones[zone.index()]
    }

    #[allow(clippy::indexing_slicing)]
    fn zone_mut(&mut self, zone: ZoneId) -> &mut ZoneState {
        &mut self.zones[zone.index()]
    }

    #[allow(clippy::indexing_slicing)] // SourceId is bounded to 0..NUM_SOURCES at construction
    fn source_ref(&self, source: SourceId) -> &SourceState {
        &self.sources[source.index()]
    }

    #[allow(clippy::indexing_slicing)]
    fn source_mut(&mut self, source: SourceId) -> &mut SourceState {
        &mut self.sources[source.index()]
    }

    /// Whether the zone's output stage is actually powered.
    fn effective_on(&self, zone: ZoneId) -> bool {
        self.zone_ref(zone).powered && !self.standby
    }

    /// The one place the hardware mute level is decided: a zone is muted at
    /// the output whenever its logical flag is set or it is not effectively
    /// powered. Standby always wins.
    fn effective_mute(&self, zone: ZoneId) -> bool {
        self.zone_ref(zone).muted || !self.effective_on(zone)
    }

    // ── lifecycle ────────────────────────────────────────────────────────────

    /// One-time startup: drive every zone to standby, muted, maximum
    /// attenuation, source 0, and reset the stored state to match.
    ///
    /// Mute gates are asserted for all zones before any power gate drops.
    pub fn init_zones(&mut self) -> Result<(), RoutingError<H::Error>> {
        for zone in ZoneId::all() {
            self.hw
                .set_zone_mute(zone, true)
                .map_err(RoutingError::Hardware)?;
        }
        for zone in ZoneId::all() {
            self.hw
                .set_zone_standby(zone, true)
                .map_err(RoutingError::Hardware)?;
        }
        for zone in ZoneId::all() {
            self.hw
                .set_zone_attenuation(zone, ATTEN_MAX)
                .map_err(RoutingError::Hardware)?;
        }
        for zone in ZoneId::all() {
            self.hw
                .set_zone_source(zone, SourceId::default())
                .map_err(RoutingError::Hardware)?;
        }
        self.zones = [ZoneState::new(); NUM_ZONES];
        Ok(())
    }

    /// One-time startup: reset every source to its analog input and drive
    /// the select lines.
    pub fn init_sources(&mut self) -> Result<(), RoutingError<H::Error>> {
        for source in SourceId::all() {
            self.hw
                .set_source_input(source, InputType::Analog)
                .map_err(RoutingError::Hardware)?;
        }
        self.sources = [SourceState::new(); NUM_SOURCES];
        Ok(())
    }

    /// Return the whole controller to its startup state: standby latch
    /// cleared, zones and sources re-initialized.
    pub fn reset(&mut self) -> Result<(), RoutingError<H::Error>> {
        self.standby = false;
        self.init_zones()?;
        self.init_sources()
    }

    // ── zone controller ──────────────────────────────────────────────────────

    /// Effective power state of one zone.
    pub fn is_on(&self, zone: usize) -> Result<bool, RoutingError<H::Error>> {
        let zone = ZoneId::new(zone)?;
        Ok(self.effective_on(zone))
    }

    /// True iff at least one zone is effectively on.
    pub fn any_on(&self) -> bool {
        ZoneId::all().any(|zone| self.effective_on(zone))
    }

    /// True iff no zone is effectively on.
    pub fn in_standby(&self) -> bool {
        !self.any_on()
    }

    /// Set a zone's logical mute flag.
    ///
    /// The hardware gate is written only when the zone's effective mute
    /// state changes, so muting a zone already silenced by standby updates
    /// the flag without touching hardware — and un-muting it leaves the
    /// output gated until the zone is powered again.
    pub fn mute(&mut self, zone: usize, mute: bool) -> Result<(), RoutingError<H::Error>> {
        let zone = ZoneId::new(zone)?;
        self.set_logical_mute(zone, mute)
    }

    /// Effective mute state of one zone (logical flag OR standby).
    pub fn muted(&self, zone: usize) -> Result<bool, RoutingError<H::Error>> {
        let zone = ZoneId::new(zone)?;
        Ok(self.effective_mute(zone))
    }

    /// Set a zone's desired power flag.
    ///
    /// Power-off asserts the mute gate before the standby gate; power-on
    /// releases standby first and then restores the mute gate from the
    /// logical flag. While the global latch is set only the stored flag
    /// changes; hardware follows when the latch clears.
    pub fn set_zone_power(&mut self, zone: usize, on: bool) -> Result<(), RoutingError<H::Error>> {
        let zone = ZoneId::new(zone)?;
        let prev = self.zone_ref(zone).powered;
        if prev == on {
            return Ok(());
        }
        let was_on = self.effective_on(zone);
        let was_mute = self.effective_mute(zone);
        self.zone_mut(zone).powered = on;
        let now_on = self.effective_on(zone);
        let now_mute = self.effective_mute(zone);
        if was_on == now_on {
            // latched: nothing audible changes until standby(false)
            return Ok(());
        }
        let result = if now_on {
            let mut r = self.hw.set_zone_standby(zone, false);
            if r.is_ok() && now_mute != was_mute {
                r = self.hw.set_zone_mute(zone, now_mute);
            }
            r
        } else {
            let mut r = Ok(());
            if now_mute != was_mute {
                r = self.hw.set_zone_mute(zone, true);
            }
            if r.is_ok() {
                r = self.hw.set_zone_standby(zone, true);
            }
            r
        };
        if let Err(err) = result {
            self.zone_mut(zone).powered = prev;
            return Err(RoutingError::Hardware(err));
        }
        Ok(())
    }

    /// Enter or leave global standby.
    ///
    /// Entry mutes every audible zone, then drops power for every powered
    /// zone — two passes, mute strictly first. Exit reverses the order:
    /// power returns before any mute gate releases. Per-zone power flags
    /// survive the cycle; zones individually off beforehand stay off.
    pub fn standby(&mut self, standby: bool) -> Result<(), RoutingError<H::Error>> {
        if standby == self.standby {
            return Ok(());
        }
        if standby {
            let result = self.enter_standby_writes();
            if result.is_ok() {
                self.standby = true;
            }
            result
        } else {
            self.standby = false;
            let result = self.exit_standby_writes();
            if result.is_err() {
                self.standby = true;
            }
            result
        }
    }

    fn enter_standby_writes(&mut self) -> Result<(), RoutingError<H::Error>> {
        for zone in ZoneId::all() {
            if !self.effective_mute(zone) {
                self.hw
                    .set_zone_mute(zone, true)
                    .map_err(RoutingError::Hardware)?;
            }
        }
        for zone in ZoneId::all() {
            if self.effective_on(zone) {
                self.hw
                    .set_zone_standby(zone, true)
                    .map_err(RoutingError::Hardware)?;
            }
        }
        Ok(())
    }

    fn exit_standby_writes(&mut self) -> Result<(), RoutingError<H::Error>> {
        for zone in ZoneId::all() {
            if self.effective_on(zone) {
                self.hw
                    .set_zone_standby(zone, false)
                    .map_err(RoutingError::Hardware)?;
            }
        }
        for zone in ZoneId::all() {
            if !self.effective_mute(zone) {
                self.hw
                    .set_zone_mute(zone, false)
                    .map_err(RoutingError::Hardware)?;
            }
        }
        Ok(())
    }

    /// Store a zone's attenuation and update the hardware attenuator.
    ///
    /// With the auto-mute policy armed, landing at or above the threshold
    /// sets the logical mute flag and below it clears the flag, through the
    /// same path as [`mute`](Self::mute).
    pub fn set_zone_volume(&mut self, zone: usize, vol: u8) -> Result<(), RoutingError<H::Error>> {
        let zone = ZoneId::new(zone)?;
        if self.zone_ref(zone).attenuation != vol {
            self.hw
                .set_zone_attenuation(zone, vol)
                .map_err(RoutingError::Hardware)?;
            self.zone_mut(zone).attenuation = vol;
        }
        if let Some(threshold) = self.auto_mute {
            let mute = vol >= threshold;
            if mute != self.zone_ref(zone).muted {
                self.set_logical_mute(zone, mute)?;
            }
        }
        Ok(())
    }

    /// Stored attenuation of one zone.
    pub fn zone_volume(&self, zone: usize) -> Result<u8, RoutingError<H::Error>> {
        let zone = ZoneId::new(zone)?;
        Ok(self.zone_ref(zone).attenuation)
    }

    /// Route a source to a zone's input mux.
    ///
    /// Switching an audibly unmuted zone wraps the mux write in a transient
    /// mute (mute, switch, unmute) to suppress switching pops. If a write
    /// fails after the transient mute was asserted, the zone is left muted —
    /// logically too, so observable state and hardware agree — and the
    /// error is returned.
    pub fn set_zone_source(&mut self, zone: usize, src: usize) -> Result<(), RoutingError<H::Error>> {
        let zone = ZoneId::new(zone)?;
        let src = SourceId::new(src)?;
        if self.zone_ref(zone).source == src {
            return Ok(());
        }
        let audible = !self.effective_mute(zone);
        if audible {
            self.hw
                .set_zone_mute(zone, true)
                .map_err(RoutingError::Hardware)?;
        }
        if let Err(err) = self.hw.set_zone_source(zone, src) {
            if audible {
                self.zone_mut(zone).muted = true;
            }
            return Err(RoutingError::Hardware(err));
        }
        self.zone_mut(zone).source = src;
        if audible {
            if let Err(err) = self.hw.set_zone_mute(zone, false) {
                self.zone_mut(zone).muted = true;
                return Err(RoutingError::Hardware(err));
            }
        }
        Ok(())
    }

    /// Currently routed source index of one zone.
    pub fn zone_source(&self, zone: usize) -> Result<usize, RoutingError<H::Error>> {
        let zone = ZoneId::new(zone)?;
        Ok(self.zone_ref(zone).source.index())
    }

    /// Arm (`Some(threshold)`) or disarm (`None`) the auto-mute policy.
    ///
    /// The policy is evaluated on volume writes only; it never rewrites
    /// history for the current attenuation.
    pub fn set_auto_mute(&mut self, threshold: Option<u8>) {
        self.auto_mute = threshold;
    }

    // ── source controller ────────────────────────────────────────────────────

    /// Select the analog or digital input feed for a source.
    ///
    /// Takes effect immediately for every zone routed to the source; there
    /// is no per-zone buffering of input type.
    pub fn set_source_input(
        &mut self,
        src: usize,
        input: InputType,
    ) -> Result<(), RoutingError<H::Error>> {
        let src = SourceId::new(src)?;
        if self.source_ref(src).input == input {
            return Ok(());
        }
        self.hw
            .set_source_input(src, input)
            .map_err(RoutingError::Hardware)?;
        self.source_mut(src).input = input;
        Ok(())
    }

    /// Selected input feed of one source.
    pub fn source_input(&self, src: usize) -> Result<InputType, RoutingError<H::Error>> {
        let src = SourceId::new(src)?;
        Ok(self.source_ref(src).input)
    }

    // ── status ───────────────────────────────────────────────────────────────

    /// Snapshot of all observable state.
    pub fn status(&self) -> SystemStatus {
        let mut zones = [ZoneStatus {
            on: false,
            muted: true,
            attenuation: ATTEN_MAX,
            source: 0,
        }; NUM_ZONES];
        for (slot, zone) in zones.iter_mut().zip(ZoneId::all()) {
            *slot = ZoneStatus {
                on: self.effective_on(zone),
                muted: self.effective_mute(zone),
                attenuation: self.zone_ref(zone).attenuation,
                source: self.zone_ref(zone).source.index(),
            };
        }
        let mut sources = [SourceStatus {
            input: InputType::Analog,
        }; NUM_SOURCES];
        for (slot, source) in sources.iter_mut().zip(SourceId::all()) {
            *slot = SourceStatus {
                input: self.source_ref(source).input,
            };
        }
        SystemStatus {
            zones,
            sources,
            in_standby: self.in_standby(),
        }
    }

    // ── internals ────────────────────────────────────────────────────────────

    fn set_logical_mute(&mut self, zone: ZoneId, mute: bool) -> Result<(), RoutingError<H::Error>> {
        let prev = self.zone_ref(zone).muted;
        let was = self.effective_mute(zone);
        self.zone_mut(zone).muted = mute;
        let now = self.effective_mute(zone);
        if was != now {
            if let Err(err) = self.hw.set_zone_mute(zone, now) {
                self.zone_mut(zone).muted = prev;
                return Err(RoutingError::Hardware(err));
            }
        }
        Ok(())
    }
}
