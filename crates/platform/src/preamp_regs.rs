//! Preamp board register addresses and field helpers.
//!
//! The preamp board exposes its six zones and four sources as an I2C register
//! file. The first board answers at address 0x08; expansion boards follow at
//! 0x08 intervals.
//!
//! | Reg  | Name       | Layout                                  |
//! |------|------------|------------------------------------------|
//! | 0x00 | SRC_AD     | bit per source, 0 = analog, 1 = digital  |
//! | 0x01 | CH123_SRC  | 2-bit source id per zone, zones 0–2      |
//! | 0x02 | CH456_SRC  | 2-bit source id per zone, zones 3–5      |
//! | 0x03 | MUTE       | bit per zone, 1 = muted                  |
//! | 0x04 | STANDBY    | bit per zone, 1 = standby                |
//! | 0x05–0x0A | CH1–CH6_ATTEN | 8-bit attenuation per zone        |
//!
//! All registers are write-only from the controller's side; backends keep
//! shadow copies of the bitfield registers (see
//! [`I2cPreamp`](crate::preamp_i2c::I2cPreamp)).

use crate::audio_types::{SourceId, ZoneId};

/// 7-bit I2C address of the first preamp board.
pub const PREAMP_I2C_ADDR: u8 = 0x08;
/// Address spacing between daisy-chained expansion boards.
pub const PREAMP_ADDR_STRIDE: u8 = 0x08;

/// Register 0x00: analog/digital select, one bit per source (1 = digital).
pub const REG_SRC_AD: u8 = 0x00;
/// Register 0x01: input mux for zones 0–2, 2-bit source id per zone.
pub const REG_CH123_SRC: u8 = 0x01;
/// Register 0x02: input mux for zones 3–5, 2-bit source id per zone.
pub const REG_CH456_SRC: u8 = 0x02;
/// Register 0x03: mute gates, one bit per zone (1 = muted).
pub const REG_MUTE: u8 = 0x03;
/// Register 0x04: standby gates, one bit per zone (1 = standby).
pub const REG_STANDBY: u8 = 0x04;
/// Register 0x05: zone 0 attenuator. Zones 1–5 follow at consecutive addresses.
pub const REG_CH1_ATTEN: u8 = 0x05;
/// Register 0x0A: zone 5 attenuator (last attenuation register).
pub const REG_CH6_ATTEN: u8 = 0x0A;

/// Attenuator value for full volume (0 dB).
pub const ATTEN_MIN: u8 = 0x00;
/// Attenuator value for maximum attenuation (quietest output).
pub const ATTEN_MAX: u8 = 0xFF;

/// Width mask of one zone's source-id field in CH123_SRC / CH456_SRC.
pub const SRC_FIELD_MASK: u8 = 0b11;

/// Bit position of `zone` in the MUTE and STANDBY registers.
#[inline]
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // shift bounded: ZoneId index <= 5
pub fn zone_bit(zone: ZoneId) -> u8 {
    1 << zone.index()
}

/// Bit position of `source` in the SRC_AD register.
#[inline]
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // shift bounded: SourceId index <= 3
pub fn source_bit(source: SourceId) -> u8 {
    1 << source.index()
}

/// Attenuation register address for `zone`.
#[inline]
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // REG_CH1_ATTEN + 5 = 0x0A, no overflow
#[allow(clippy::cast_possible_truncation)] // zone index <= 5
pub fn atten_reg(zone: ZoneId) -> u8 {
    REG_CH1_ATTEN + zone.index() as u8
}

/// Source-mux register address and field shift for `zone`.
///
/// Zones 0–2 live in CH123_SRC at bits 0/2/4; zones 3–5 in CH456_SRC at the
/// same positions.
#[inline]
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // zone index <= 5, shift <= 4
#[allow(clippy::cast_possible_truncation)]
pub fn src_reg_and_shift(zone: ZoneId) -> (u8, u8) {
    let i = zone.index();
    if i < 3 {
        (REG_CH123_SRC, (i * 2) as u8)
    } else {
        (REG_CH456_SRC, ((i - 3) * 2) as u8)
    }
}
