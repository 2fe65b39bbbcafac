//! I2C backend for the preamp board register file.
//!
//! Uses the blocking `embedded_hal::i2c::I2c` trait so it is HAL-agnostic.
//! The board's registers are write-only from the controller side, so the
//! bitfield registers (SRC_AD, CH123_SRC, CH456_SRC, MUTE, STANDBY) are
//! maintained through shadow copies: each write computes the next register
//! image from the shadow, puts it on the bus, and commits the shadow only if
//! the bus transaction succeeded. A failed write therefore leaves the shadow
//! describing what the hardware last accepted.
//!
//! Shadows start at 0x00, the register file's power-on state. Run the zone
//! and source init sequences before relying on any derived state.

use embedded_hal::i2c::I2c;

use crate::audio_types::{InputType, SourceId, ZoneId};
use crate::preamp::PreampDriver;
use crate::preamp_regs::{
    src_reg_and_shift, atten_reg, source_bit, zone_bit, PREAMP_I2C_ADDR, REG_CH123_SRC, REG_MUTE,
    REG_SRC_AD, REG_STANDBY, SRC_FIELD_MASK,
};

/// Preamp board driver over a blocking I2C bus.
pub struct I2cPreamp<I> {
    i2c: I,
    addr: u8,
    mute: u8,
    standby: u8,
    src_ad: u8,
    src123: u8,
    src456: u8,
}

impl<I: I2c> I2cPreamp<I> {
    /// Create a driver for the first preamp board (address 0x08).
    ///
    /// `i2c` must be a configured bus with the board attached.
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, PREAMP_I2C_ADDR)
    }

    /// Create a driver for a board at a specific address (expansion units).
    pub fn with_address(i2c: I, addr: u8) -> Self {
        Self {
            i2c,
            addr,
            mute: 0,
            standby: 0,
            src_ad: 0,
            src123: 0,
            src456: 0,
        }
    }

    /// Release the underlying bus.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Write a single register over I2C.
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), I::Error> {
        self.i2c.write(self.addr, &[reg, value])
    }
}

impl<I: I2c> PreampDriver for I2cPreamp<I> {
    type Error = I::Error;

    fn set_zone_mute(&mut self, zone: ZoneId, mute: bool) -> Result<(), Self::Error> {
        let next = if mute {
            self.mute | zone_bit(zone)
        } else {
            self.mute & !zone_bit(zone)
        };
        self.write_reg(REG_MUTE, next)?;
        self.mute = next;
        Ok(())
    }

    fn set_zone_standby(&mut self, zone: ZoneId, standby: bool) -> Result<(), Self::Error> {
        let next = if standby {
            self.standby | zone_bit(zone)
        } else {
            self.standby & !zone_bit(zone)
        };
        self.write_reg(REG_STANDBY, next)?;
        self.standby = next;
        Ok(())
    }

    fn set_zone_attenuation(&mut self, zone: ZoneId, attenuation: u8) -> Result<(), Self::Error> {
        self.write_reg(atten_reg(zone), attenuation)
    }

    #[allow(clippy::arithmetic_side_effects)] // shift <= 4, field value <= 3
    #[allow(clippy::cast_possible_truncation)]
    fn set_zone_source(&mut self, zone: ZoneId, source: SourceId) -> Result<(), Self::Error> {
        let (reg, shift) = src_reg_and_shift(zone);
        let current = if reg == REG_CH123_SRC {
            self.src123
        } else {
            self.src456
        };
        let next = (current & !(SRC_FIELD_MASK << shift)) | ((source.index() as u8) << shift);
        self.write_reg(reg, next)?;
        if reg == REG_CH123_SRC {
            self.src123 = next;
        } else {
            self.src456 = next;
        }
        Ok(())
    }

    fn set_source_input(&mut self, source: SourceId, input: InputType) -> Result<(), Self::Error> {
        let next = match input {
            InputType::Digital => self.src_ad | source_bit(source),
            InputType::Analog => self.src_ad & !source_bit(source),
        };
        self.write_reg(REG_SRC_AD, next)?;
        self.src_ad = next;
        Ok(())
    }
}
