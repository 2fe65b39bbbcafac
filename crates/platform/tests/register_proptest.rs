//! Property-based tests for the preamp register encodings.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use platform::audio_types::{SourceId, ZoneId, NUM_SOURCES, NUM_ZONES};
use platform::preamp_regs::{
    atten_reg, source_bit, src_reg_and_shift, zone_bit, REG_CH123_SRC, REG_CH1_ATTEN,
    REG_CH456_SRC, REG_CH6_ATTEN, SRC_FIELD_MASK,
};

proptest::proptest! {
    /// ZoneId::new never panics for any usize input.
    #[test]
    fn zone_id_new_never_panics(index in 0usize..=usize::MAX) {
        let result = ZoneId::new(index);
        assert_eq!(result.is_ok(), index < NUM_ZONES);
    }

    /// SourceId::new never panics for any usize input.
    #[test]
    fn source_id_new_never_panics(index in 0usize..=usize::MAX) {
        let result = SourceId::new(index);
        assert_eq!(result.is_ok(), index < NUM_SOURCES);
    }

    /// Every zone's mute/standby bit stays within the low six bits.
    #[test]
    fn zone_bit_stays_in_register(index in 0usize..6) {
        let zone = ZoneId::new(index).expect("index is in range");
        assert_eq!(zone_bit(zone) & !0b0011_1111, 0);
        assert_eq!(zone_bit(zone).count_ones(), 1);
    }

    /// Every source's SRC_AD bit stays within the low four bits.
    #[test]
    fn source_bit_stays_in_register(index in 0usize..4) {
        let source = SourceId::new(index).expect("index is in range");
        assert_eq!(source_bit(source) & !0b0000_1111, 0);
        assert_eq!(source_bit(source).count_ones(), 1);
    }

    /// Attenuation registers stay inside the CH1..CH6 window.
    #[test]
    fn atten_reg_stays_in_window(index in 0usize..6) {
        let zone = ZoneId::new(index).expect("index is in range");
        let reg = atten_reg(zone);
        assert!((REG_CH1_ATTEN..=REG_CH6_ATTEN).contains(&reg));
    }

    /// A zone's source field never shifts outside its register byte.
    #[test]
    fn src_field_stays_in_byte(index in 0usize..6) {
        let zone = ZoneId::new(index).expect("index is in range");
        let (reg, shift) = src_reg_and_shift(zone);
        assert!(reg == REG_CH123_SRC || reg == REG_CH456_SRC);
        assert!(shift <= 6);
        // the shifted field mask must not wrap out of the byte
        assert!(u16::from(SRC_FIELD_MASK) << shift <= 0xFF);
    }
}
