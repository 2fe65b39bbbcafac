//! Type system enforcement tests for routing domain newtypes.
//! These newtypes prevent out-of-range zone/source indices at the boundary.

// ── ZoneId ───────────────────────────────────────────────────────────────────

#[test]
fn zone_id_accepts_the_full_zone_range() {
    use platform::audio_types::{ZoneId, NUM_ZONES};
    for i in 0..NUM_ZONES {
        assert!(ZoneId::new(i).is_ok(), "zone {i} should be accepted");
    }
}

#[test]
fn zone_id_rejects_the_first_invalid_index() {
    use platform::audio_types::{ZoneId, NUM_ZONES};
    assert!(ZoneId::new(NUM_ZONES).is_err());
}

#[test]
fn zone_id_error_carries_the_bounds() {
    use platform::audio_types::ZoneId;
    let err = ZoneId::new(42).expect_err("zone 42 must be rejected");
    assert_eq!(err.value, 42);
    assert_eq!(err.min, 0);
    assert_eq!(err.max, 5);
}

#[test]
fn zone_id_is_one_byte() {
    use platform::audio_types::ZoneId;
    // ZoneId wraps a u8 — should be exactly 1 byte
    assert_eq!(core::mem::size_of::<ZoneId>(), 1);
}

// ── SourceId ─────────────────────────────────────────────────────────────────

#[test]
fn source_id_accepts_the_full_source_range() {
    use platform::audio_types::{SourceId, NUM_SOURCES};
    for i in 0..NUM_SOURCES {
        assert!(SourceId::new(i).is_ok(), "source {i} should be accepted");
    }
}

#[test]
fn source_id_rejects_the_first_invalid_index() {
    use platform::audio_types::{SourceId, NUM_SOURCES};
    assert!(SourceId::new(NUM_SOURCES).is_err());
}

#[test]
fn source_id_is_one_byte() {
    use platform::audio_types::SourceId;
    assert_eq!(core::mem::size_of::<SourceId>(), 1);
}

// ── InputType ────────────────────────────────────────────────────────────────

#[test]
fn input_type_defaults_to_analog() {
    use platform::audio_types::InputType;
    assert_eq!(InputType::default(), InputType::Analog);
}

#[test]
fn input_type_has_exactly_two_variants() {
    use platform::audio_types::InputType;
    // exhaustive match — adding a variant breaks this test on purpose
    for input in [InputType::Analog, InputType::Digital] {
        match input {
            InputType::Analog | InputType::Digital => {}
        }
    }
}
