//! Routing error taxonomy.
//!
//! Two failure classes, both reported synchronously and never retried:
//! an index outside the fixed zone/source range (rejected before any
//! hardware action), and a write the hardware backend could not complete.

use platform::OutOfRangeError;

/// Error returned by every fallible routing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoutingError<E> {
    /// Zone or source argument outside its valid range; no hardware was
    /// touched and all state is unchanged.
    InvalidIndex(OutOfRangeError),
    /// The hardware backend reported a failed write. Retrying is the
    /// caller's decision.
    Hardware(E),
}

impl<E> From<OutOfRangeError> for RoutingError<E> {
    fn from(err: OutOfRangeError) -> Self {
        Self::InvalidIndex(err)
    }
}

impl<E> core::fmt::Display for RoutingError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidIndex(err) => write!(f, "invalid index: {err}"),
            Self::Hardware(_) => write!(f, "hardware write rejected"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for RoutingError<E> {}

#[cfg(test)]
mod tests {
    use super::RoutingError;
    use platform::ZoneId;

    #[test]
    fn test_invalid_index_converts_from_out_of_range() {
        let err = ZoneId::new(7).expect_err("zone 7 must be rejected");
        let routing: RoutingError<()> = err.into();
        assert_eq!(routing, RoutingError::InvalidIndex(err));
    }

    #[test]
    fn test_display_names_the_offending_index() {
        let err = ZoneId::new(7).expect_err("zone 7 must be rejected");
        let routing: RoutingError<()> = err.into();
        let s = format!("{routing}");
        assert!(s.contains("invalid index"));
        assert!(s.contains('7'));
    }
}
