//! Per-source logical state.

use platform::InputType;

/// Stored state of one audio source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct SourceState {
    /// Selected input feed, analog by default.
    pub(crate) input: InputType,
}

impl SourceState {
    pub(crate) fn new() -> Self {
        Self {
            input: InputType::Analog,
        }
    }
}
