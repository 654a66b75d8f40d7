//! Definitions of time in the chart.

/// An absolute offset from the start of the song, in ticks.
///
/// The length of a tick depends on [`Metadata::resolution`](crate::chart::model::metadata::Metadata::resolution), which is the number of ticks in a beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickPosition(pub u32);

impl TickPosition {
    /// The start of the song.
    pub const ZERO: Self = Self(0);

    /// Returns the position moved forward by `length` ticks, saturating at the maximum.
    #[must_use]
    pub const fn offset(self, length: u32) -> Self {
        Self(self.0.saturating_add(length))
    }
}

impl From<u32> for TickPosition {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<TickPosition> for u32 {
    fn from(value: TickPosition) -> Self {
        value.0
    }
}

impl std::fmt::Display for TickPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TickPosition {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[test]
fn test_offset_saturates() {
    assert_eq!(TickPosition(10).offset(5), TickPosition(15));
    assert_eq!(TickPosition(u32::MAX).offset(1), TickPosition(u32::MAX));
}
