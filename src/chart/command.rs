//! Definitions of command argument data.
//!
//! Structures in this module are shared by the [lex](crate::chart::lex) part, the [parse](crate::chart::parse) part, and the output models.

pub mod event_type;
pub mod mixin;
pub mod time;

use thiserror::Error;

/// A selector value outside of the known enumeration was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("`{value}` is not a defined value of {enumeration}")]
pub struct UndefinedEnumValue {
    /// The name of the enumeration.
    pub enumeration: &'static str,
    /// The offending value, formatted.
    pub value: String,
}

impl UndefinedEnumValue {
    pub(crate) fn new(enumeration: &'static str, value: impl ToString) -> Self {
        Self {
            enumeration,
            value: value.to_string(),
        }
    }
}

/// A difficulty of the track. Each instrument has at most one track per difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// `Easy` prefix.
    Easy,
    /// `Medium` prefix.
    Medium,
    /// `Hard` prefix.
    Hard,
    /// `Expert` prefix.
    Expert,
}

impl Difficulty {
    /// All the difficulties, in the order of their ordinals.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// The ordinal of the difficulty, used to index the tracks of an instrument.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The prefix of the section name.
    #[must_use]
    pub const fn section_prefix(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = UndefinedEnumValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| UndefinedEnumValue::new("Difficulty", value))
    }
}

impl std::str::FromStr for Difficulty {
    type Err = UndefinedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.section_prefix().eq_ignore_ascii_case(s))
            .ok_or_else(|| UndefinedEnumValue::new("Difficulty", s))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.section_prefix())
    }
}

/// Every instrument which has its own sections in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruments {
    /// Drums, `Drums`.
    Drums,
    /// Six-fret guitar, `GHLGuitar`.
    GhlGuitar,
    /// Six-fret bass, `GHLBass`.
    GhlBass,
    /// Five-fret lead guitar, `Single`.
    LeadGuitar,
    /// Five-fret rhythm guitar, `DoubleRhythm`.
    RhythmGuitar,
    /// Five-fret co-op guitar, `DoubleGuitar`.
    CoopGuitar,
    /// Five-fret bass, `DoubleBass`.
    Bass,
    /// Five-fret keys, `Keyboard`.
    Keys,
}

impl Instruments {
    /// All the instruments, in the order of their ordinals.
    pub const ALL: [Self; 8] = [
        Self::Drums,
        Self::GhlGuitar,
        Self::GhlBass,
        Self::LeadGuitar,
        Self::RhythmGuitar,
        Self::CoopGuitar,
        Self::Bass,
        Self::Keys,
    ];

    /// The name of the instrument part, which follows the difficulty prefix in section names.
    #[must_use]
    pub const fn part_name(self) -> &'static str {
        match self {
            Self::Drums => "Drums",
            Self::GhlGuitar => "GHLGuitar",
            Self::GhlBass => "GHLBass",
            Self::LeadGuitar => "Single",
            Self::RhythmGuitar => "DoubleRhythm",
            Self::CoopGuitar => "DoubleGuitar",
            Self::Bass => "DoubleBass",
            Self::Keys => "Keyboard",
        }
    }

    /// The full section name of the track for `difficulty`, such as `ExpertSingle`.
    #[must_use]
    pub fn section_name(self, difficulty: Difficulty) -> String {
        format!("{}{}", difficulty.section_prefix(), self.part_name())
    }
}

impl TryFrom<u8> for Instruments {
    type Error = UndefinedEnumValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| UndefinedEnumValue::new("Instruments", value))
    }
}

impl std::str::FromStr for Instruments {
    type Err = UndefinedEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|instrument| instrument.part_name() == s)
            .ok_or_else(|| UndefinedEnumValue::new("Instruments", s))
    }
}

impl std::fmt::Display for Instruments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.part_name())
    }
}

/// A six-fret instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GhlInstrument {
    /// `GHLGuitar`.
    Guitar,
    /// `GHLBass`.
    Bass,
}

impl GhlInstrument {
    /// All the six-fret instruments.
    pub const ALL: [Self; 2] = [Self::Guitar, Self::Bass];

    /// The ordinal of the instrument.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<GhlInstrument> for Instruments {
    fn from(value: GhlInstrument) -> Self {
        match value {
            GhlInstrument::Guitar => Self::GhlGuitar,
            GhlInstrument::Bass => Self::GhlBass,
        }
    }
}

impl TryFrom<Instruments> for GhlInstrument {
    type Error = UndefinedEnumValue;

    fn try_from(value: Instruments) -> Result<Self, Self::Error> {
        match value {
            Instruments::GhlGuitar => Ok(Self::Guitar),
            Instruments::GhlBass => Ok(Self::Bass),
            other => Err(UndefinedEnumValue::new("GhlInstrument", other)),
        }
    }
}

/// A five-fret instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardInstrument {
    /// `Single`.
    LeadGuitar,
    /// `DoubleRhythm`.
    RhythmGuitar,
    /// `DoubleGuitar`.
    CoopGuitar,
    /// `DoubleBass`.
    Bass,
    /// `Keyboard`.
    Keys,
}

impl StandardInstrument {
    /// All the five-fret instruments.
    pub const ALL: [Self; 5] = [
        Self::LeadGuitar,
        Self::RhythmGuitar,
        Self::CoopGuitar,
        Self::Bass,
        Self::Keys,
    ];

    /// The ordinal of the instrument.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<StandardInstrument> for Instruments {
    fn from(value: StandardInstrument) -> Self {
        match value {
            StandardInstrument::LeadGuitar => Self::LeadGuitar,
            StandardInstrument::RhythmGuitar => Self::RhythmGuitar,
            StandardInstrument::CoopGuitar => Self::CoopGuitar,
            StandardInstrument::Bass => Self::Bass,
            StandardInstrument::Keys => Self::Keys,
        }
    }
}

impl TryFrom<Instruments> for StandardInstrument {
    type Error = UndefinedEnumValue;

    fn try_from(value: Instruments) -> Result<Self, Self::Error> {
        match value {
            Instruments::LeadGuitar => Ok(Self::LeadGuitar),
            Instruments::RhythmGuitar => Ok(Self::RhythmGuitar),
            Instruments::CoopGuitar => Ok(Self::CoopGuitar),
            Instruments::Bass => Ok(Self::Bass),
            Instruments::Keys => Ok(Self::Keys),
            other => Err(UndefinedEnumValue::new("StandardInstrument", other)),
        }
    }
}
