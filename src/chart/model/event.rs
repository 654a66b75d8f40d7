//! Definitions of the events on the timeline.

use std::marker::PhantomData;

use crate::chart::command::{
    event_type::{EventKind, GlobalEventType, LocalEventType},
    time::TickPosition,
};

/// An event placed on the timeline.
///
/// The raw type token is kept as is, so an event of an unknown type is written back unchanged.
/// Its classification is looked up in the table of `K` on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event<K> {
    /// Where the event is placed.
    pub position: TickPosition,
    /// The raw type token, such as `section` or `solo`.
    pub event_type_string: String,
    /// The rest of the event text, if any.
    pub argument: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    _kind: PhantomData<fn() -> K>,
}

/// An event in the `Events` section, shared by all the instruments.
pub type GlobalEvent = Event<GlobalEventType>;
/// An event in an instrument track.
pub type LocalEvent = Event<LocalEventType>;

impl<K: EventKind> Event<K> {
    /// Creates an event of the known type.
    pub fn new(position: TickPosition, event_type: K, argument: Option<String>) -> Self {
        Self::from_raw(position, event_type.token(), argument)
    }

    /// Creates an event from the raw type token.
    pub fn from_raw(
        position: TickPosition,
        event_type_string: impl Into<String>,
        argument: Option<String>,
    ) -> Self {
        Self {
            position,
            event_type_string: event_type_string.into(),
            argument,
            _kind: PhantomData,
        }
    }

    /// Classifies the type token.
    #[must_use]
    pub fn event_type(&self) -> K {
        K::from_token(&self.event_type_string)
    }

    /// Replaces the type token with the canonical token of `event_type`.
    pub fn set_event_type(&mut self, event_type: K) {
        self.event_type_string = event_type.token().to_string();
    }

    /// Returns the text of the event, the type token followed by the argument.
    #[must_use]
    pub fn text(&self) -> String {
        match &self.argument {
            Some(argument) => format!("{} {argument}", self.event_type_string),
            None => self.event_type_string.clone(),
        }
    }

    /// Returns true if the events are at the same position with the same type token.
    #[must_use]
    pub fn is_same_event(&self, other: &Self) -> bool {
        self.position == other.position && self.event_type_string == other.event_type_string
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        let event = GlobalEvent::from_raw(TickPosition(0), "section", Some("Intro".into()));
        assert_eq!(event.event_type(), GlobalEventType::Section);
        assert_eq!(event.text(), "section Intro");

        let mut event = LocalEvent::from_raw(TickPosition(0), "guitar_face", None);
        assert_eq!(event.event_type(), LocalEventType::Unknown);
        event.set_event_type(LocalEventType::Unknown);
        assert_eq!(event.event_type_string, "Default");
        event.set_event_type(LocalEventType::Solo);
        assert_eq!(event.event_type_string, "solo");
    }
}
