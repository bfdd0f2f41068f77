use std::{fmt::Display, time};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ActionId(u64);

impl ActionId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing ids, starting with 1. Ids are never reused, even if
/// the action they were assigned to got discarded.
#[derive(Clone, Debug, Default)]
pub(crate) struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub(crate) fn next_id(&mut self) -> ActionId {
        self.last += 1;
        ActionId(self.last)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Action<P> {
    id: ActionId,
    payload: P,
    created_at: u128,
}

impl<P> Action<P> {
    pub(crate) fn new(id: ActionId, payload: P) -> Self {
        let created_at = match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
            Ok(time) => time.as_millis(),
            Err(_) => 0,
        };

        Self {
            id,
            payload,
            created_at,
        }
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Milliseconds since the unix epoch.
    pub fn created_at(&self) -> u128 {
        self.created_at
    }
}

#[cfg(test)]
mod test {
    use super::IdSequence;

    #[test]
    fn id_sequence_is_strictly_increasing() {
        let mut sequence = IdSequence::default();
        let first = sequence.next_id();
        let second = sequence.next_id();
        let third = sequence.next_id();

        assert_eq!(first.value(), 1);
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn action_keeps_payload_and_timestamp() {
        let mut sequence = IdSequence::default();
        let action = super::Action::new(sequence.next_id(), "payload");

        assert_eq!(action.payload(), &"payload");
        assert_eq!(action.id().to_string(), "#1");
        assert!(action.created_at() > 0);
    }
}
