use std::collections::VecDeque;

use key::{Key, KeyCode};
use map::KeyMap;
use message::{Binding, BindingKind, KeySequence, KeymapMessage};
use tree::KeyTree;

pub mod conversion;
pub mod key;
mod map;
pub mod message;
mod tree;

const MAX_REPEAT: usize = 9999;

#[derive(Debug, thiserror::Error, PartialEq)]
enum KeyMapError {
    #[error("Key sequence is incomplete.")]
    KeySequenceIncomplete,
    #[error("Failed to add mapping for keys {0}.")]
    MappingInvalid(String),
    #[error("Failed to resolve valid binding.")]
    NoValidBindingFound,
    #[error("No keys left.")]
    NoKeysRemaining,
}

#[derive(Debug)]
pub struct MessageResolver {
    pending: Vec<Key>,
    tree: KeyTree,
}

impl Default for MessageResolver {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            tree: KeyMap::default().into_tree(),
        }
    }
}

impl MessageResolver {
    /// Resolves keys one by one. Every completed sequence gets its own entry, a
    /// sequence still pending after the last key is appended as `Changed`.
    pub fn add_keys(
        &mut self,
        mut keys: VecDeque<Key>,
    ) -> Vec<(Vec<KeymapMessage>, KeySequence)> {
        let mut resolved = Vec::new();
        let mut pending = None;
        while let Some(key) = keys.pop_front() {
            match self.add_key(key) {
                (messages, KeySequence::Completed(sequence)) => {
                    pending = None;
                    resolved.push((messages, KeySequence::Completed(sequence)));
                }
                (_, KeySequence::Changed(sequence)) => pending = Some(sequence),
                (_, KeySequence::None) => {}
            }
        }

        if let Some(sequence) = pending {
            resolved.push((Vec::new(), KeySequence::Changed(sequence)));
        }

        resolved
    }

    pub fn add_key(&mut self, key: Key) -> (Vec<KeymapMessage>, KeySequence) {
        if key.code == KeyCode::Esc {
            if self.pending.is_empty() {
                return (Vec::new(), KeySequence::None);
            }

            tracing::trace!(
                "cancelling pending sequence {:?}",
                tree::to_keycode_string(&self.pending)
            );

            self.pending.clear();
            return (Vec::new(), KeySequence::Changed(String::new()));
        }

        self.pending.push(key);

        let binding = resolve_binding(&self.tree, &self.pending, None);
        let sequence = tree::to_keycode_string(&self.pending);

        match binding {
            Ok(binding) => {
                self.pending.clear();
                (
                    get_messages_from_binding(binding),
                    KeySequence::Completed(sequence),
                )
            }
            Err(KeyMapError::KeySequenceIncomplete) => (Vec::new(), KeySequence::Changed(sequence)),
            Err(error) => {
                tracing::trace!("resolving {:?} failed: {}", sequence, error);

                self.pending.clear();
                (Vec::new(), KeySequence::Completed(sequence))
            }
        }
    }
}

fn resolve_binding(
    tree: &KeyTree,
    keys: &[Key],
    count: Option<usize>,
) -> Result<Binding, KeyMapError> {
    if keys.is_empty() {
        return Err(KeyMapError::NoKeysRemaining);
    }

    let (mut binding, unused_keys) = tree.get_binding(keys)?;
    if binding.kind == BindingKind::Repeat {
        let digit = binding.repeat.unwrap_or_default();
        let count = match count {
            Some(count) => count
                .checked_mul(10)
                .and_then(|shifted| shifted.checked_add(digit))
                .map_or(MAX_REPEAT, |count| count.min(MAX_REPEAT)),
            // a count never starts with zero
            None if digit == 0 => return Err(KeyMapError::NoValidBindingFound),
            None => digit,
        };

        return match resolve_binding(tree, &unused_keys, Some(count)) {
            Err(KeyMapError::NoKeysRemaining) => Err(KeyMapError::KeySequenceIncomplete),
            result => result,
        };
    }

    if binding.repeatable && count.is_some() {
        binding.repeat = count;
    }

    Ok(binding)
}

fn get_messages_from_binding(binding: Binding) -> Vec<KeymapMessage> {
    let repeat = binding.repeat.unwrap_or(1).min(MAX_REPEAT);
    match binding.kind {
        BindingKind::Message(msg) => {
            if binding.repeatable {
                vec![msg; repeat]
            } else {
                vec![msg]
            }
        }
        BindingKind::None | BindingKind::Repeat => Vec::new(),
    }
}
