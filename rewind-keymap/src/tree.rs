use std::{collections::HashMap, slice::Iter};

use crate::{key::Key, message::Binding, KeyMapError};

#[derive(Debug)]
pub struct KeyTree {
    root: Node,
}

impl Default for KeyTree {
    fn default() -> Self {
        Self {
            root: Node::Key(HashMap::new()),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Node {
    Binding(Binding),
    Key(HashMap<Key, Node>),
}

impl KeyTree {
    pub fn add_mapping(&mut self, keys: &[Key], binding: Binding) -> Result<(), KeyMapError> {
        if keys.is_empty() {
            return Err(KeyMapError::MappingInvalid(String::new()));
        }

        let mut iter = keys.iter();
        add_mapping_node(&mut iter, &mut self.root, binding, keys)
    }

    pub fn get_binding(&self, keys: &[Key]) -> Result<(Binding, Vec<Key>), KeyMapError> {
        let mut iter = keys.iter();
        match get_bindings_from_node(&self.root, &mut iter)? {
            Node::Binding(binding) => Ok((binding.clone(), iter.cloned().collect())),
            Node::Key(_) => Err(KeyMapError::KeySequenceIncomplete),
        }
    }
}

fn add_mapping_node(
    iter: &mut Iter<'_, Key>,
    node: &mut Node,
    binding: Binding,
    keys: &[Key],
) -> Result<(), KeyMapError> {
    let map = match node {
        Node::Key(map) => map,
        Node::Binding(_) => return Err(KeyMapError::MappingInvalid(to_keycode_string(keys))),
    };

    let key = match iter.next() {
        Some(it) => it,
        None => return Err(KeyMapError::MappingInvalid(to_keycode_string(keys))),
    };

    if iter.len() == 0 {
        if map.contains_key(key) {
            return Err(KeyMapError::MappingInvalid(to_keycode_string(keys)));
        }

        map.insert(key.clone(), Node::Binding(binding));
        return Ok(());
    }

    let next = map
        .entry(key.clone())
        .or_insert_with(|| Node::Key(HashMap::new()));

    add_mapping_node(iter, next, binding, keys)
}

fn get_bindings_from_node<'a>(
    node: &'a Node,
    iter: &mut Iter<'_, Key>,
) -> Result<&'a Node, KeyMapError> {
    match node {
        Node::Binding(_) => Ok(node),
        Node::Key(map) => {
            let key = match iter.next() {
                Some(it) => it,
                None => return Ok(node),
            };

            match map.get(key) {
                Some(node) => get_bindings_from_node(node, iter),
                None => Err(KeyMapError::NoValidBindingFound),
            }
        }
    }
}

pub(crate) fn to_keycode_string(keys: &[Key]) -> String {
    keys.iter().map(|key| key.to_keycode_string()).collect()
}
