use std::collections::VecDeque;

use crate::key::Key;

pub fn from_keycode_string(keycodes: &str) -> VecDeque<Key> {
    let mut keys = VecDeque::new();

    let regex = match regex::Regex::new(r"<[^>]*>|.") {
        Ok(it) => it,
        Err(error) => {
            tracing::error!("compiling keycode regex failed: {:?}", error);
            return keys;
        }
    };

    for capture in regex.find_iter(keycodes).map(|m| m.as_str()) {
        if let Some(key) = Key::from_keycode_string(capture) {
            keys.push_back(key);
        } else {
            tracing::trace!("skipping unknown keycode: {:?}", capture);
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{KeyCode, KeyModifier};

    #[test]
    fn from_keycode_string_empty() {
        let expected: VecDeque<Key> = VecDeque::new();
        assert_eq!(from_keycode_string(""), expected);
    }

    #[test]
    fn from_keycode_string_single() {
        let mut expected: VecDeque<Key> = VecDeque::new();
        expected.push_back(Key::new(KeyCode::Esc, Vec::new()));
        assert_eq!(from_keycode_string("<esc>"), expected);
    }

    #[test]
    fn from_keycode_string_multiple() {
        let mut expected: VecDeque<Key> = VecDeque::new();
        expected.push_back(Key::new(KeyCode::from_char('3'), Vec::new()));
        expected.push_back(Key::new(KeyCode::from_char('u'), Vec::new()));
        expected.push_back(Key::new(KeyCode::from_char('y'), vec![KeyModifier::Ctrl]));
        expected.push_back(Key::new(KeyCode::from_char('u'), vec![KeyModifier::Shift]));
        expected.push_back(Key::new(KeyCode::Enter, Vec::new()));
        assert_eq!(from_keycode_string("3u<C-y>U<cr>"), expected);
    }

    #[test]
    fn from_keycode_string_unclosed_less_than() {
        let mut expected: VecDeque<Key> = VecDeque::new();
        expected.push_back(Key::new(KeyCode::from_char('a'), Vec::new()));
        expected.push_back(Key::new(KeyCode::LessThan, Vec::new()));
        expected.push_back(Key::new(KeyCode::from_char('u'), Vec::new()));
        assert_eq!(from_keycode_string("a<u"), expected);
    }

    #[test]
    fn from_keycode_string_invalid() {
        assert!(from_keycode_string("<Invalid>").is_empty());
    }
}
