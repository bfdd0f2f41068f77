use std::{collections::VecDeque, fmt::Display, hash::Hash};

#[derive(Clone, Debug, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Vec<KeyModifier>,
}

impl Key {
    pub fn new(key: KeyCode, mut modifiers: Vec<KeyModifier>) -> Self {
        modifiers.sort();
        modifiers.dedup();

        Self {
            code: key,
            modifiers,
        }
    }

    /// Sorted and without duplicates, so `<C-C-z>` and `<C-z>` are the same key.
    fn normalized_modifiers(&self) -> Vec<KeyModifier> {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();
        modifiers.dedup();
        modifiers
    }

    pub fn to_keycode_string(&self) -> String {
        let mut modifiers = self.normalized_modifiers();

        match self.code {
            KeyCode::Char(_) => {
                if modifiers.contains(&KeyModifier::Shift) {
                    modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                    get_key_string(self.code.to_string().to_uppercase(), modifiers, false)
                } else {
                    get_key_string(self.code.to_string(), modifiers, false)
                }
            }
            _ => get_key_string(self.code.to_string(), modifiers, true),
        }
    }

    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        // a single < is never a group
        if keycode == "<" {
            return Some(Self::new(KeyCode::LessThan, Vec::new()));
        }

        let regex = regex::Regex::new(r"[^-<>]+|^-$|--").ok()?;
        let mut codes = regex
            .find_iter(keycode)
            .map(|m| m.as_str())
            .collect::<VecDeque<_>>();

        let mut modifiers = Vec::new();
        let mut last = codes.pop_back()?;
        if last == "--" {
            last = "-";
        }

        if last.chars().count() == 1 && last.chars().last()?.is_ascii_uppercase() {
            modifiers.push(KeyModifier::Shift);
        }

        for modifier in codes {
            match modifier.to_ascii_uppercase().as_str() {
                "A" => modifiers.push(KeyModifier::Alt),
                "C" => modifiers.push(KeyModifier::Ctrl),
                "D" => modifiers.push(KeyModifier::Command),
                "S" => modifiers.push(KeyModifier::Shift),
                _ => (),
            }
        }

        KeyCode::from_keycode_string(last).map(|code| Self::new(code, modifiers))
    }
}

impl Hash for Key {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.normalized_modifiers().hash(state);
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.normalized_modifiers() == other.normalized_modifiers()
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut modifiers = self.normalized_modifiers();

        let string = match self.code {
            KeyCode::Char(_) => {
                if modifiers.contains(&KeyModifier::Shift) {
                    modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                    get_key_string(self.code.to_string().to_uppercase(), modifiers, false)
                } else {
                    get_key_string(self.code.to_string(), modifiers, false)
                }
            }
            KeyCode::LessThan => get_key_string(String::from("<"), modifiers, false),
            KeyCode::Space => get_key_string(String::from(" "), modifiers, false),
            _ => get_key_string(self.code.to_string(), modifiers, true),
        };

        write!(f, "{}", string)
    }
}

fn get_key_string(code: String, modifiers: Vec<KeyModifier>, force_ltgt: bool) -> String {
    if modifiers.is_empty() && !force_ltgt {
        return code;
    }

    let mut result = String::from("<");
    for modifier in modifiers {
        match modifier {
            KeyModifier::Alt => result.push_str("A-"),
            KeyModifier::Command => result.push_str("D-"),
            KeyModifier::Ctrl => result.push_str("C-"),
            KeyModifier::Shift => result.push_str("S-"),
        };
    }

    result.push_str(&code);
    result.push('>');

    result
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    Backspace,
    Char(char),
    Delete,
    Enter,
    Esc,
    LessThan,
    Space,
    Tab,
}

impl KeyCode {
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        match keycode {
            "bs" => Some(KeyCode::Backspace),
            "del" => Some(KeyCode::Delete),
            "cr" => Some(KeyCode::Enter),
            "esc" => Some(KeyCode::Esc),
            "lt" => Some(KeyCode::LessThan),
            "space" => Some(KeyCode::Space),
            "tab" => Some(KeyCode::Tab),
            code => {
                if code.chars().count() == 1 {
                    code.chars().next().map(Self::from_char)
                } else {
                    None
                }
            }
        }
    }

    pub fn from_char(c: char) -> KeyCode {
        match c {
            '<' => KeyCode::LessThan,
            ' ' => KeyCode::Space,
            '\t' => KeyCode::Tab,
            passed => KeyCode::Char(passed.to_ascii_lowercase()),
        }
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyCode::Backspace => write!(f, "bs"),
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_lowercase()),
            KeyCode::Delete => write!(f, "del"),
            KeyCode::Enter => write!(f, "cr"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::LessThan => write!(f, "lt"),
            KeyCode::Space => write!(f, "space"),
            KeyCode::Tab => write!(f, "tab"),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyModifier {
    Alt,
    Command,
    Ctrl,
    Shift,
}
