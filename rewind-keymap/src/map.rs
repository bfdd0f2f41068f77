use crate::{
    key::{Key, KeyCode, KeyModifier},
    message::{Binding, BindingKind, KeymapMessage, PrintContent},
    tree::KeyTree,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: Vec<(Vec<Key>, Binding)>,
}

impl KeyMap {
    pub fn into_tree(self) -> KeyTree {
        let mut tree = KeyTree::default();
        for (keys, binding) in self.mappings {
            if let Err(error) = tree.add_mapping(&keys, binding) {
                tracing::warn!("adding key mapping failed: {}", error);
            }
        }
        tree
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut mappings = Vec::new();

        for key in [
            Key::new(KeyCode::from_char('a'), vec![]),
            Key::new(KeyCode::from_char('o'), vec![]),
            Key::new(KeyCode::Enter, vec![]),
        ] {
            mappings.push((vec![key], Binding::from_message(KeymapMessage::AddAction)));
        }

        for key in [
            Key::new(KeyCode::from_char('u'), vec![]),
            Key::new(KeyCode::from_char('z'), vec![KeyModifier::Ctrl]),
        ] {
            mappings.push((vec![key], Binding::from_message(KeymapMessage::Undo)));
        }

        for key in [
            Key::new(KeyCode::from_char('r'), vec![KeyModifier::Ctrl]),
            Key::new(KeyCode::from_char('y'), vec![KeyModifier::Ctrl]),
            Key::new(KeyCode::from_char('u'), vec![KeyModifier::Shift]),
        ] {
            mappings.push((vec![key], Binding::from_message(KeymapMessage::Redo)));
        }

        for key in [
            Key::new(KeyCode::from_char('q'), vec![]),
            Key::new(KeyCode::from_char('c'), vec![KeyModifier::Ctrl]),
        ] {
            mappings.push((
                vec![key],
                Binding {
                    kind: BindingKind::Message(KeymapMessage::Quit),
                    repeatable: false,
                    ..Default::default()
                },
            ));
        }

        mappings.push((
            vec![Key::new(KeyCode::from_char('?'), vec![])],
            Binding {
                kind: BindingKind::Message(KeymapMessage::Print(help())),
                repeatable: false,
                ..Default::default()
            },
        ));

        for digit in 0..=9 {
            let Some(c) = char::from_digit(digit, 10) else {
                continue;
            };

            mappings.push((
                vec![Key::new(KeyCode::from_char(c), vec![])],
                Binding {
                    kind: BindingKind::Repeat,
                    repeat: Some(digit as usize),
                    ..Default::default()
                },
            ));
        }

        Self { mappings }
    }
}

fn help() -> Vec<PrintContent> {
    [
        "a, o, <cr>        add action",
        "u, <C-z>          undo",
        "U, <C-r>, <C-y>   redo",
        "[count]           repeat the next command, e.g. 3u",
        "<esc>             cancel a pending count",
        "q, <C-c>          quit",
    ]
    .into_iter()
    .map(|line| PrintContent::Default(line.to_string()))
    .collect()
}
