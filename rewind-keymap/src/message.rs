#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub kind: BindingKind,
    pub repeat: Option<usize>,
    pub repeatable: bool,
}

impl Default for Binding {
    fn default() -> Self {
        Self {
            kind: BindingKind::default(),
            repeat: None,
            repeatable: true,
        }
    }
}

impl Binding {
    pub fn from_message(message: KeymapMessage) -> Self {
        Self {
            kind: BindingKind::Message(message),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BindingKind {
    Message(KeymapMessage),
    #[default]
    None,
    Repeat,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySequence {
    Completed(String),
    Changed(String),
    None,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    AddAction,
    Print(Vec<PrintContent>),
    Quit,
    Redo,
    Undo,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrintContent {
    Default(String),
    Error(String),
    Information(String),
}
