use rewind_history::HistoryStack;
use rewind_keymap::message::PrintContent;

use crate::settings::Settings;

use self::payload::{Payload, PayloadFactory};

pub mod payload;

#[derive(Debug)]
pub struct Model {
    pub commandline: Vec<PrintContent>,
    pub factory: PayloadFactory,
    pub history: HistoryStack<Payload>,
    pub key_sequence: String,
    pub settings: Settings,
}

impl Model {
    pub fn new(settings: Settings) -> Self {
        Self {
            commandline: Vec::new(),
            factory: PayloadFactory::new(settings.seed),
            history: HistoryStack::new(),
            key_sequence: String::new(),
            settings,
        }
    }
}
