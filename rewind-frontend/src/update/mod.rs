use rewind_keymap::message::{KeySequence, KeymapMessage, PrintContent};

use crate::{
    action::Action,
    event::{Envelope, Message},
    model::Model,
};

mod commandline;
pub mod history;

#[tracing::instrument(skip(model))]
pub fn update(model: &mut Model, batch: &[Envelope]) -> Vec<Action> {
    if batch.iter().all(is_empty) {
        return vec![Action::SkipRender];
    }

    if batch.iter().any(completes_command) {
        commandline::clear(model);
    }

    batch
        .iter()
        .flat_map(|envelope| update_with_envelope(model, envelope))
        .collect()
}

fn is_empty(envelope: &Envelope) -> bool {
    envelope.messages.is_empty() && envelope.sequence == KeySequence::None
}

fn completes_command(envelope: &Envelope) -> bool {
    !envelope.messages.is_empty() || matches!(envelope.sequence, KeySequence::Completed(_))
}

fn update_with_envelope(model: &mut Model, envelope: &Envelope) -> Vec<Action> {
    match &envelope.sequence {
        KeySequence::Completed(_) => model.key_sequence.clear(),
        KeySequence::Changed(sequence) => model.key_sequence = sequence.to_owned(),
        KeySequence::None => {}
    };

    if envelope.messages.is_empty() {
        if let KeySequence::Completed(sequence) = &envelope.sequence {
            commandline::print(
                model,
                &[PrintContent::Information(format!(
                    "No mapping for {}",
                    sequence
                ))],
            );
        }
    }

    envelope
        .messages
        .iter()
        .flat_map(|message| update_with_message(model, message))
        .collect()
}

fn update_with_message(model: &mut Model, message: &Message) -> Vec<Action> {
    match message {
        Message::Keymap(KeymapMessage::AddAction) => {
            history::add(model);
            Vec::new()
        }
        Message::Keymap(KeymapMessage::Print(content)) => {
            commandline::print(model, content);
            Vec::new()
        }
        Message::Keymap(KeymapMessage::Quit) => vec![Action::Quit],
        Message::Keymap(KeymapMessage::Redo) => {
            history::redo(model);
            Vec::new()
        }
        Message::Keymap(KeymapMessage::Undo) => {
            history::undo(model);
            Vec::new()
        }
        Message::Error(error) => {
            commandline::print(model, &[PrintContent::Error(error.to_string())]);
            Vec::new()
        }
    }
}
