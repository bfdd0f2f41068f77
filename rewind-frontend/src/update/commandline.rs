use rewind_keymap::message::PrintContent;

use crate::model::Model;

pub fn clear(model: &mut Model) {
    model.commandline.clear();
}

/// Repeated content is only shown once, e.g. for every no-op of `20u`.
pub fn print(model: &mut Model, content: &[PrintContent]) {
    for line in content {
        if !model.commandline.contains(line) {
            model.commandline.push(line.clone());
        }
    }
}
