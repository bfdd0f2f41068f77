use std::io::Write;

use rewind_keymap::message::PrintContent;

use crate::{error::AppError, model::Model};

pub fn view(model: &Model, writer: &mut impl Write) -> Result<(), AppError> {
    for content in &model.commandline {
        match content {
            PrintContent::Default(text) => writeln!(writer, "{}", text)?,
            PrintContent::Error(text) => writeln!(writer, "error: {}", text)?,
            PrintContent::Information(text) => writeln!(writer, "info: {}", text)?,
        }
    }

    if !model.key_sequence.is_empty() {
        writeln!(writer, "pending: {}", model.key_sequence)?;
    }

    Ok(())
}
