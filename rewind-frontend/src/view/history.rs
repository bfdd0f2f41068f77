use std::io::Write;

use rewind_history::Action;

use crate::{error::AppError, model::payload::Payload, model::Model};

pub fn view_controls(model: &Model, writer: &mut impl Write) -> Result<(), AppError> {
    let undo = if model.history.can_undo() { "u" } else { "-" };
    let redo = if model.history.can_redo() { "U" } else { "-" };

    writeln!(writer, "[{}] undo  [{}] redo  [a] add  [?] help  [q] quit", undo, redo)?;

    Ok(())
}

pub fn view_active(model: &Model, writer: &mut impl Write) -> Result<(), AppError> {
    let active = model.history.active_entries();
    writeln!(writer, "Active State ({} Items)", active.len())?;

    if active.is_empty() {
        writeln!(writer, "  Initial State (Empty)")?;
    }

    // newest on top
    for (index, action) in active.iter().enumerate().rev() {
        let marker = (index + 1).to_string();
        view_action(model, writer, action, &marker)?;
    }

    Ok(())
}

pub fn view_future(model: &Model, writer: &mut impl Write) -> Result<(), AppError> {
    let future = model.history.future_entries();
    writeln!(writer, "Redo Stack ({} Items)", future.len())?;

    if future.is_empty() {
        writeln!(writer, "  No actions to redo")?;
    }

    // next redo at the bottom, closest to the active state
    for action in future.iter().rev() {
        view_action(model, writer, action, "redo")?;
    }

    Ok(())
}

fn view_action(
    model: &Model,
    writer: &mut impl Write,
    action: &Action<Payload>,
    marker: &str,
) -> Result<(), AppError> {
    let payload = action.payload();
    if model.settings.show_ids {
        writeln!(
            writer,
            "  {:>4}  {:<8} {:<20} {}",
            marker,
            payload.color.to_string(),
            payload.label,
            action.id()
        )?;
    } else {
        writeln!(
            writer,
            "  {:>4}  {:<8} {}",
            marker,
            payload.color.to_string(),
            payload.label
        )?;
    }

    Ok(())
}
