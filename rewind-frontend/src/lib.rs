use std::io::Write;

use action::ActionResult;
use error::AppError;
use event::{Emitter, Message};
use model::Model;
use rewind_keymap::message::KeymapMessage;
use settings::Settings;
use task::Task;
use view::render_model;

mod action;
pub mod error;
mod event;
mod model;
pub mod settings;
mod task;
mod update;
mod view;

/// Runs the update loop until quit, rendering every processed batch into `writer`.
pub async fn run(settings: Settings, writer: &mut impl Write) -> Result<(), AppError> {
    let mut emitter = Emitter::start(settings.interactive);

    if let Some(keys) = &settings.startup_keys {
        emitter.run(Task::ExecuteKeySequence(keys.to_owned()));
    }

    if !settings.interactive {
        emitter.run(Task::EmitMessages(vec![Message::Keymap(
            KeymapMessage::Quit,
        )]));
    }

    let model = Model::new(settings);

    tracing::debug!("starting with model state: {:?}", model);

    let result = run_loop(&mut emitter, model, writer).await;

    let mut errors = Vec::new();
    if let Err(error) = result {
        errors.push(error);
    }

    if let Err(error) = emitter.shutdown().await {
        errors.push(error);
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(AppError::Aggregate(errors)),
    }
}

async fn run_loop(
    emitter: &mut Emitter,
    mut model: Model,
    writer: &mut impl Write,
) -> Result<(), AppError> {
    if model.settings.interactive {
        render_model(writer, &model)?;
    }

    while let Some(batch) = emitter.receiver.recv().await {
        for envelope in &batch {
            tracing::debug!(
                "received messages from {:?}: {:?}",
                envelope.source,
                envelope.messages
            );
        }

        let actions = update::update(&mut model, &batch);
        match action::exec(actions) {
            ActionResult::Normal => render_model(writer, &model)?,
            ActionResult::Quit => break,
            ActionResult::SkipRender => {}
        }
    }

    tracing::debug!(
        "closing with {} active and {} future actions",
        model.history.active_count(),
        model.history.future_count()
    );

    Ok(())
}
