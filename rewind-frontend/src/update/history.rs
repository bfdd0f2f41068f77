use rewind_history::Navigation;
use rewind_keymap::message::PrintContent;

use crate::{model::Model, update::commandline};

pub fn add(model: &mut Model) {
    let discarded = model.history.future_count();
    let payload = model.factory.create();
    let action = model.history.append(payload);

    tracing::debug!(
        "appended action {} ({}), discarded {} future actions",
        action.id(),
        action.payload().label,
        discarded
    );
}

pub fn undo(model: &mut Model) {
    match model.history.undo() {
        Navigation::Moved(cursor) => tracing::trace!("undo moved cursor to {:?}", cursor),
        Navigation::Unchanged => commandline::print(
            model,
            &[PrintContent::Information(
                "Already at oldest change".to_string(),
            )],
        ),
    }
}

pub fn redo(model: &mut Model) {
    match model.history.redo() {
        Navigation::Moved(cursor) => tracing::trace!("redo moved cursor to {:?}", cursor),
        Navigation::Unchanged => commandline::print(
            model,
            &[PrintContent::Information(
                "Already at newest change".to_string(),
            )],
        ),
    }
}

#[cfg(test)]
mod test {
    use rewind_keymap::message::PrintContent;

    use crate::{model::Model, settings::Settings};

    fn labels(actions: &[rewind_history::Action<crate::model::payload::Payload>]) -> Vec<String> {
        actions
            .iter()
            .map(|action| action.payload().label.clone())
            .collect()
    }

    #[test]
    fn undo_on_empty_history_prints_once() {
        let mut model = Model::new(Settings::default());
        super::undo(&mut model);
        super::undo(&mut model);

        assert_eq!(
            model.commandline,
            vec![PrintContent::Information(
                "Already at oldest change".to_string()
            )]
        );
        assert_eq!(model.history.cursor(), None);
    }

    #[test]
    fn redo_at_tip_prints_information() {
        let mut model = Model::new(Settings::default());
        super::add(&mut model);
        super::redo(&mut model);

        assert_eq!(
            model.commandline,
            vec![PrintContent::Information(
                "Already at newest change".to_string()
            )]
        );
    }

    #[test]
    fn add_after_undo_discards_future() {
        let mut model = Model::new(Settings {
            seed: Some(3),
            ..Default::default()
        });

        super::add(&mut model);
        super::add(&mut model);
        super::add(&mut model);
        let first = labels(&model.history.active_entries()[..1]);

        super::undo(&mut model);
        super::undo(&mut model);
        assert_eq!(model.history.future_count(), 2);

        super::add(&mut model);
        assert_eq!(model.history.active_count(), 2);
        assert!(model.history.future_entries().is_empty());
        assert_eq!(labels(&model.history.active_entries()[..1]), first);
        assert!(model.commandline.is_empty());
    }
}
