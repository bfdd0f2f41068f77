use std::io::Write;

use crate::{error::AppError, model::Model};

mod commandline;
mod history;

pub fn render_model(writer: &mut impl Write, model: &Model) -> Result<(), AppError> {
    history::view_controls(model, writer)?;
    history::view_active(model, writer)?;
    history::view_future(model, writer)?;
    commandline::view(model, writer)?;

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use rewind_keymap::message::PrintContent;

    use crate::{model::Model, settings::Settings, update::history};

    fn render(model: &Model) -> String {
        let mut output = Vec::new();
        super::render_model(&mut output, model).expect("rendering into vec");
        String::from_utf8(output).expect("utf8 output")
    }

    #[test]
    fn render_empty_model() {
        let model = Model::new(Settings::default());
        let output = render(&model);

        assert!(output.contains("[-] undo"));
        assert!(output.contains("[-] redo"));
        assert!(output.contains("Active State (0 Items)"));
        assert!(output.contains("Initial State (Empty)"));
        assert!(output.contains("Redo Stack (0 Items)"));
        assert!(output.contains("No actions to redo"));
    }

    #[test]
    fn render_after_undo() {
        let mut model = Model::new(Settings {
            seed: Some(11),
            ..Default::default()
        });
        history::add(&mut model);
        history::add(&mut model);
        history::undo(&mut model);

        let output = render(&model);
        let future_label = &model.history.future_entries()[0].payload().label;

        assert!(output.contains("[u] undo"));
        assert!(output.contains("[U] redo"));
        assert!(output.contains("Active State (1 Items)"));
        assert!(output.contains("Redo Stack (1 Items)"));
        assert!(output.contains(future_label.as_str()));
        assert!(output.contains("#2"));
        assert!(!output.contains("No actions to redo"));
    }

    #[test]
    fn render_without_ids() {
        let mut model = Model::new(Settings {
            seed: Some(11),
            show_ids: false,
            ..Default::default()
        });
        history::add(&mut model);

        let output = render(&model);
        let payload = model.history.active_entries()[0].payload();
        let expected = format!("     1  {:<8} {}\n", payload.color.to_string(), payload.label);

        assert!(output.contains(&expected));
    }

    #[test]
    fn render_commandline_content() {
        let mut model = Model::new(Settings::default());
        model.commandline = vec![
            PrintContent::Default("u, <C-z>          undo".to_string()),
            PrintContent::Information("Already at oldest change".to_string()),
        ];
        model.key_sequence = "3".to_string();

        let output = render(&model);

        assert!(output.contains("\nu, <C-z>          undo\n"));
        assert!(output.contains("info: Already at oldest change\n"));
        assert!(output.ends_with("pending: 3\n"));
    }
}
