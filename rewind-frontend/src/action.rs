#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Quit,
    SkipRender,
}

#[derive(Debug, Eq, PartialEq)]
pub enum ActionResult {
    Normal,
    Quit,
    SkipRender,
}

pub fn exec(actions: Vec<Action>) -> ActionResult {
    let mut result = ActionResult::Normal;
    for action in actions {
        tracing::trace!("executing action: {:?}", action);

        match action {
            Action::Quit => result = ActionResult::Quit,
            Action::SkipRender => {
                if result == ActionResult::Normal {
                    result = ActionResult::SkipRender;
                }
            }
        }
    }

    result
}
