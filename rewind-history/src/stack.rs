use crate::action::{Action, ActionId, IdSequence};

/// Outcome of an undo or redo. `Unchanged` marks the no-op at either end of the
/// history, so callers can keep the matching control disabled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Navigation {
    Moved(Option<usize>),
    Unchanged,
}

impl Navigation {
    pub fn is_moved(&self) -> bool {
        matches!(self, Navigation::Moved(_))
    }
}

/// Linear undo/redo history over opaque payloads.
///
/// `entries` holds every reachable action in creation order. `cursor` points at the
/// last applied action, `None` meaning nothing is applied. Everything behind the
/// cursor is the redo branch, which gets dropped as soon as a new action is appended.
///
/// ```text
/// append(a) append(b) append(c)   [a b c]    cursor: 2
/// undo() undo()                   [a|b c]    cursor: 0
/// append(d)                       [a d]      cursor: 1
/// ```
#[derive(Clone, Debug)]
pub struct HistoryStack<P> {
    cursor: Option<usize>,
    entries: Vec<Action<P>>,
    ids: IdSequence,
}

impl<P> Default for HistoryStack<P> {
    fn default() -> Self {
        Self {
            cursor: None,
            entries: Vec::new(),
            ids: IdSequence::default(),
        }
    }
}

impl<P> HistoryStack<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, payload: P) -> &Action<P> {
        let applied = self.active_count();
        if applied < self.entries.len() {
            tracing::trace!(
                "discarding {} actions of redo branch",
                self.entries.len() - applied
            );

            self.entries.truncate(applied);
        }

        let index = self.entries.len();
        self.entries.push(Action::new(self.ids.next_id(), payload));
        self.cursor = Some(index);

        &self.entries[index]
    }

    pub fn undo(&mut self) -> Navigation {
        let cursor = match self.cursor {
            Some(0) => None,
            Some(cursor) => Some(cursor - 1),
            None => return Navigation::Unchanged,
        };

        self.cursor = cursor;
        Navigation::Moved(cursor)
    }

    pub fn redo(&mut self) -> Navigation {
        let next = self.active_count();
        if next >= self.entries.len() {
            return Navigation::Unchanged;
        }

        self.cursor = Some(next);
        Navigation::Moved(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.active_count() < self.entries.len()
    }

    pub fn active_entries(&self) -> &[Action<P>] {
        &self.entries[..self.active_count()]
    }

    pub fn future_entries(&self) -> &[Action<P>] {
        &self.entries[self.active_count()..]
    }

    pub fn active_count(&self) -> usize {
        self.cursor.map_or(0, |cursor| cursor + 1)
    }

    pub fn future_count(&self) -> usize {
        self.entries.len() - self.active_count()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The last applied action.
    pub fn current(&self) -> Option<&Action<P>> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    pub fn entries(&self) -> &[Action<P>] {
        &self.entries
    }

    pub fn get(&self, id: ActionId) -> Option<&Action<P>> {
        self.entries.iter().find(|action| action.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{HistoryStack, Navigation};

    fn payloads(entries: &[crate::Action<char>]) -> Vec<char> {
        entries.iter().map(|action| *action.payload()).collect()
    }

    fn state(stack: &HistoryStack<char>) -> (Vec<u64>, Option<usize>) {
        let ids = stack.entries().iter().map(|a| a.id().value()).collect();
        (ids, stack.cursor())
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = HistoryStack::<char>::new();

        assert!(stack.is_empty());
        assert_eq!(stack.cursor(), None);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert!(stack.active_entries().is_empty());
        assert!(stack.future_entries().is_empty());
        assert!(stack.current().is_none());
    }

    #[test]
    fn append_keeps_cursor_at_tip() {
        let mut stack = HistoryStack::new();
        for (index, payload) in ['a', 'b', 'c', 'd'].into_iter().enumerate() {
            stack.append(payload);

            assert_eq!(stack.cursor(), Some(index));
            assert_eq!(stack.len(), index + 1);
            assert_eq!(stack.active_entries(), stack.entries());
            assert!(stack.future_entries().is_empty());
        }
    }

    #[test]
    fn append_returns_new_action() {
        let mut stack = HistoryStack::new();
        let first = stack.append('a').id();
        let second = stack.append('b');

        assert_eq!(second.payload(), &'b');
        assert!(second.id() > first);
    }

    #[test]
    fn undo_on_empty_is_noop() {
        let mut stack = HistoryStack::<char>::new();

        assert_eq!(stack.undo(), Navigation::Unchanged);
        assert_eq!(state(&stack), (vec![], None));
    }

    #[test]
    fn redo_at_tip_is_noop() {
        let mut stack = HistoryStack::new();
        stack.append('a');
        stack.append('b');
        let before = state(&stack);

        assert_eq!(stack.redo(), Navigation::Unchanged);
        assert_eq!(state(&stack), before);
    }

    #[test]
    fn undo_down_to_empty() {
        let mut stack = HistoryStack::new();
        stack.append('a');
        stack.append('b');

        assert_eq!(stack.undo(), Navigation::Moved(Some(0)));
        assert_eq!(stack.undo(), Navigation::Moved(None));
        assert!(!stack.can_undo());
        assert_eq!(stack.undo(), Navigation::Unchanged);
        assert_eq!(payloads(stack.future_entries()), vec!['a', 'b']);
    }

    #[test]
    fn undo_then_redo_restores_state() {
        let mut stack = HistoryStack::new();
        stack.append('a');
        stack.append('b');
        stack.append('c');

        for _ in 0..3 {
            let before = state(&stack);
            assert!(stack.undo().is_moved());
            assert!(stack.redo().is_moved());
            assert_eq!(state(&stack), before);

            stack.undo();
        }
    }

    #[test]
    fn append_after_undo_discards_branch() {
        let mut stack = HistoryStack::new();
        stack.append('a');
        stack.append('b');
        stack.append('c');
        stack.undo();

        assert!(stack.can_redo());

        stack.append('d');

        assert!(!stack.can_redo());
        assert!(stack.future_entries().is_empty());
        assert_eq!(payloads(stack.entries()), vec!['a', 'b', 'd']);
    }

    #[test]
    fn discarded_ids_are_not_reused() {
        let mut stack = HistoryStack::new();
        stack.append('a');
        let discarded = stack.append('b').id();
        stack.undo();
        let appended = stack.append('c').id();

        assert!(appended > discarded);
        assert!(stack.get(discarded).is_none());
        assert_eq!(stack.get(appended).map(|a| *a.payload()), Some('c'));
    }

    #[test]
    fn counts_follow_cursor() {
        let mut stack = HistoryStack::new();
        stack.append('a');
        stack.append('b');
        stack.append('c');
        stack.undo();

        assert_eq!(stack.active_count(), 2);
        assert_eq!(stack.future_count(), 1);
        assert_eq!(stack.current().map(|a| *a.payload()), Some('b'));
    }

    #[test]
    fn linear_scenario() {
        let mut stack = HistoryStack::new();
        stack.append('a');
        stack.append('b');
        stack.append('c');

        assert_eq!(payloads(stack.active_entries()), vec!['a', 'b', 'c']);
        assert!(stack.future_entries().is_empty());

        stack.undo();
        stack.undo();

        assert_eq!(payloads(stack.active_entries()), vec!['a']);
        assert_eq!(payloads(stack.future_entries()), vec!['b', 'c']);
        assert!(stack.can_redo());

        stack.append('d');

        assert_eq!(payloads(stack.active_entries()), vec!['a', 'd']);
        assert!(stack.future_entries().is_empty());

        assert_eq!(stack.redo(), Navigation::Unchanged);
        assert_eq!(payloads(stack.active_entries()), vec!['a', 'd']);
    }
}
