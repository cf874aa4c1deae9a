/// Ephemeral interaction state: at most one held drag and one open edit.
///
/// Neither session times out. A drag is cleared by the next drop attempt or a
/// reset; an edit is cleared by save, cancel or reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    dragged: Option<usize>,
    editing: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn start_drag(&mut self, global: usize) {
        self.dragged = Some(global);
    }

    /// Ends the drag session, returning the held cell.
    pub fn take_drag(&mut self) -> Option<usize> {
        self.dragged.take()
    }

    pub fn start_edit(&mut self, global: usize) {
        self.editing = Some(global);
    }

    /// Ends the edit session, returning the edited cell.
    pub fn take_edit(&mut self) -> Option<usize> {
        self.editing.take()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_the_session() {
        let mut session = Session::new();
        session.start_drag(3);
        session.start_edit(7);
        assert_eq!(session.take_drag(), Some(3));
        assert_eq!(session.take_drag(), None);
        assert_eq!(session.editing(), Some(7));
        session.clear();
        assert_eq!(session, Session::default());
    }
}
