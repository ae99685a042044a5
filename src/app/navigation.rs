use super::*;

pub const NO_CHAPTERS_MESSAGE: &str = "Selecteer minstens 1 hoofdstuk";
pub const NO_ASPECTS_MESSAGE: &str = "Geselecteerde hoofdstukken bevatten geen aspecten";

pub fn validation_message(err: &SessionError) -> &'static str {
    match err {
        SessionError::NoAspects => NO_ASPECTS_MESSAGE,
        SessionError::NoChaptersSelected | SessionError::UnknownChapter { .. } => {
            NO_CHAPTERS_MESSAGE
        }
    }
}

impl<P: Presenter> Trainer<P> {
    pub fn toggle_chapter(&mut self, index: usize, checked: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.ui_mode() != UiMode::ChapterSelect {
            log::debug!("chapter toggle ignored outside chapter select");
            return;
        }

        if let Err(err) = session.toggle_chapter(index, checked) {
            log::warn!("{err}");
        }

        self.render_chapters();
        self.presenter.set_validation_error(None);
    }

    pub fn start(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.enter_learning() {
            Ok(()) => {
                log::info!(
                    "learning {} aspects from {} chapters",
                    session.order().len(),
                    session.selection().len()
                );
                self.presenter.set_validation_error(None);
                self.presenter.render_correctness(None);
                self.presenter.clear_answer_input();
                self.render_current();
                self.presenter.set_mode(UiMode::Learning);
            }
            Err(err) => {
                log::debug!("start rejected: {err}");
                self.presenter
                    .set_validation_error(Some(validation_message(&err)));
            }
        }
    }

    pub fn back(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.exit_learning();
        self.presenter.render_correctness(None);
        self.presenter.clear_answer_input();
        self.render_chapters();
        self.presenter.set_mode(UiMode::ChapterSelect);
    }
}
