use crate::data::LoadError;
use crate::model::{AnswerPhase, Dataset, LearnMode, UiMode};
use crate::presenter::Presenter;
use crate::session::{Session, SessionError};
use crate::view_models::{LoadStatus, PassProgress, chapter_entries};

// submodules
pub mod actions;
pub mod loading;
pub mod navigation;

/// Keys the answer field forwards. Only `Enter` does anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

/// User input, already decoded from the UI surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    ChapterToggled { index: usize, checked: bool },
    StartPressed,
    BackPressed,
    KeyPressed(Key),
}

/// Drives the session from UI events and pushes the result to a `Presenter`.
pub struct Trainer<P: Presenter> {
    presenter: P,
    session: Option<Session>, // None until the dataset arrives
    learn_mode: LearnMode,
}

impl<P: Presenter> Trainer<P> {
    pub fn new(mut presenter: P, learn_mode: LearnMode) -> Self {
        presenter.set_mode(UiMode::ChapterSelect);
        presenter.set_load_status(LoadStatus::Loading);
        presenter.set_start_enabled(false);
        Self {
            presenter,
            session: None,
            learn_mode,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn learn_mode(&self) -> LearnMode {
        self.learn_mode
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    pub fn handle(&mut self, event: Event) {
        if self.session.is_none() {
            log::debug!("ignoring {event:?}: dataset not loaded yet");
            return;
        }

        match event {
            Event::ChapterToggled { index, checked } => self.toggle_chapter(index, checked),
            Event::StartPressed => self.start(),
            Event::BackPressed => self.back(),
            Event::KeyPressed(Key::Enter) => self.submit(),
            Event::KeyPressed(Key::Other(key)) => log::trace!("ignoring key {key}"),
        }
    }

    fn render_current(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if let Some(aspect) = session.current() {
            let prompt = crate::answer::prompt_for(aspect, self.learn_mode);
            self.presenter.render_prompt(prompt);
            self.presenter.render_progress(PassProgress {
                current: session.position() + 1,
                total: session.order().len(),
            });
        }
    }

    fn render_chapters(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let entries = chapter_entries(session.dataset(), session.selection());
        self.presenter.render_chapter_list(&entries);
        self.presenter
            .set_start_enabled(!session.selection().is_empty());
    }
}
