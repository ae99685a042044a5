use super::*;

impl<P: Presenter> Trainer<P> {
    /// First dataset wins; later ones are dropped.
    pub fn dataset_loaded(&mut self, dataset: Dataset) {
        self.attach_session(Session::new(dataset));
    }

    pub fn attach_session(&mut self, session: Session) {
        if self.session.is_some() {
            log::warn!("dataset already loaded, ignoring a second one");
            return;
        }
        log::info!("{} chapters loaded", session.dataset().len());

        self.session = Some(session);
        self.presenter.set_load_status(LoadStatus::Ready);
        self.presenter.set_validation_error(None);
        self.presenter.set_mode(UiMode::ChapterSelect);
        self.render_chapters();
    }

    pub fn dataset_failed(&mut self, err: &LoadError) {
        log::error!("could not load chapters: {err}");
        if self.session.is_none() {
            self.presenter
                .set_load_status(LoadStatus::Failed(err.to_string()));
        }
    }
}
