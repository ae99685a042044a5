use crate::model::UiMode;
use crate::presenter::Presenter;
use crate::view_models::{ChapterEntry, LoadStatus, PassProgress};

/// What the egui views draw. The trainer writes it through `Presenter`,
/// the views read it and edit `answer_input` directly.
#[derive(Default)]
pub struct ViewState {
    pub mode: UiMode,
    pub load_status: LoadStatus,
    pub chapters: Vec<ChapterEntry>,
    pub start_enabled: bool,
    pub validation_error: Option<String>,
    pub prompt: String,
    pub progress: PassProgress,
    pub correctness: Option<String>,
    pub answer_input: String,
    pub focus_answer: bool, // focus the answer field on the next frame
}

impl Presenter for ViewState {
    fn set_mode(&mut self, mode: UiMode) {
        if mode == UiMode::Learning && self.mode != UiMode::Learning {
            self.focus_answer = true;
        }
        self.mode = mode;
    }

    fn render_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_owned();
    }

    fn render_progress(&mut self, progress: PassProgress) {
        self.progress = progress;
    }

    fn render_correctness(&mut self, message: Option<&str>) {
        self.correctness = message.map(str::to_owned);
    }

    fn render_chapter_list(&mut self, chapters: &[ChapterEntry]) {
        self.chapters = chapters.to_vec();
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
    }

    fn set_validation_error(&mut self, message: Option<&str>) {
        self.validation_error = message.map(str::to_owned);
    }

    fn set_load_status(&mut self, status: LoadStatus) {
        self.load_status = status;
    }

    fn read_answer_input(&self) -> String {
        self.answer_input.clone()
    }

    fn clear_answer_input(&mut self) {
        self.answer_input.clear();
    }
}
