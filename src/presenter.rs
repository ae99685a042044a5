use crate::model::UiMode;
use crate::view_models::{ChapterEntry, LoadStatus, PassProgress};

/// Everything the trainer needs from a UI surface. The egui view state
/// implements it; tests use a recording implementation.
pub trait Presenter {
    fn set_mode(&mut self, mode: UiMode);
    fn render_prompt(&mut self, prompt: &str);
    fn render_progress(&mut self, progress: PassProgress);
    /// `None` clears the message.
    fn render_correctness(&mut self, message: Option<&str>);
    fn render_chapter_list(&mut self, chapters: &[ChapterEntry]);
    fn set_start_enabled(&mut self, enabled: bool);
    fn set_validation_error(&mut self, message: Option<&str>);
    fn set_load_status(&mut self, status: LoadStatus);
    fn read_answer_input(&self) -> String;
    fn clear_answer_input(&mut self);
}
