use super::*;
use crate::answer::{is_correct, message_about_correctness};

impl<P: Presenter> Trainer<P> {
    /// Enter in the answer field: grade the answer, or move on after feedback.
    pub fn submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.ui_mode() != UiMode::Learning {
            return;
        }

        let input = self.presenter.read_answer_input();
        self.presenter.clear_answer_input();

        match session.phase() {
            AnswerPhase::AwaitingAnswer => {
                let Some(aspect) = session.current() else {
                    log::warn!("learning without a current aspect");
                    return;
                };
                let correct = is_correct(aspect, &input, self.learn_mode);
                let message = message_about_correctness(correct, aspect, self.learn_mode);
                log::debug!("answer for {}: correct={correct}", aspect.id);

                session.set_phase(AnswerPhase::ShowingCorrectness);
                self.presenter.render_correctness(Some(message.as_str()));
            }
            AnswerPhase::ShowingCorrectness => {
                session.advance();
                session.set_phase(AnswerPhase::AwaitingAnswer);
                self.presenter.render_correctness(None);
                self.render_current();
            }
        }
    }
}
