//! Per-page study session: which chapters are selected, the shuffled order
//! being quizzed and where the user currently is in it.

use crate::model::{AnswerPhase, Aspect, Dataset, UiMode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use thiserror::Error;

pub mod order;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("chapter {index} does not exist (dataset has {len} chapters)")]
    UnknownChapter { index: usize, len: usize },
    #[error("no chapters selected")]
    NoChaptersSelected,
    #[error("the selected chapters contain no aspects")]
    NoAspects,
}

pub struct Session {
    dataset: Dataset,
    selection: BTreeSet<usize>,
    order: Vec<Aspect>,
    position: usize,
    ui_mode: UiMode,
    phase: AnswerPhase,
    rng: StdRng,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_rng(dataset, StdRng::from_entropy())
    }

    /// Same as `new` with a caller-provided RNG, for reproducible orders.
    pub fn with_rng(dataset: Dataset, rng: StdRng) -> Self {
        Self {
            dataset,
            selection: BTreeSet::new(),
            order: Vec::new(),
            position: 0,
            ui_mode: UiMode::ChapterSelect,
            phase: AnswerPhase::AwaitingAnswer,
            rng,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }

    pub fn order(&self) -> &[Aspect] {
        &self.order
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Aspect> {
        self.order.get(self.position)
    }

    pub fn ui_mode(&self) -> UiMode {
        self.ui_mode
    }

    pub fn phase(&self) -> AnswerPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: AnswerPhase) {
        self.phase = phase;
    }

    /// Adds or removes a chapter and rebuilds the quiz order from scratch.
    pub fn toggle_chapter(&mut self, index: usize, selected: bool) -> Result<(), SessionError> {
        if index >= self.dataset.len() {
            return Err(SessionError::UnknownChapter {
                index,
                len: self.dataset.len(),
            });
        }

        if selected {
            self.selection.insert(index);
        } else if !self.selection.remove(&index) {
            log::warn!("chapter {index} was deselected but never selected");
        }

        self.rebuild_order();
        Ok(())
    }

    fn rebuild_order(&mut self) {
        let chapters = self
            .selection
            .iter()
            .filter_map(|&idx| self.dataset.chapter(idx));
        self.order = order::shuffled_aspects(chapters, &mut self.rng);
        self.position = 0;
    }

    /// Moves to the next aspect; starts a new pass when the order is exhausted.
    pub fn advance(&mut self) {
        if self.order.is_empty() {
            return;
        }
        if self.position + 1 < self.order.len() {
            self.position += 1;
        } else {
            let exhausted = std::mem::take(&mut self.order);
            self.order = order::reshuffle(exhausted, &mut self.rng);
            self.position = 0;
            log::debug!("new pass over {} aspects", self.order.len());
        }
    }

    pub fn enter_learning(&mut self) -> Result<(), SessionError> {
        if self.selection.is_empty() {
            return Err(SessionError::NoChaptersSelected);
        }
        if self.order.is_empty() {
            return Err(SessionError::NoAspects);
        }
        self.ui_mode = UiMode::Learning;
        self.phase = AnswerPhase::AwaitingAnswer;
        Ok(())
    }

    /// Back to chapter selection. Selection and order are kept for resuming.
    pub fn exit_learning(&mut self) {
        self.ui_mode = UiMode::ChapterSelect;
        self.phase = AnswerPhase::AwaitingAnswer;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::Chapter;

    pub(crate) fn chapter(title: &str, pairs: &[(&str, &str)]) -> Chapter {
        Chapter {
            title: title.into(),
            aspects: pairs
                .iter()
                .map(|(id, value)| Aspect {
                    id: id.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    pub(crate) fn two_chapters() -> Dataset {
        Dataset {
            chapters: vec![
                chapter("A", &[("a1", "v1")]),
                chapter("B", &[("b1", "v1b")]),
            ],
        }
    }

    fn session(dataset: Dataset) -> Session {
        Session::with_rng(dataset, StdRng::seed_from_u64(42))
    }

    #[test]
    fn toggle_builds_order_from_selected_chapters() {
        let mut s = session(two_chapters());
        s.toggle_chapter(0, true).expect("valid chapter");
        assert_eq!(s.order().len(), 1);
        assert_eq!(s.order()[0].id, "a1");

        s.toggle_chapter(1, true).expect("valid chapter");
        assert_eq!(s.order().len(), 2);
        assert_eq!(s.position(), 0);

        s.toggle_chapter(0, false).expect("valid chapter");
        assert_eq!(s.order().len(), 1);
        assert_eq!(s.order()[0].id, "b1");
    }

    #[test]
    fn toggle_is_idempotent_in_both_directions() {
        let mut s = session(two_chapters());
        s.toggle_chapter(1, true).unwrap();
        s.toggle_chapter(1, true).unwrap();
        assert_eq!(s.selection().len(), 1);
        assert_eq!(s.order().len(), 1);

        s.toggle_chapter(1, false).unwrap();
        s.toggle_chapter(1, false).unwrap();
        assert!(s.selection().is_empty());
        assert!(s.order().is_empty());
    }

    #[test]
    fn unknown_chapter_is_rejected_without_changes() {
        let mut s = session(two_chapters());
        s.toggle_chapter(0, true).unwrap();
        let err = s.toggle_chapter(5, true).unwrap_err();
        assert_eq!(err, SessionError::UnknownChapter { index: 5, len: 2 });
        assert_eq!(s.selection().len(), 1);
        assert_eq!(s.order().len(), 1);
    }

    #[test]
    fn advance_walks_then_wraps() {
        let dataset = Dataset {
            chapters: vec![chapter("A", &[("1", "x"), ("2", "y"), ("3", "z")])],
        };
        let mut s = session(dataset);
        s.toggle_chapter(0, true).unwrap();
        let first_pass: Vec<Aspect> = s.order().to_vec();

        s.advance();
        s.advance();
        assert_eq!(s.position(), 2);
        let last_shown = s.current().cloned().unwrap();

        s.advance();
        assert_eq!(s.position(), 0);
        assert_eq!(s.order().len(), 3);
        assert_ne!(s.order()[0], last_shown);
        assert_eq!(s.order()[2], last_shown);

        let mut before: Vec<_> = first_pass.iter().map(|a| a.id.clone()).collect();
        let mut after: Vec<_> = s.order().iter().map(|a| a.id.clone()).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn advance_on_empty_order_is_a_no_op() {
        let mut s = session(two_chapters());
        s.advance();
        assert_eq!(s.position(), 0);
        assert!(s.current().is_none());
    }

    #[test]
    fn learning_requires_selection_and_aspects() {
        let dataset = Dataset {
            chapters: vec![chapter("Empty", &[]), chapter("A", &[("a1", "v1")])],
        };
        let mut s = session(dataset);
        assert_eq!(s.enter_learning(), Err(SessionError::NoChaptersSelected));

        s.toggle_chapter(0, true).unwrap();
        assert_eq!(s.enter_learning(), Err(SessionError::NoAspects));
        assert_eq!(s.ui_mode(), UiMode::ChapterSelect);

        s.toggle_chapter(1, true).unwrap();
        assert_eq!(s.enter_learning(), Ok(()));
        assert_eq!(s.ui_mode(), UiMode::Learning);
    }

    #[test]
    fn exit_keeps_selection_and_order() {
        let mut s = session(two_chapters());
        s.toggle_chapter(0, true).unwrap();
        s.toggle_chapter(1, true).unwrap();
        s.enter_learning().unwrap();
        s.set_phase(AnswerPhase::ShowingCorrectness);
        let order = s.order().to_vec();

        s.exit_learning();
        assert_eq!(s.ui_mode(), UiMode::ChapterSelect);
        assert_eq!(s.phase(), AnswerPhase::AwaitingAnswer);
        assert_eq!(s.selection().len(), 2);
        assert_eq!(s.order(), order.as_slice());
    }
}
