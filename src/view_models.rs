// src/view_models.rs

use crate::model::Dataset;
use std::collections::BTreeSet;

/// One row of the chapter checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterEntry {
    pub index: usize, // index into dataset.chapters
    pub title: String,
    pub aspect_count: usize,
    pub selected: bool,
}

impl ChapterEntry {
    pub fn label(&self) -> String {
        match self.aspect_count {
            0 => format!("{} (leeg)", self.title),
            1 => format!("{} (1 aspect)", self.title),
            n => format!("{} ({n} aspecten)", self.title),
        }
    }
}

pub fn chapter_entries(dataset: &Dataset, selection: &BTreeSet<usize>) -> Vec<ChapterEntry> {
    dataset
        .chapters
        .iter()
        .enumerate()
        .map(|(index, chapter)| ChapterEntry {
            index,
            title: chapter.title.clone(),
            aspect_count: chapter.aspects.len(),
            selected: selection.contains(&index),
        })
        .collect()
}

/// Where the user is within the current pass, 1-based for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassProgress {
    pub current: usize,
    pub total: usize,
}

impl PassProgress {
    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }
}

/// State of the initial dataset load, as shown on the chapter screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::two_chapters;

    #[test]
    fn entries_mirror_dataset_and_selection() {
        let selection = BTreeSet::from([1]);
        let entries = chapter_entries(&two_chapters(), &selection);
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].selected);
        assert!(entries[1].selected);
        assert_eq!(entries[1].title, "B");
        assert_eq!(entries[1].label(), "B (1 aspect)");
    }

    #[test]
    fn progress_label_is_one_based() {
        let p = PassProgress { current: 3, total: 12 };
        assert_eq!(p.label(), "3 / 12");
    }
}
