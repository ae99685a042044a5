use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single term/definition pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Aspect {
    /// The term, e.g. the aspect number.
    pub id: String,
    /// The definition shown or asked for.
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
}

/// Every chapter loaded for this session. Chapter indices refer to this order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub chapters: Vec<Chapter>,
}

impl Dataset {
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

/// Which side of an aspect the user has to type.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LearnMode {
    /// Prompt shows the value, the answer is the id.
    #[default]
    ById,
    /// Prompt shows the id, the answer is the value.
    ByValue,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown learn mode `{0}` (expected `id` or `value`)")]
pub struct ParseLearnModeError(pub String);

impl FromStr for LearnMode {
    type Err = ParseLearnModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "by_id" | "byid" => Ok(LearnMode::ById),
            "value" | "by_value" | "byvalue" => Ok(LearnMode::ByValue),
            _ => Err(ParseLearnModeError(s.to_string())),
        }
    }
}

impl fmt::Display for LearnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnMode::ById => f.write_str("id"),
            LearnMode::ByValue => f.write_str("value"),
        }
    }
}

/// Visible screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    ChapterSelect,
    Learning,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnswerPhase {
    #[default]
    AwaitingAnswer,
    ShowingCorrectness,
}
