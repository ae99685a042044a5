use crate::model::{Aspect, LearnMode};

pub const CORRECT_MESSAGE: &str = "Correct! Enter voor volgende.";

/// The side of the aspect the user has to type.
pub fn expected_answer(aspect: &Aspect, mode: LearnMode) -> &str {
    match mode {
        LearnMode::ByValue => &aspect.value,
        LearnMode::ById => &aspect.id,
    }
}

/// The side of the aspect shown as the question.
pub fn prompt_for(aspect: &Aspect, mode: LearnMode) -> &str {
    match mode {
        LearnMode::ByValue => &aspect.id,
        LearnMode::ById => &aspect.value,
    }
}

/// Exact comparison, no trimming or case folding.
pub fn is_correct(aspect: &Aspect, input: &str, mode: LearnMode) -> bool {
    expected_answer(aspect, mode) == input
}

pub fn message_about_correctness(correct: bool, aspect: &Aspect, mode: LearnMode) -> String {
    if correct {
        CORRECT_MESSAGE.to_string()
    } else {
        format!(
            "Fout. Goede antwoord: {}. Enter voor volgende.",
            expected_answer(aspect, mode)
        )
    }
}
