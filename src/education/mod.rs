//! Security education quizzes.

pub mod catalog;
pub mod quiz;

pub use catalog::{find_set, QUIZ_SETS};
pub use quiz::{Difficulty, QuizEngine, QuizError, QuizQuestion, QuizSet, QuizState, ScoreBand, UserAnswer};
