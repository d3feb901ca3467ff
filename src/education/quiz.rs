//! Multiple-choice quiz engine.
//!
//! The engine is a small state machine owned by the caller:
//! `NotStarted -> InProgress(index) -> Completed`. Answers are recorded
//! only when [`QuizEngine::advance`] is called with a selection pending.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from quiz operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz has no questions")]
    EmptyQuestionSet,

    #[error("Option {index} is out of range (question has {options} options)")]
    OptionOutOfRange { index: usize, options: usize },

    #[error("Quiz is not in progress")]
    NotInProgress,

    #[error("Unknown quiz '{0}'")]
    UnknownQuiz(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// A single compile-time question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
}

/// A themed set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSet {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub questions: &'static [QuizQuestion],
}

/// A recorded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserAnswer {
    pub question_id: u32,
    pub selected: usize,
    pub is_correct: bool,
}

/// Where the engine is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress(usize),
    Completed,
}

/// Score band used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Passing,
    NeedsReview,
}

impl ScoreBand {
    /// 80 and above is excellent, `pass_threshold` and above is passing.
    pub fn classify(score: u8, pass_threshold: u8) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= pass_threshold {
            ScoreBand::Passing
        } else {
            ScoreBand::NeedsReview
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: &'static [QuizQuestion],
    state: QuizState,
    pending: Option<usize>,
    answers: Vec<UserAnswer>,
}

impl QuizEngine {
    pub fn new(questions: &'static [QuizQuestion]) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        Ok(Self {
            questions,
            state: QuizState::NotStarted,
            pending: None,
            answers: Vec::new(),
        })
    }

    pub fn for_set(set: &QuizSet) -> Result<Self, QuizError> {
        Self::new(set.questions)
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn start(&mut self) {
        if self.state == QuizState::NotStarted {
            self.state = QuizState::InProgress(0);
        }
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        match self.state {
            QuizState::InProgress(i) => self.questions.get(i),
            _ => None,
        }
    }

    /// Tentative choice for the current question.
    pub fn pending_answer(&self) -> Option<usize> {
        self.pending
    }

    /// Record a tentative choice without advancing. Replaces any earlier choice.
    pub fn select_answer(&mut self, index: usize) -> Result<(), QuizError> {
        let question = self.current_question().ok_or(QuizError::NotInProgress)?;
        if index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index,
                options: question.options.len(),
            });
        }
        self.pending = Some(index);
        Ok(())
    }

    /// Commit the pending choice and move on.
    ///
    /// Returns `None` (and changes nothing) when no choice is pending.
    pub fn advance(&mut self) -> Option<UserAnswer> {
        let QuizState::InProgress(index) = self.state else {
            return None;
        };
        let selected = self.pending.take()?;
        let question = &self.questions[index];

        let answer = UserAnswer {
            question_id: question.id,
            selected,
            is_correct: selected == question.correct,
        };
        self.answers.push(answer);

        self.state = if index + 1 < self.questions.len() {
            QuizState::InProgress(index + 1)
        } else {
            QuizState::Completed
        };
        Some(answer)
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }

    /// Percentage of correct answers over the whole set, rounded.
    pub fn score(&self) -> u8 {
        let n = self.questions.len();
        ((self.correct_count() * 100) as f64 / n as f64).round() as u8
    }

    pub fn is_completed(&self) -> bool {
        self.state == QuizState::Completed
    }

    /// Back to the first question with no answers.
    pub fn reset(&mut self) {
        self.state = QuizState::InProgress(0);
        self.pending = None;
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static QUESTIONS: &[QuizQuestion] = &[
        QuizQuestion {
            id: 1,
            prompt: "First?",
            options: &["a", "b", "c"],
            correct: 0,
            explanation: "a",
            category: "Test",
            difficulty: Difficulty::Easy,
        },
        QuizQuestion {
            id: 2,
            prompt: "Second?",
            options: &["a", "b"],
            correct: 1,
            explanation: "b",
            category: "Test",
            difficulty: Difficulty::Hard,
        },
        QuizQuestion {
            id: 3,
            prompt: "Third?",
            options: &["a", "b", "c", "d"],
            correct: 3,
            explanation: "d",
            category: "Test",
            difficulty: Difficulty::Medium,
        },
    ];

    fn answer_all(engine: &mut QuizEngine, picks: &[usize]) {
        for &pick in picks {
            engine.select_answer(pick).unwrap();
            engine.advance().unwrap();
        }
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(QuizEngine::new(&[]).unwrap_err(), QuizError::EmptyQuestionSet);
    }

    #[test]
    fn starts_not_started() {
        let engine = QuizEngine::new(QUESTIONS).unwrap();
        assert_eq!(engine.state(), QuizState::NotStarted);
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn select_before_start_fails() {
        let mut engine = QuizEngine::new(QUESTIONS).unwrap();
        assert_eq!(engine.select_answer(0), Err(QuizError::NotInProgress));
    }

    #[test]
    fn advance_without_selection_is_noop() {
        let mut engine = QuizEngine::new(QUESTIONS).unwrap();
        engine.start();
        assert!(engine.advance().is_none());
        assert_eq!(engine.state(), QuizState::InProgress(0));
        assert!(engine.answers().is_empty());
    }

    #[test]
    fn select_does_not_advance_and_can_change() {
        let mut engine = QuizEngine::new(QUESTIONS).unwrap();
        engine.start();
        engine.select_answer(2).unwrap();
        engine.select_answer(0).unwrap();
        assert_eq!(engine.state(), QuizState::InProgress(0));

        let answer = engine.advance().unwrap();
        assert_eq!(answer.selected, 0);
        assert!(answer.is_correct);
        assert_eq!(engine.pending_answer(), None);
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut engine = QuizEngine::new(QUESTIONS).unwrap();
        engine.start();
        assert_eq!(
            engine.select_answer(3),
            Err(QuizError::OptionOutOfRange { index: 3, options: 3 })
        );
    }

    #[test]
    fn last_answer_completes() {
        let mut engine = QuizEngine::new(QUESTIONS).unwrap();
        engine.start();
        answer_all(&mut engine, &[0, 1, 3]);
        assert!(engine.is_completed());
        assert_eq!(engine.score(), 100);
        assert!(engine.advance().is_none());
    }

    #[test]
    fn partial_score_rounds() {
        let mut engine = QuizEngine::new(QUESTIONS).unwrap();
        engine.start();
        answer_all(&mut engine, &[0, 0, 0]);
        // 1 of 3 correct
        assert_eq!(engine.score(), 33);

        engine.reset();
        answer_all(&mut engine, &[0, 1, 0]);
        assert_eq!(engine.score(), 67);
    }

    #[test]
    fn reset_clears_answers() {
        let mut engine = QuizEngine::new(QUESTIONS).unwrap();
        engine.start();
        answer_all(&mut engine, &[1, 1]);
        engine.select_answer(2).unwrap();
        engine.reset();
        assert_eq!(engine.state(), QuizState::InProgress(0));
        assert!(engine.answers().is_empty());
        assert_eq!(engine.pending_answer(), None);
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::classify(80, 60), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(60, 60), ScoreBand::Passing);
        assert_eq!(ScoreBand::classify(59, 60), ScoreBand::NeedsReview);
    }
}
