use cybershield::education::{find_set, QuizEngine, QuizError, QuizState, ScoreBand, QUIZ_SETS};

fn take(set_id: &str, picks: &[usize]) -> QuizEngine {
    let mut engine = QuizEngine::for_set(find_set(set_id).unwrap()).unwrap();
    engine.start();
    for &pick in picks {
        engine.select_answer(pick).unwrap();
        engine.advance().unwrap();
    }
    engine
}

#[test]
fn every_set_has_five_valid_questions() {
    for set in QUIZ_SETS {
        assert_eq!(set.questions.len(), 5, "set {}", set.id);
        for q in set.questions {
            assert!(q.correct < q.options.len(), "question {} in {}", q.id, set.id);
            assert!(!q.explanation.is_empty());
        }
    }
}

#[test]
fn all_correct_scores_100() {
    for set in QUIZ_SETS {
        let picks: Vec<usize> = set.questions.iter().map(|q| q.correct).collect();
        let engine = take(set.id, &picks);
        assert!(engine.is_completed());
        assert_eq!(engine.score(), 100, "set {}", set.id);
    }
}

#[test]
fn all_incorrect_scores_zero() {
    for set in QUIZ_SETS {
        let picks: Vec<usize> = set
            .questions
            .iter()
            .map(|q| (q.correct + 1) % q.options.len())
            .collect();
        let engine = take(set.id, &picks);
        assert_eq!(engine.score(), 0, "set {}", set.id);
        assert_eq!(engine.correct_count(), 0);
    }
}

#[test]
fn partial_score_is_rounded_over_set_size() {
    // Phishing answers: 1, 1, 2, 1, 2
    let engine = take("phishing", &[1, 1, 2, 0, 0]);
    assert_eq!(engine.correct_count(), 3);
    assert_eq!(engine.score(), 60);
}

#[test]
fn advance_without_selection_is_a_no_op() {
    let mut engine = QuizEngine::for_set(find_set("malware").unwrap()).unwrap();
    engine.start();
    assert_eq!(engine.advance(), None);
    assert_eq!(engine.state(), QuizState::InProgress(0));
    assert!(engine.answers().is_empty());
}

#[test]
fn reselecting_replaces_pending_choice() {
    let mut engine = QuizEngine::for_set(find_set("passwords").unwrap()).unwrap();
    engine.start();
    engine.select_answer(0).unwrap();
    engine.select_answer(1).unwrap();
    assert_eq!(engine.pending_answer(), Some(1));
    let answer = engine.advance().unwrap();
    assert_eq!(answer.selected, 1);
    assert_eq!(engine.state(), QuizState::InProgress(1));
}

#[test]
fn out_of_range_choice_is_rejected() {
    let mut engine = QuizEngine::for_set(find_set("phishing").unwrap()).unwrap();
    engine.start();
    assert_eq!(
        engine.select_answer(4),
        Err(QuizError::OptionOutOfRange {
            index: 4,
            options: 4
        })
    );
    assert_eq!(engine.pending_answer(), None);
}

#[test]
fn answering_before_start_is_rejected() {
    let mut engine = QuizEngine::for_set(find_set("phishing").unwrap()).unwrap();
    assert_eq!(engine.select_answer(0), Err(QuizError::NotInProgress));
}

#[test]
fn completed_quiz_accepts_no_more_answers() {
    let mut engine = take("phishing", &[1, 1, 2, 1, 2]);
    assert_eq!(engine.current_question(), None);
    assert_eq!(engine.select_answer(0), Err(QuizError::NotInProgress));
}

#[test]
fn reset_returns_to_first_question() {
    let mut engine = take("malware", &[1, 1]);
    engine.reset();
    assert_eq!(engine.state(), QuizState::InProgress(0));
    assert!(engine.answers().is_empty());
    assert_eq!(engine.score(), 0);
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(find_set("PHISHING").unwrap().id, "phishing");
    assert!(matches!(find_set("crypto"), Err(QuizError::UnknownQuiz(_))));
}

#[test]
fn score_bands() {
    assert_eq!(ScoreBand::classify(100, 60), ScoreBand::Excellent);
    assert_eq!(ScoreBand::classify(80, 60), ScoreBand::Excellent);
    assert_eq!(ScoreBand::classify(60, 60), ScoreBand::Passing);
    assert_eq!(ScoreBand::classify(59, 60), ScoreBand::NeedsReview);
}
