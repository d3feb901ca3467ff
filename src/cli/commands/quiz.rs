//! Quiz command: list quiz sets or take one.

use anyhow::bail;
use colored::*;
use std::process::ExitCode;
use tracing::info;

use crate::cli::args::QuizAction;
use crate::config::Config;
use crate::education::{find_set, QuizEngine, QuizQuestion, ScoreBand, QUIZ_SETS};

pub fn cmd_quiz(config: &Config, action: QuizAction) -> anyhow::Result<ExitCode> {
    match action {
        QuizAction::List => {
            for set in QUIZ_SETS {
                println!(
                    "{:<10} {} [{}] - {} questions, ~{} min",
                    set.id.bold(),
                    set.title,
                    set.difficulty,
                    set.questions.len(),
                    set.questions.len() * 2
                );
                println!("           {}", set.description.dimmed());
            }
            Ok(ExitCode::SUCCESS)
        }
        QuizAction::Take { quiz, answers } => {
            let set = find_set(&quiz)?;
            let mut inputs = super::input_lines(answers);

            println!("{}", set.title.bold());
            println!("{}", set.description);
            println!();

            let mut engine = QuizEngine::for_set(set)?;
            engine.start();

            while let Some(question) = engine.current_question() {
                print_question(engine.answers().len() + 1, engine.len(), question);

                let Some(raw) = super::next_nonblank(&mut inputs)? else {
                    bail!(
                        "Quiz ended early: answered {} of {} questions",
                        engine.answers().len(),
                        engine.len()
                    );
                };
                let raw = raw.as_str();

                let selected = raw
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .map(|index| engine.select_answer(index));
                if !matches!(selected, Some(Ok(()))) {
                    println!(
                        "{} '{}' is not a valid choice; enter a number from 1 to {}",
                        "!".yellow(),
                        raw,
                        question.options.len()
                    );
                    println!();
                    continue;
                }

                if let Some(answer) = engine.advance() {
                    if answer.is_correct {
                        println!("{} Correct!", "✓".green());
                    } else {
                        println!(
                            "{} Incorrect. The answer is: {}",
                            "✗".red(),
                            question.options[question.correct]
                        );
                    }
                    println!("{}", question.explanation.dimmed());
                    println!();
                }
            }

            let score = engine.score();
            let band = ScoreBand::classify(score, config.quiz.pass_threshold);
            let score_str = format!("{}%", score);
            let score_str = match band {
                ScoreBand::Excellent => score_str.green().bold(),
                ScoreBand::Passing => score_str.yellow().bold(),
                ScoreBand::NeedsReview => score_str.red().bold(),
            };
            println!(
                "Score: {} ({} of {} correct)",
                score_str,
                engine.correct_count(),
                engine.len()
            );
            println!(
                "{}",
                match band {
                    ScoreBand::Excellent => "Excellent work!",
                    ScoreBand::Passing => "Passed. Review the explanations to improve further.",
                    ScoreBand::NeedsReview => "Keep practicing. Review the explanations and try again.",
                }
            );
            info!(quiz = set.id, score, "Quiz completed");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_question(number: usize, total: usize, question: &QuizQuestion) {
    println!(
        "Question {} of {} [{} / {}]",
        number, total, question.category, question.difficulty
    );
    println!("{}", question.prompt.bold());
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
}
