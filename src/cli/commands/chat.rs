//! Chat command: talk to the rule-based security assistant.

use colored::*;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, info};

use crate::assistant::{ChatSession, DeliveryError, ResponseDelay, ResponseScheduler, QUICK_QUESTIONS};
use crate::cli::args::OutputFormat;
use crate::config::Config;

/// Typed on its own line, clears the conversation.
pub const RESET_COMMAND: &str = "/reset";

pub fn cmd_chat(
    config: &Config,
    messages: Vec<String>,
    delay_ms: Option<u64>,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let delay = match delay_ms {
        Some(ms) => ResponseDelay::Fixed(Duration::from_millis(ms)),
        None => ResponseDelay::from_config(&config.assistant),
    };
    let scheduler = ResponseScheduler::new(delay);
    let mut session = ChatSession::default();
    let streaming = format == OutputFormat::Text;

    if streaming {
        print_reply(&session.messages()[0].text);
        println!("Try asking:");
        for question in QUICK_QUESTIONS {
            println!("  - {}", question.dimmed());
        }
        println!();
    }

    let mut inputs = super::input_lines(messages);

    super::block_on(async {
        while let Some(line) = super::next_nonblank(&mut inputs)? {
            let line = line.as_str();
            if line == RESET_COMMAND {
                scheduler.cancel_all();
                session.reset();
                if streaming {
                    println!("{}", "Conversation reset.".dimmed());
                    print_reply(&session.messages()[0].text);
                }
                continue;
            }

            session.push_user(line)?;
            if streaming {
                println!("{} {}", "You:".bold(), line);
            }

            let token = scheduler.begin();
            let responder = session.responder();
            match scheduler.deliver(token, || responder.respond(line)).await {
                Ok(reply) => {
                    session.push_assistant(reply);
                    if streaming {
                        print_reply(reply);
                    }
                }
                Err(DeliveryError::Cancelled(id)) => {
                    debug!(request = id, "Dropped superseded reply");
                }
            }
        }
        Ok::<_, anyhow::Error>(())
    })??;

    info!(messages = session.messages().len(), "Chat finished");

    if !streaming {
        println!("{}", serde_json::to_string_pretty(session.messages())?);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_reply(text: &str) {
    println!("{}", "Assistant:".cyan().bold());
    println!("{}", text);
    println!();
}
