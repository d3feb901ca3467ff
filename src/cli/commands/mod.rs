//! CLI command implementations.
//!
//! Each submodule implements one top-level CLI command. Commands that wait
//! on the simulated response delay run on a current-thread tokio runtime.

pub mod analyze;
pub mod chat;
pub mod checklist;
pub mod completions;
pub mod config;
pub mod content;
pub mod password;
pub mod quiz;
pub mod report;

pub use analyze::cmd_analyze;
pub use chat::cmd_chat;
pub use checklist::cmd_checklist;
pub use completions::cmd_completions;
pub use config::cmd_config;
pub use content::{cmd_advisories, cmd_alerts, cmd_categories, cmd_resources, cmd_solutions};
pub use password::cmd_password;
pub use quiz::cmd_quiz;
pub use report::cmd_report;

use anyhow::Context;
use std::future::Future;
use std::io::{self, BufRead};

/// Line source for interactive commands.
pub(crate) type InputLines = Box<dyn Iterator<Item = io::Result<String>>>;

/// Lines given on the command line, or stdin read one line at a time so
/// each prompt is answered as it appears.
pub(crate) fn input_lines(given: Vec<String>) -> InputLines {
    if given.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(given.into_iter().map(Ok))
    }
}

/// Next line with content, trimmed. `None` once input is exhausted.
pub(crate) fn next_nonblank(lines: &mut InputLines) -> anyhow::Result<Option<String>> {
    for line in lines {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
    Ok(None)
}

/// Drive a future to completion on a fresh current-thread runtime.
pub(crate) fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;
    Ok(runtime.block_on(future))
}
