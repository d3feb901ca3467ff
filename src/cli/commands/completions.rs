//! Completions command: print a shell completion script.

use clap::CommandFactory;
use clap_complete::Shell;
use std::process::ExitCode;

use crate::cli::args::{Cli, CompletionShell};

pub fn cmd_completions(shell: CompletionShell) -> anyhow::Result<ExitCode> {
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
    };
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "cybershield", &mut std::io::stdout());
    Ok(ExitCode::SUCCESS)
}
