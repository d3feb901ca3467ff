//! Shared test utilities for CyberShield integration tests.

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command as StdCommand, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Returns a `Command` running the `cybershield` binary with colors off.
#[allow(dead_code, deprecated)]
pub fn cybershield_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cybershield").unwrap();
    cmd.arg("--color").arg("never");
    cmd
}

/// Runs `analyze` on the given stdin and returns the `Assert`.
#[allow(dead_code)]
pub fn analyze_stdin(input: &str) -> Assert {
    cybershield_cmd().arg("analyze").write_stdin(input).assert()
}

/// Runs one chat message with no response delay.
#[allow(dead_code)]
pub fn chat_once(message: &str) -> Assert {
    cybershield_cmd()
        .args(["chat", "--delay-ms", "0", "-m", message])
        .assert()
}

/// A running `cybershield` process whose stdin stays open until dropped.
#[allow(dead_code)]
pub struct Interactive {
    child: Child,
    stdin: Option<ChildStdin>,
    lines: Receiver<String>,
    seen: Vec<String>,
}

#[allow(dead_code)]
impl Interactive {
    pub fn spawn(args: &[&str]) -> Self {
        let mut child = StdCommand::new(env!("CARGO_BIN_EXE_cybershield"))
            .args(["--color", "never"])
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        let stdin = child.stdin.take();
        let stdout = child.stdout.take().unwrap();
        let (tx, lines) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        Self {
            child,
            stdin,
            lines,
            seen: Vec::new(),
        }
    }

    pub fn send_line(&mut self, line: &str) {
        let stdin = self.stdin.as_mut().unwrap();
        writeln!(stdin, "{}", line).unwrap();
        stdin.flush().unwrap();
    }

    /// Waits until a stdout line contains `needle`. Returns `false` on timeout.
    pub fn wait_for(&mut self, needle: &str, timeout: Duration) -> bool {
        if self.seen.iter().any(|l| l.contains(needle)) {
            return true;
        }
        let deadline = Instant::now() + timeout;
        while let Some(left) = deadline.checked_duration_since(Instant::now()) {
            match self.lines.recv_timeout(left) {
                Ok(line) => {
                    let hit = line.contains(needle);
                    self.seen.push(line);
                    if hit {
                        return true;
                    }
                }
                Err(_) => return false,
            }
        }
        false
    }
}

impl Drop for Interactive {
    fn drop(&mut self) {
        self.stdin.take();
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
