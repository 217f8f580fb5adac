use anyhow::{Context, Result};
use std::process::{Command, ExitStatus, Stdio};

/// Number of output lines kept in a failure diagnostic
pub const EXCERPT_LINES: usize = 3;

/// Captured result of a finished subprocess
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    /// stdout followed by stderr
    pub combined: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Short diagnostic for a failed command
    pub fn failure_reason(&self) -> String {
        let head = excerpt(&self.combined, EXCERPT_LINES);
        if !head.is_empty() {
            return head;
        }

        match self.status.code() {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Build a command whose stdin is always empty
fn isolated(program: &str, args: &[&str], envs: &[(&str, &str)]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd
}

/// Execute a command, capturing stdout and stderr
pub fn execute_command(
    program: &str,
    args: &[&str],
    envs: &[(&str, &str)],
) -> Result<CommandOutput> {
    log::debug!("Executing: {} {}", program, args.join(" "));

    let output = isolated(program, args, envs)
        .output()
        .with_context(|| format!("Failed to execute {}", program))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.is_empty() {
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&stderr);
    }

    Ok(CommandOutput {
        status: output.status,
        combined,
    })
}

/// Execute a command silently and report whether it exited 0.
/// A command that cannot be spawned counts as failed.
pub fn execute_command_success(program: &str, args: &[&str], envs: &[(&str, &str)]) -> bool {
    log::debug!("Checking: {} {}", program, args.join(" "));

    isolated(program, args, envs)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Check if a command exists in PATH
pub fn command_exists(command: &str) -> bool {
    which::which(command).is_ok()
}

/// First `max_lines` non-empty lines of `text`, trimmed
pub fn excerpt(text: &str, max_lines: usize) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max_lines)
        .collect::<Vec<_>>()
        .join(" | ")
}


/// Re-run a single test of this binary in a child process whose stdin is a
/// pipe holding `input`.
#[cfg(all(test, unix))]
pub(crate) fn rerun_with_stdin(test_name: &str, input: &str) -> String {
    use std::io::Write;

    let exe = std::env::current_exe().unwrap();
    let mut child = Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(STDIN_CHILD_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert!(
        output.status.success(),
        "{}\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    stdout
}

#[cfg(all(test, unix))]
const STDIN_CHILD_ENV: &str = "DOTUP_STDIN_CHILD";

/// Whether this test process was started by `rerun_with_stdin`
#[cfg(all(test, unix))]
pub(crate) fn in_stdin_child() -> bool {
    std::env::var_os(STDIN_CHILD_ENV).is_some()
}

/// Print whatever is still unread on stdin as `remaining=a,b,c`
#[cfg(all(test, unix))]
pub(crate) fn print_remaining_stdin() {
    use std::io::Read;

    let mut rest = String::new();
    std::io::stdin().read_to_string(&mut rest).unwrap();
    let items: Vec<_> = rest.lines().collect();
    println!("remaining={}", items.join(","));
}
