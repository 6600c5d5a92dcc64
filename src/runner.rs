//! External process execution
//!
//! Every call into `lpass` goes through a [`Runner`], so the parsing code can
//! be driven by canned output in tests.

use std::io;
use std::process::{Command, Stdio};

use log::debug;

/// What a finished child process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable reason for a failed run.
    pub fn reason(&self) -> String {
        let stderr = self.stderr.trim();

        match self.code {
            Some(code) if stderr.is_empty() => format!("exited with status {}", code),
            Some(code) => format!("exited with status {}: {}", code, stderr),
            None => String::from("terminated by signal"),
        }
    }
}

pub trait Runner {
    /// Runs `program` with `args` to completion, capturing its output.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Captured>;
}

impl<R> Runner for &R
where
    R: Runner + ?Sized,
{
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Captured> {
        (**self).run(program, args)
    }
}

/// Spawns real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Captured> {
        debug!("running {} {:?}", program, args);

        // stdin is closed so lpass can never sit waiting on a prompt
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(Captured {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_includes_stderr() {
        let captured = Captured {
            code: Some(1),
            stdout: String::new(),
            stderr: String::from("Error: Could not find item\n"),
        };

        assert!(!captured.success());
        assert_eq!(
            captured.reason(),
            "exited with status 1: Error: Could not find item"
        );
    }

    #[test]
    fn reason_without_stderr() {
        let captured = Captured {
            code: Some(127),
            ..Captured::default()
        };

        assert_eq!(captured.reason(), "exited with status 127");
        assert_eq!(Captured::default().reason(), "terminated by signal");
    }
}
